//! # Product Repository
//!
//! Database operations for the `productos` table.
//!
//! ## Key Operations
//! - CRUD keyed by the auto-assigned integer id
//! - Substring search on name or category
//! - Low-stock report (`cantidad <= threshold`)
//!
//! ## Substring Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Operator types: "idget"                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  nombre LIKE '%' || ?1 || '%'     (case_sensitive_like = ON)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "Widget Pro"  ← MATCH                                                 │
//! │  "WIDGET"      ✗ (case differs)                                        │
//! │  "Gadget"      ✗                                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every listing is ordered by ascending id.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use inventario_core::{Product, ProductDraft, SearchCriterion};

/// Prefixes a query tail with the full product column list.
macro_rules! select_products {
    ($tail:literal) => {
        concat!(
            "SELECT id, nombre, descripcion, cantidad, precio, categoria FROM productos ",
            $tail
        )
    };
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let id = repo.insert(&ProductDraft::new("Bolt", 100, 0.5)).await?;
/// let product = repo.get_by_id(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(id)` - The id SQLite assigned to the new row
    pub async fn insert(&self, draft: &ProductDraft) -> DbResult<i64> {
        debug!(name = %draft.name, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO productos (nombre, descripcion, cantidad, precio, categoria)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.quantity)
        .bind(draft.price)
        .bind(&draft.category)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Product inserted");
        Ok(id)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(select_products!("WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Lists every product in insertion (id) order.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(select_products!("ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Replaces every editable field of the product with `id`.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    pub async fn update(&self, id: i64, draft: &ProductDraft) -> DbResult<()> {
        debug!(id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE productos SET
                nombre = ?2,
                descripcion = ?3,
                cantidad = ?4,
                precio = ?5,
                categoria = ?6
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.quantity)
        .bind(draft.price)
        .bind(&draft.category)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Hard-deletes a product.
    ///
    /// ## Returns
    /// * `Ok(true)` - A row was removed
    /// * `Ok(false)` - No product had that id
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM productos WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Finds products matching a search criterion.
    pub async fn find(&self, criterion: &SearchCriterion) -> DbResult<Vec<Product>> {
        debug!(?criterion, "Searching products");

        let products: Vec<Product> = match criterion {
            SearchCriterion::Id(id) => self.get_by_id(*id).await?.into_iter().collect(),

            SearchCriterion::NameContains(text) => {
                sqlx::query_as::<_, Product>(select_products!(
                    "WHERE nombre LIKE '%' || ?1 || '%' ORDER BY id"
                ))
                .bind(text)
                .fetch_all(&self.pool)
                .await?
            }

            SearchCriterion::CategoryContains(text) => {
                sqlx::query_as::<_, Product>(select_products!(
                    "WHERE categoria LIKE '%' || ?1 || '%' ORDER BY id"
                ))
                .bind(text)
                .fetch_all(&self.pool)
                .await?
            }
        };

        debug!(count = products.len(), "Search returned products");
        Ok(products)
    }

    /// Lists products whose quantity is at or below `threshold`.
    pub async fn find_low_stock(&self, threshold: i64) -> DbResult<Vec<Product>> {
        let products =
            sqlx::query_as::<_, Product>(select_products!("WHERE cantidad <= ?1 ORDER BY id"))
                .bind(threshold)
                .fetch_all(&self.pool)
                .await?;

        debug!(threshold, count = products.len(), "Low stock report");
        Ok(products)
    }

    /// Counts total products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM productos")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
