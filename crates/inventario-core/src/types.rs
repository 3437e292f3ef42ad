//! # Domain Types
//!
//! Core domain types used throughout Inventario.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌──────────────────────┐  │
//! │  │    Product      │   │  ProductDraft   │   │  SearchCriterion     │  │
//! │  │  ─────────────  │   │  ─────────────  │   │  ──────────────────  │  │
//! │  │  id (rowid)     │   │  (no id)        │   │  Id(i64)             │  │
//! │  │  name           │   │  name           │   │  NameContains(..)    │  │
//! │  │  description?   │   │  description?   │   │  CategoryContains(..)│  │
//! │  │  quantity       │   │  quantity       │   └──────────────────────┘  │
//! │  │  price          │   │  price          │                             │
//! │  │  category?      │   │  category?      │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Column names in storage are Spanish (`nombre`, `descripcion`, ...); the
//! `sqlx` feature maps them onto these fields.

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A stored inventory row.
///
/// Quantity and price are not range-checked: negative values round-trip
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Auto-assigned identifier, immutable once created.
    pub id: i64,

    /// Display name.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "nombre"))]
    pub name: String,

    #[cfg_attr(feature = "sqlx", sqlx(rename = "descripcion"))]
    pub description: Option<String>,

    /// Units on hand.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "cantidad"))]
    pub quantity: i64,

    /// Unit price.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "precio"))]
    pub price: f64,

    /// Free-form grouping label.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "categoria"))]
    pub category: Option<String>,
}

impl Product {
    /// Description as display text (absent renders empty).
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Category as display text (absent renders empty).
    pub fn category_text(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    /// Returns the editable fields of this product.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            quantity: self.quantity,
            price: self.price,
            category: self.category.clone(),
        }
    }

    /// Checks if the product qualifies for a low-stock report at `threshold`.
    #[inline]
    pub fn is_low_stock(&self, threshold: i64) -> bool {
        self.quantity <= threshold
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// Every field of a product except its id.
///
/// Used for both inserts (the id is assigned by storage) and full-row
/// updates keyed by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub price: f64,
    pub category: Option<String>,
}

impl ProductDraft {
    /// Creates a draft with the required fields and no description/category.
    pub fn new(name: impl Into<String>, quantity: i64, price: f64) -> Self {
        ProductDraft {
            name: name.into(),
            description: None,
            quantity,
            price,
            category: None,
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Attaches the storage-assigned id.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            quantity: self.quantity,
            price: self.price,
            category: self.category,
        }
    }
}

// =============================================================================
// Search Criterion
// =============================================================================

/// How the search operation filters products.
///
/// Substring variants are case-sensitive and match anywhere in the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchCriterion {
    /// Exact id match (zero or one result).
    Id(i64),
    /// Name contains the text.
    NameContains(String),
    /// Category contains the text.
    CategoryContains(String),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn bolt() -> Product {
        ProductDraft::new("Bolt", 100, 0.5)
            .category("Hardware")
            .into_product(1)
    }

    #[test]
    fn test_draft_builder() {
        let draft = ProductDraft::new("Nut", 5, 0.1).description("M6 hex");
        assert_eq!(draft.description.as_deref(), Some("M6 hex"));
        assert_eq!(draft.category, None);
    }

    #[test]
    fn test_draft_round_trip_through_product() {
        let product = bolt();
        assert_eq!(product.id, 1);
        assert_eq!(product.to_draft().into_product(1), product);
    }

    #[test]
    fn test_optional_text_renders_empty() {
        let product = bolt();
        assert_eq!(product.description_text(), "");
        assert_eq!(product.category_text(), "Hardware");
    }

    #[test]
    fn test_low_stock_is_inclusive() {
        let product = bolt();
        assert!(product.is_low_stock(100));
        assert!(!product.is_low_stock(99));
    }
}
