//! # Record Operations
//!
//! The six user actions behind the menu. Each one is stateless: it takes
//! the storage handle and a terminal, runs to completion and returns.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation         Prompts                          Storage call        │
//! │  ───────────────   ──────────────────────────────   ─────────────────   │
//! │  register          name, desc, qty*, price*, cat    insert              │
//! │  view              -                                list_all            │
//! │  update            id, then each field (blank=keep) get_by_id, update   │
//! │  delete            id                               delete              │
//! │  search            mode (1-3), value                find                │
//! │  low_stock_report  threshold*                       find_low_stock      │
//! │                                                                         │
//! │  * re-prompted until the text parses                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage errors are returned as [`CliError::Db`](crate::error::CliError)
//! and reported by the dispatcher.

use tracing::debug;

use inventario_core::validation::{parse_price, parse_product_id, parse_quantity, parse_threshold};
use inventario_core::{ProductDraft, SearchCriterion};
use inventario_db::Database;

use crate::error::CliResult;
use crate::prompt::{
    read_optional_with_default, read_or_default, read_required_float, read_required_int,
    read_text,
};
use crate::render::{heading, show_products};
use crate::terminal::{Terminal, Tone};

const NOT_FOUND: &str = "Product not found.";

/// Reads a target id. Text that isn't an integer can't match any row.
fn read_target_id(term: &mut impl Terminal, prompt: &str) -> CliResult<Option<i64>> {
    let input = read_text(term, prompt)?;
    Ok(parse_product_id(&input).ok())
}

/// Blank keeps the stored value, including an absent one.
fn read_optional_field(
    term: &mut impl Terminal,
    label: &str,
    current: &Option<String>,
) -> CliResult<Option<String>> {
    let shown = current.as_deref().unwrap_or("");
    let input = read_optional_with_default(term, &format!("{} ({}): ", label, shown), "")?;
    if input.is_empty() {
        Ok(current.clone())
    } else {
        Ok(Some(input))
    }
}

// =============================================================================
// Register
// =============================================================================

/// Prompts for every field and inserts a new product.
pub async fn register(db: &Database, term: &mut impl Terminal) -> CliResult<()> {
    heading(term, "--- Register New Product ---")?;

    let name = read_text(term, "Product name: ")?;
    let description = read_text(term, "Product description: ")?;
    let quantity = read_required_int(term, "Quantity available: ", parse_quantity)?;
    let price = read_required_float(term, "Product price: ", parse_price)?;
    let category = read_text(term, "Product category: ")?;

    let draft = ProductDraft::new(name, quantity, price)
        .description(description)
        .category(category);

    let id = db.products().insert(&draft).await?;
    debug!(id, "Registered product");
    term.write_line(
        Tone::Success,
        &format!("Product registered successfully (ID {}).", id),
    )?;
    Ok(())
}

// =============================================================================
// View
// =============================================================================

/// Lists every product in id order.
pub async fn view(db: &Database, term: &mut impl Terminal) -> CliResult<()> {
    heading(term, "--- Registered Products ---")?;

    let products = db.products().list_all().await?;
    show_products(term, &products, "No products registered.")
}

// =============================================================================
// Update
// =============================================================================

/// Edits an existing product; blank answers keep the current values.
pub async fn update(db: &Database, term: &mut impl Terminal) -> CliResult<()> {
    heading(term, "--- Update Product ---")?;

    let Some(id) = read_target_id(term, "Enter the ID of the product to update: ")? else {
        term.write_line(Tone::Failure, NOT_FOUND)?;
        return Ok(());
    };

    let Some(product) = db.products().get_by_id(id).await? else {
        term.write_line(Tone::Failure, NOT_FOUND)?;
        return Ok(());
    };

    term.write_line(
        Tone::Notice,
        "Product found. Enter the new values (leave blank to keep the current value):",
    )?;

    let name = read_optional_with_default(
        term,
        &format!("Name ({}): ", product.name),
        &product.name,
    )?;
    let description = read_optional_field(term, "Description", &product.description)?;
    let quantity = read_or_default(
        term,
        &format!("Quantity ({}): ", product.quantity),
        product.quantity,
        parse_quantity,
    )?;
    let price = read_or_default(
        term,
        &format!("Price ({}): ", product.price),
        product.price,
        parse_price,
    )?;
    let category = read_optional_field(term, "Category", &product.category)?;

    let draft = ProductDraft {
        name,
        description,
        quantity,
        price,
        category,
    };

    db.products().update(id, &draft).await?;
    term.write_line(Tone::Success, "Product updated successfully.")?;
    Ok(())
}

// =============================================================================
// Delete
// =============================================================================

/// Hard-deletes a product by id.
pub async fn delete(db: &Database, term: &mut impl Terminal) -> CliResult<()> {
    heading(term, "--- Delete Product ---")?;

    let id = read_target_id(term, "Enter the ID of the product to delete: ")?;

    let deleted = match id {
        Some(id) => db.products().delete(id).await?,
        None => false,
    };
    debug!(?id, deleted, "Delete requested");

    if deleted {
        term.write_line(Tone::Success, "Product deleted successfully.")?;
    } else {
        term.write_line(Tone::Failure, NOT_FOUND)?;
    }
    Ok(())
}

// =============================================================================
// Search
// =============================================================================

/// Searches by exact id, name substring or category substring.
pub async fn search(db: &Database, term: &mut impl Terminal) -> CliResult<()> {
    heading(term, "--- Search Products ---")?;
    term.write_line(Tone::Plain, "Search options:")?;
    term.write_line(Tone::Plain, "1. Search by ID")?;
    term.write_line(Tone::Plain, "2. Search by Name")?;
    term.write_line(Tone::Plain, "3. Search by Category")?;

    let mode = read_text(term, "Enter your option (1-3): ")?;

    let criterion = match mode.trim() {
        "1" => {
            let input = read_text(term, "Enter the product ID: ")?;
            match parse_product_id(&input) {
                Ok(id) => Some(SearchCriterion::Id(id)),
                Err(_) => None,
            }
        }
        "2" => Some(SearchCriterion::NameContains(read_text(
            term,
            "Enter the product name: ",
        )?)),
        "3" => Some(SearchCriterion::CategoryContains(read_text(
            term,
            "Enter the product category: ",
        )?)),
        _ => {
            term.write_line(Tone::Failure, "Invalid option.")?;
            return Ok(());
        }
    };

    let products = match criterion {
        Some(criterion) => db.products().find(&criterion).await?,
        None => Vec::new(),
    };

    show_products(
        term,
        &products,
        "No products matched the search criteria.",
    )
}

// =============================================================================
// Low-Stock Report
// =============================================================================

/// Lists products whose quantity is at or below a threshold.
pub async fn low_stock_report(db: &Database, term: &mut impl Terminal) -> CliResult<()> {
    heading(term, "--- Low Stock Report ---")?;

    let threshold = read_required_int(
        term,
        "Enter the quantity limit (show products with quantity <= this limit): ",
        parse_threshold,
    )?;

    let products = db.products().find_low_stock(threshold).await?;
    show_products(
        term,
        &products,
        "No products at or below the specified limit.",
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use crate::terminal::ScriptedTerminal;
    use inventario_db::DbConfig;

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    async fn seed_bolt_and_nut(db: &Database) {
        db.products()
            .insert(&ProductDraft::new("Bolt", 100, 0.5).category("Hardware"))
            .await
            .unwrap();
        db.products()
            .insert(&ProductDraft::new("Nut", 5, 0.1).category("Hardware"))
            .await
            .unwrap();
    }

    fn row_ids(term: &ScriptedTerminal) -> Vec<String> {
        term.lines
            .iter()
            .filter(|(tone, _)| *tone == Tone::Plain)
            .filter_map(|(_, line)| line.split_whitespace().next())
            .filter(|first| first.chars().all(|c| c.is_ascii_digit()))
            .map(str::to_string)
            .collect()
    }

    #[tokio::test]
    async fn test_register_round_trip() {
        let db = db().await;
        let mut term =
            ScriptedTerminal::new(&["Bolt", "Zinc plated", "100", "0.5", "Hardware"]);

        register(&db, &mut term).await.unwrap();

        assert!(term.printed("Product registered successfully (ID 1)."));
        let product = db.products().get_by_id(1).await.unwrap().unwrap();
        assert_eq!(product.name, "Bolt");
        assert_eq!(product.description.as_deref(), Some("Zinc plated"));
        assert_eq!(product.quantity, 100);
        assert!((product.price - 0.5).abs() < 1e-9);
        assert_eq!(product.category.as_deref(), Some("Hardware"));
    }

    #[tokio::test]
    async fn test_register_reprompts_numbers() {
        let db = db().await;
        let mut term = ScriptedTerminal::new(&[
            "Nut", "", "five", "5", "ten cents", "0.1", "Hardware",
        ]);

        register(&db, &mut term).await.unwrap();

        assert!(term.printed("Error: Quantity must be a whole number."));
        assert!(term.printed("Error: Price must be a number."));
        let product = db.products().get_by_id(1).await.unwrap().unwrap();
        assert_eq!(product.quantity, 5);
        assert_eq!(product.description.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_register_cancelled_inserts_nothing() {
        let db = db().await;
        let mut term = ScriptedTerminal::new(&["Bolt", "desc", "oops"]);

        let result = register(&db, &mut term).await;

        assert!(matches!(result, Err(CliError::Cancelled)));
        assert_eq!(db.products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_view_empty() {
        let db = db().await;
        let mut term = ScriptedTerminal::new(&[]);

        view(&db, &mut term).await.unwrap();

        assert!(term.printed("No products registered."));
    }

    #[tokio::test]
    async fn test_view_lists_in_id_order() {
        let db = db().await;
        seed_bolt_and_nut(&db).await;
        let mut term = ScriptedTerminal::new(&[]);

        view(&db, &mut term).await.unwrap();

        assert_eq!(row_ids(&term), vec!["1", "2"]);
        assert!(term.printed(&"-".repeat(95)));
    }

    #[tokio::test]
    async fn test_update_not_found_stops_prompting() {
        let db = db().await;
        let mut term = ScriptedTerminal::new(&["42", "should not be read"]);

        update(&db, &mut term).await.unwrap();

        assert!(term.printed("Product not found."));
        assert_eq!(term.prompts.len(), 1);
        assert_eq!(term.remaining_inputs(), 1);
    }

    #[tokio::test]
    async fn test_update_all_blank_keeps_fields() {
        let db = db().await;
        seed_bolt_and_nut(&db).await;
        let before = db.products().get_by_id(1).await.unwrap().unwrap();
        let mut term = ScriptedTerminal::new(&["1", "", "", "", "", ""]);

        update(&db, &mut term).await.unwrap();

        assert!(term.printed("Product updated successfully."));
        assert_eq!(term.prompts[1], "Name (Bolt): ");
        assert_eq!(term.prompts[5], "Category (Hardware): ");
        let after = db.products().get_by_id(1).await.unwrap().unwrap();
        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn test_update_changes_selected_fields() {
        let db = db().await;
        seed_bolt_and_nut(&db).await;
        let mut term =
            ScriptedTerminal::new(&["2", "Hex Nut", "M6", "lots", "250", "", "Fasteners"]);

        update(&db, &mut term).await.unwrap();

        assert!(term.printed("Error: Quantity must be a whole number."));
        let product = db.products().get_by_id(2).await.unwrap().unwrap();
        assert_eq!(product.name, "Hex Nut");
        assert_eq!(product.description.as_deref(), Some("M6"));
        assert_eq!(product.quantity, 250);
        assert!((product.price - 0.1).abs() < 1e-9);
        assert_eq!(product.category.as_deref(), Some("Fasteners"));
    }

    #[tokio::test]
    async fn test_delete_missing_keeps_rows() {
        let db = db().await;
        seed_bolt_and_nut(&db).await;

        for input in ["9", "abc"] {
            let mut term = ScriptedTerminal::new(&[input]);
            delete(&db, &mut term).await.unwrap();
            assert!(term.printed("Product not found."));
        }

        assert_eq!(db.products().count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let db = db().await;
        seed_bolt_and_nut(&db).await;
        let mut term = ScriptedTerminal::new(&["1"]);

        delete(&db, &mut term).await.unwrap();

        assert!(term.printed("Product deleted successfully."));
        assert!(db.products().get_by_id(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_search_by_name_is_case_sensitive() {
        let db = db().await;
        db.products()
            .insert(&ProductDraft::new("Widget Pro", 3, 9.99))
            .await
            .unwrap();

        let mut term = ScriptedTerminal::new(&["2", "idget"]);
        search(&db, &mut term).await.unwrap();
        assert_eq!(row_ids(&term), vec!["1"]);

        let mut term = ScriptedTerminal::new(&["2", "WIDGET"]);
        search(&db, &mut term).await.unwrap();
        assert!(term.printed("No products matched the search criteria."));
    }

    #[tokio::test]
    async fn test_search_by_id_and_category() {
        let db = db().await;
        seed_bolt_and_nut(&db).await;

        let mut term = ScriptedTerminal::new(&["1", "2"]);
        search(&db, &mut term).await.unwrap();
        assert_eq!(row_ids(&term), vec!["2"]);

        let mut term = ScriptedTerminal::new(&["3", "Hard"]);
        search(&db, &mut term).await.unwrap();
        assert_eq!(row_ids(&term), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_search_invalid_mode_aborts() {
        let db = db().await;
        let mut term = ScriptedTerminal::new(&["4", "unused"]);

        search(&db, &mut term).await.unwrap();

        assert!(term.printed("Invalid option."));
        assert_eq!(term.remaining_inputs(), 1);
    }

    #[tokio::test]
    async fn test_low_stock_report() {
        let db = db().await;
        seed_bolt_and_nut(&db).await;
        let mut term = ScriptedTerminal::new(&["few", "10"]);

        low_stock_report(&db, &mut term).await.unwrap();

        assert!(term.printed("Error: Threshold must be a whole number."));
        assert_eq!(row_ids(&term), vec!["2"]);
    }

    #[tokio::test]
    async fn test_low_stock_report_none() {
        let db = db().await;
        seed_bolt_and_nut(&db).await;
        let mut term = ScriptedTerminal::new(&["-1"]);

        low_stock_report(&db, &mut term).await.unwrap();

        assert!(term.printed("No products at or below the specified limit."));
    }

    #[tokio::test]
    async fn test_storage_errors_are_returned() {
        let db = db().await;
        db.close().await;
        let mut term = ScriptedTerminal::new(&[]);

        let result = view(&db, &mut term).await;

        assert!(matches!(result, Err(CliError::Db(_))));
    }
}
