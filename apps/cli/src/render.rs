//! # Table Rendering
//!
//! Fixed-width product table shared by view, search and the low-stock
//! report.
//!
//! ```text
//! ID    Name                 Description                    Quantity   Price      Category
//! -----------------------------------------------------------------------------------------------
//! 1     Bolt                 Zinc plated                    100        0.50       Hardware
//! ```
//!
//! Columns are left-aligned and separated by one space. Values wider than
//! their column are printed in full and push the rest of the row right.

use inventario_core::Product;

use crate::error::CliResult;
use crate::terminal::{Terminal, Tone};

/// Length of the dashed separator under the header.
pub const TABLE_WIDTH: usize = 95;

/// Builds the header, separator and one line per product.
pub fn render_table(products: &[Product]) -> Vec<String> {
    let mut lines = Vec::with_capacity(products.len() + 2);

    lines.push(format!(
        "{:<5} {:<20} {:<30} {:<10} {:<10} {:<15}",
        "ID", "Name", "Description", "Quantity", "Price", "Category"
    ));
    lines.push("-".repeat(TABLE_WIDTH));

    for product in products {
        lines.push(format!(
            "{:<5} {:<20} {:<30} {:<10} {:<10.2} {:<15}",
            product.id,
            product.name,
            product.description_text(),
            product.quantity,
            product.price,
            product.category_text()
        ));
    }

    lines
}

/// Writes `products` as a table, or `empty_message` when there are none.
pub fn show_products(
    term: &mut impl Terminal,
    products: &[Product],
    empty_message: &str,
) -> CliResult<()> {
    if products.is_empty() {
        term.write_line(Tone::Notice, empty_message)?;
        return Ok(());
    }

    for (i, line) in render_table(products).iter().enumerate() {
        let tone = if i < 2 { Tone::TableHeader } else { Tone::Plain };
        term.write_line(tone, line)?;
    }

    Ok(())
}

/// Blank line followed by a section title.
pub fn heading(term: &mut impl Terminal, title: &str) -> CliResult<()> {
    term.write_line(Tone::Plain, "")?;
    term.write_line(Tone::Heading, title)?;
    Ok(())
}
