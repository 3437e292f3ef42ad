//! # Seed Data Generator
//!
//! Populates the database with sample products for manual testing.
//!
//! ## Usage
//! ```bash
//! # Generate 30 products (default) into ./inventario.db
//! cargo run -p inventario-db --bin seed
//!
//! # Generate custom amount into another file
//! cargo run -p inventario-db --bin seed -- --count 100 --db ./scratch.db
//! ```
//!
//! Data is deterministic: the same count always yields the same rows, with
//! quantities spread from 0 to 60 so the low-stock report has something to
//! show.

use inventario_core::ProductDraft;
use inventario_db::{Database, DbConfig};
use std::env;

/// Sample catalogue: (category, item names)
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Hardware",
        &["Bolt", "Nut", "Washer", "Hinge", "Bracket", "Anchor"],
    ),
    (
        "Electrical",
        &["Switch", "Outlet", "Breaker", "Wire Nut", "Conduit", "Fuse"],
    ),
    (
        "Plumbing",
        &["Elbow", "Tee", "Coupling", "Valve", "Trap", "Flange"],
    ),
    (
        "Garden",
        &["Hose", "Nozzle", "Trowel", "Rake", "Shears", "Planter"],
    ),
    (
        "Paint",
        &["Roller", "Brush", "Tray", "Primer", "Tape", "Scraper"],
    ),
];

/// Size variants appended to names once the catalogue runs out.
const SIZES: &[&str] = &["", "Small", "Large"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 30;
    let mut db_path = String::from("./inventario.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if let Some(value) = args.get(i + 1) {
                    count = value.parse().unwrap_or(30);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if let Some(value) = args.get(i + 1) {
                    db_path = value.clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Inventario Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 30)");
                println!("  -d, --db <PATH>    Database file path (default: ./inventario.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Inventario Seed Data Generator");
    println!("==============================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database, schema ready");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        db.close().await;
        return Ok(());
    }

    let mut generated = 0;
    for (seed, draft) in sample_products().take(count).enumerate() {
        if let Err(e) = db.products().insert(&draft).await {
            eprintln!("Failed to insert {} (#{}): {}", draft.name, seed, e);
            continue;
        }
        generated += 1;
    }

    let low = db.products().find_low_stock(5).await?;

    println!("✓ Generated {} products", generated);
    println!("  {} at or below 5 units", low.len());

    db.close().await;
    Ok(())
}

/// Endless deterministic stream of sample drafts.
fn sample_products() -> impl Iterator<Item = ProductDraft> {
    SIZES
        .iter()
        .flat_map(|size| {
            CATEGORIES.iter().flat_map(move |(category, names)| {
                names.iter().map(move |name| (*size, *category, *name))
            })
        })
        .cycle()
        .enumerate()
        .map(|(seed, (size, category, name))| {
            let name = if size.is_empty() {
                name.to_string()
            } else {
                format!("{} {}", name, size)
            };
            let quantity = ((seed * 7) % 61) as i64;
            let price = 0.25 + ((seed * 37) % 2000) as f64 / 100.0;

            ProductDraft::new(name, quantity, price)
                .description(format!("Sample {} item", category.to_lowercase()))
                .category(category)
        })
}
