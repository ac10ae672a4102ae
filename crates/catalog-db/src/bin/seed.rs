//! # Seed Data Generator
//!
//! Populates an empty database with sample catalog items for development.
//!
//! ## Usage
//! ```bash
//! # Generate 200 items (default)
//! cargo run -p catalog-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p catalog-db --bin seed -- --count 1000
//!
//! # Specify database path
//! cargo run -p catalog-db --bin seed -- --db ./data.db
//! ```
//!
//! Items go through `ItemRepository::create`, so they obey the same
//! uniqueness rules as API-created items.

use catalog_core::{ItemFields, Price};
use catalog_db::{Database, DbConfig, RepoError};
use std::env;

/// Base names combined with sizes to produce unique item names.
const NAMES: &[&str] = &[
    "Widget", "Gadget", "Sprocket", "Gizmo", "Doohickey", "Bracket", "Flange", "Grommet",
    "Hinge", "Spindle", "Washer", "Bolt", "Coupler", "Bushing", "Pulley", "Valve",
];

const SIZES: &[(&str, i64)] = &[
    ("Mini", 0),
    ("Small", 150),
    ("Medium", 400),
    ("Large", 900),
    ("XL", 1500),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 200;
    let mut db_path = String::from("./data.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(count);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Catalog Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of items to generate (default: 200)");
                println!("  -d, --db <PATH>    Database file path (default: ./data.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Catalog Seed Data Generator");
    println!("===========================");
    println!("Database: {}", db_path);
    println!("Items:    {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let items = db.items();

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = items.count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} items", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let start = std::time::Instant::now();
    let mut generated = 0;

    for seed in 0..count {
        let fields = generate_item(seed);

        match items.create(&fields).await {
            Ok(_) => generated += 1,
            Err(RepoError::DuplicateName { name }) => {
                eprintln!("Skipping duplicate {}", name);
            }
            Err(e) => return Err(e.into()),
        }

        if generated > 0 && generated % 100 == 0 {
            println!("  Generated {} items...", generated);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} items in {:?}", generated, elapsed);

    db.close().await;
    Ok(())
}

/// Generates one item; `seed` makes the name unique.
fn generate_item(seed: usize) -> ItemFields {
    let base = NAMES[seed % NAMES.len()];
    let (size, price_addon) = SIZES[(seed / NAMES.len()) % SIZES.len()];
    let batch = seed / (NAMES.len() * SIZES.len());

    let name = format!("{} {} #{:03}", base, size, batch);

    // 1.99 - 9.98 base price plus size addon
    let price_cents = 199 + ((seed * 17) % 800) as i64 + price_addon;

    let description = if seed % 3 == 0 {
        None
    } else {
        Some(format!("{} sized {}", size, base.to_lowercase()))
    };

    ItemFields::new(name, description, Price::from_cents(price_cents))
}
