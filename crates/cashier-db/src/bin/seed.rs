//! # Seed Data Generator
//!
//! Populates the database with sample categories and products for
//! development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 products (default)
//! cargo run -p cashier-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p cashier-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p cashier-db --bin seed -- --db ./data/cashier.db
//! ```
//!
//! Each product gets a name of the form `{base} {size}`, a price derived
//! from its position, and stock between 0 and 100.

use cashier_core::{NewCategory, NewProduct};
use cashier_db::{Database, DbConfig};
use std::env;

/// Sample categories with the product bases sold under them.
const CATALOG: &[(&str, &str, &[&str])] = &[
    (
        "Minuman",
        "Hot and cold drinks",
        &[
            "Kopi Susu",
            "Kopi Hitam",
            "Teh Manis",
            "Teh Tarik",
            "Es Jeruk",
            "Air Mineral",
            "Coklat Panas",
        ],
    ),
    (
        "Makanan",
        "Meals",
        &[
            "Nasi Goreng",
            "Mie Goreng",
            "Ayam Geprek",
            "Soto Ayam",
            "Gado-Gado",
        ],
    ),
    (
        "Camilan",
        "Snacks",
        &[
            "Pisang Goreng",
            "Roti Bakar",
            "Kentang Goreng",
            "Tahu Crispy",
            "Cireng",
        ],
    ),
];

/// Size variants with their price addon.
const SIZES: &[(&str, i64)] = &[("Regular", 0), ("Large", 4_000), ("Jumbo", 8_000)];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 50;
    let mut db_path = String::from("./cashier.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(50);
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
                println!("Cashier Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 50)");
                println!("  -d, --db <PATH>    Database file path (default: ./cashier.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Cashier Seed Data Generator");
    println!("===========================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    for (name, description, _) in CATALOG {
        db.categories()
            .insert(&NewCategory {
                name: name.to_string(),
                description: Some(description.to_string()),
            })
            .await?;
    }
    println!("✓ Created {} categories", CATALOG.len());

    let start = std::time::Instant::now();
    let mut generated = 0;

    'outer: for (_, _, bases) in CATALOG {
        for base in bases.iter() {
            for (size, price_addon) in SIZES {
                if generated >= count {
                    break 'outer;
                }

                let product = generate_product(base, size, *price_addon, generated);
                if let Err(e) = db.products().insert(&product).await {
                    eprintln!("Failed to insert {}: {}", product.name, e);
                    continue;
                }

                generated += 1;
            }
        }
    }

    println!("✓ Generated {} products in {:?}", generated, start.elapsed());
    println!();
    println!("✓ Seed complete!");

    db.close().await;
    Ok(())
}

/// Builds one product from its base name, size and sequence number.
fn generate_product(base: &str, size: &str, price_addon: i64, seed: usize) -> NewProduct {
    // 5.000 - 24.500 in steps of 500, plus the size addon
    let base_price = 5_000 + ((seed * 7) % 40) as i64 * 500;

    NewProduct {
        name: format!("{} {}", base, size),
        price: base_price + price_addon,
        stock: (seed % 101) as i64,
    }
}
