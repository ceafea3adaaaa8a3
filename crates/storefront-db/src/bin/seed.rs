//! # Seed Data Generator
//!
//! Populates the database with sample data for development.
//!
//! ## Usage
//! ```bash
//! # Generate 200 products (default)
//! cargo run -p storefront-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p storefront-db --bin seed -- --count 1000
//!
//! # Specify database path
//! cargo run -p storefront-db --bin seed -- --db ./data/storefront.db
//! ```
//!
//! ## Generated Data
//! - Products across a handful of categories and brands, each title is
//!   `{item} {variant}` with a deterministic price between 4.99 and 104.98
//! - One department per entry in `DEPARTMENTS`, with a few employees each

use std::env;
use storefront_core::{NewDepartment, NewEmployee, NewProduct};
use storefront_db::{Database, DbConfig, EntityStore, ProductTextField, SearchableStore};

/// Product categories with their items.
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Clothing",
        &["Hat", "Shirt", "Jacket", "Scarf", "Socks", "Sweater", "Jeans", "Gloves"],
    ),
    (
        "Electronics",
        &["Headphones", "Charger", "Keyboard", "Mouse", "Speaker", "Webcam"],
    ),
    (
        "Kitchen",
        &["Mug", "Kettle", "Skillet", "Cutting Board", "Knife Set", "Blender"],
    ),
    (
        "Outdoors",
        &["Tent", "Backpack", "Water Bottle", "Lantern", "Sleeping Bag"],
    ),
];

const BRANDS: &[&str] = &["Acme", "Northwind", "Contoso", "Globex", "Initech"];

const VARIANTS: &[&str] = &["Red", "Blue", "Green", "Black", "White", "Classic", "Pro"];

const DEPARTMENTS: &[&str] = &["Sales", "Engineering", "Support", "Warehouse"];

const EMPLOYEE_NAMES: &[&str] = &["Ada", "Grace", "Linus", "Margaret", "Dennis", "Barbara"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 200;
    let mut db_path = String::from("./storefront_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(200);
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
                println!("Storefront Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 200)");
                println!("  -d, --db <PATH>    Database file path (default: ./storefront_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Storefront Seed Data Generator");
    println!("==============================");
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

    // Products
    println!();
    println!("Generating products...");

    let products = db.products();
    let start = std::time::Instant::now();
    let mut generated = 0;

    'outer: for (category, items) in CATEGORIES {
        for item in items.iter() {
            for variant in VARIANTS {
                if generated >= count {
                    break 'outer;
                }

                let product = generate_product(category, item, variant, generated);
                if let Err(e) = products.create(product).await {
                    eprintln!("Failed to insert {} {}: {}", variant, item, e);
                    continue;
                }

                generated += 1;
                if generated % 100 == 0 {
                    println!("  Generated {} products...", generated);
                }
            }
        }
    }

    let elapsed = start.elapsed();
    println!("✓ Generated {} products in {:?}", generated, elapsed);

    // Departments and employees
    println!();
    println!("Generating departments...");

    let mut hired = 0;
    for (dept_idx, name) in DEPARTMENTS.iter().enumerate() {
        let department = db
            .departments()
            .create(NewDepartment {
                name: name.to_string(),
            })
            .await?;

        for offset in 0..3 {
            let first = EMPLOYEE_NAMES[(dept_idx * 3 + offset) % EMPLOYEE_NAMES.len()];
            db.employees()
                .create(NewEmployee {
                    name: format!("{} {}", first, name),
                    email: Some(format!(
                        "{}.{}@example.com",
                        first.to_lowercase(),
                        name.to_lowercase()
                    )),
                    department_id: Some(department.id),
                })
                .await?;
            hired += 1;
        }
    }

    println!(
        "✓ Generated {} departments with {} employees",
        DEPARTMENTS.len(),
        hired
    );

    // Verify search
    println!();
    println!("Verifying search...");
    let hats = products
        .search_text_contains(ProductTextField::Title, "hat")
        .await?;
    println!("  Search 'hat': {} results", hats.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates a single product with deterministic data.
fn generate_product(category: &str, item: &str, variant: &str, seed: usize) -> NewProduct {
    // 4.99 - 104.98
    let cents = 499 + ((seed * 37) % 10_000);

    NewProduct {
        title: format!("{} {}", variant, item),
        price: cents as f64 / 100.0,
        brand: Some(BRANDS[seed % BRANDS.len()].to_string()),
        category: Some(category.to_string()),
    }
}
