//! # Seed Tables
//!
//! Creates tables in a development database.
//!
//! ## Usage
//! ```bash
//! # Three tables seating 4, 6 and 8 (default)
//! cargo run -p seating-db --bin seed
//!
//! # Custom capacities
//! cargo run -p seating-db --bin seed -- --capacities 2,2,10,10
//!
//! # Specify database path
//! cargo run -p seating-db --bin seed -- --db ./data/seating.db
//! ```
//!
//! Tables go through `SeatingService::add_table`, so the same bounds apply
//! as for `POST /tables`.

use std::env;
use std::sync::Arc;

use seating_core::{PartyStore, SeatingService};
use seating_db::{Database, DbConfig};

const DEFAULT_CAPACITIES: &[i64] = &[4, 6, 8];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut capacities: Vec<i64> = DEFAULT_CAPACITIES.to_vec();
    let mut db_path = String::from("./seating.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--capacities" | "-c" => {
                if i + 1 < args.len() {
                    capacities = parse_capacities(&args[i + 1])?;
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
                println!("Seating Service Seed Tables");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --capacities <LIST>  Comma-separated capacities (default: 4,6,8)");
                println!("  -d, --db <PATH>          Database file path (default: ./seating.db)");
                println!("  -h, --help               Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Seating Service Seed Tables");
    println!("==============================");
    println!("Database:   {}", db_path);
    println!("Capacities: {:?}", capacities);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let store = Arc::new(db.store());

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    if !store.tables_empty().await? {
        println!("⚠ Database already has tables");
        println!("  Skipping seed to keep table ids stable.");
        println!("  Delete the database file to regenerate.");
        db.close().await;
        return Ok(());
    }

    let service = SeatingService::new(store);

    for capacity in capacities {
        match service.add_table(capacity).await {
            Ok(table) => println!("  Table {} seats {}", table.id, table.capacity),
            Err(e) => eprintln!("Failed to add table with capacity {}: {}", capacity, e),
        }
    }

    println!();
    println!("✓ {} empty seats", service.empty_seats().await?);

    db.close().await;
    println!("✓ Seed complete!");

    Ok(())
}

fn parse_capacities(list: &str) -> Result<Vec<i64>, std::num::ParseIntError> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}
