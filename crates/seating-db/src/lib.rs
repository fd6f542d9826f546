//! # seating-db: Database Layer for the Seating Service
//!
//! This crate provides the production [`PartyStore`](seating_core::PartyStore)
//! on SQLite, using sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Seating Data Flow                                │
//! │                                                                         │
//! │  SeatingService (seating-core)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    seating-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  SqliteStore  │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  (store.rs)   │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ tables        │    │ 001_initial  │  │   │
//! │  │   │ Connection    │    │ guests        │    │ _schema.sql  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (SEATING_DB_PATH)                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use seating_core::SeatingService;
//! use seating_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./seating.db")).await?;
//! let service = SeatingService::new(Arc::new(db.store()));
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod store;

pub use error::DbError;
pub use pool::{Database, DbConfig};
pub use store::SqliteStore;
