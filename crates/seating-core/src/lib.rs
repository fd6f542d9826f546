//! # seating-core: Business Rules for the Seating Service
//!
//! This crate holds the seating rules for an event: tables with a fixed
//! capacity, a guest list with allotted tables, and arrival tracking.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Seating Service Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP Handlers (apps/api)                     │   │
//! │  │    POST /tables, POST /guest_list/{name}, PUT /guests/{name}    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ seating-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │validation │  │  service  │  │   store   │  │   │
//! │  │   │  Table    │  │  bounds   │  │  allot    │  │PartyStore │  │   │
//! │  │   │  Guest    │  │  names    │  │  check-in │  │MemoryStore│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO SQL • NO NETWORK • RULES ONLY                              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  seating-db (SqliteStore)                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Table, Guest, GuestStatus, response views)
//! - [`error`] - Domain error types
//! - [`validation`] - Field-level bounds on inbound values
//! - [`store`] - The `PartyStore` capability and its in-memory implementation
//! - [`service`] - The seating rules (`SeatingService`)
//! - [`clock`] - Time source for arrival timestamps
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use seating_core::service::SeatingService;
//! use seating_core::store::memory::MemoryStore;
//!
//! # tokio_test_block(async {
//! let service = SeatingService::new(Arc::new(MemoryStore::new()));
//!
//! let table = service.add_table(4).await.unwrap();
//! let name = service.allot_guest("John", table.id, 2).await.unwrap();
//! assert_eq!(name, "john");
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

pub mod clock;
pub mod error;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;

pub use error::{CoreError, CoreResult, StoreError, ValidationError};
pub use service::SeatingService;
pub use store::PartyStore;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Exclusive upper bound for capacity, table ids and accompanying guests.
///
/// Values must stay strictly below `u32::MAX`.
pub const MAX_FIELD_VALUE: i64 = 4_294_967_295;

/// Maximum length of a guest name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;
