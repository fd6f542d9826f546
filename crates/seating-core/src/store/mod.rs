//! # Store Module
//!
//! The data-store capability the seating rules run against.
//!
//! ## Seam
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  SeatingService<S: PartyStore>                                         │
//! │       │                                                                 │
//! │       │  store.table_exists(id), store.add_guest(..), ...              │
//! │       ▼                                                                 │
//! │  ┌──────────────────────┐        ┌──────────────────────────────┐      │
//! │  │ MemoryStore          │        │ SqliteStore (seating-db)     │      │
//! │  │ (this crate, tests)  │        │ (production)                 │      │
//! │  └──────────────────────┘        └──────────────────────────────┘      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every method is a single read or a single write. Sequencing and rule
//! checks belong to the service, not to implementations.

pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::StoreError;
use crate::types::{Guest, GuestStatus, NewGuest};

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage operations for tables and guests.
#[async_trait]
pub trait PartyStore: Send + Sync {
    /// Inserts a table and returns its assigned id.
    async fn add_table(&self, capacity: i64) -> StoreResult<i64>;

    /// Whether a table with this id exists.
    async fn table_exists(&self, id: i64) -> StoreResult<bool>;

    /// Inserts a guest in state `allotted`.
    async fn add_guest(&self, guest: NewGuest) -> StoreResult<()>;

    /// Sets the status of a guest, leaving every other field alone.
    async fn update_guest_status(&self, name: &str, status: GuestStatus) -> StoreResult<()>;

    /// Marks a guest checked-in with a new party size and arrival time.
    async fn check_in_guest(
        &self,
        name: &str,
        accompanying_guests: i64,
        arrived_at: DateTime<Utc>,
    ) -> StoreResult<()>;

    /// Name of the guest allotted to the table, if any.
    async fn guest_in_table(&self, table_id: i64) -> StoreResult<Option<String>>;

    /// Status of the named guest, if present.
    async fn guest_status(&self, name: &str) -> StoreResult<Option<GuestStatus>>;

    /// Sum of all table capacities (0 with no tables).
    async fn capacity_sum(&self) -> StoreResult<i64>;

    /// `(sum of accompanying_guests, number of guests)` over guests with `status`.
    async fn accompanying_guests_sum(&self, status: GuestStatus) -> StoreResult<(i64, i64)>;

    /// Every guest, in insertion order.
    async fn guest_list(&self) -> StoreResult<Vec<Guest>>;

    /// Guests that have arrived at some point (checked-in or checked-out).
    async fn arrived_guests(&self) -> StoreResult<Vec<Guest>>;

    /// Capacity of the table, if it exists.
    async fn table_capacity(&self, id: i64) -> StoreResult<Option<i64>>;

    /// Table allotted to the named guest, if present.
    async fn table_of_guest(&self, name: &str) -> StoreResult<Option<i64>>;

    /// Whether the named guest is on the list.
    async fn guest_exists(&self, name: &str) -> StoreResult<bool>;

    /// True when no table has been created.
    async fn tables_empty(&self) -> StoreResult<bool>;

    /// True when no guest has `status`.
    async fn guests_empty(&self, status: GuestStatus) -> StoreResult<bool>;
}
