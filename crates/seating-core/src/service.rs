//! # Seating Service
//!
//! The business rules for tables, allotments and arrivals.
//!
//! ## Allotment Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /guest_list/John  { table: 2, accompanying_guests: 1 }            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  normalize name → "john", validate bounds                              │
//! │       │                                                                 │
//! │       ▼  (write gate held from here)                                   │
//! │  table 2 exists?            ── no ──► "Invalid table-id"                │
//! │       │                                                                 │
//! │  "john" already listed?     ── yes ─► "Guest john already added"        │
//! │       │                                                                 │
//! │  1 + 1 > capacity?          ── yes ─► "Cannot allot table. ..."         │
//! │       │                                                                 │
//! │  table 2 occupied by X?     ── yes ─► "Table already allotted to X"     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  add_guest (status = allotted) ──► "john"                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! Each check-then-write sequence runs under one async mutex, so two
//! requests in the same process cannot both pass the occupancy check for a
//! table. Across processes the SQLite UNIQUE constraints reject the second
//! insert, which surfaces as a store conflict.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::error::{CoreError, CoreResult};
use crate::store::PartyStore;
use crate::types::{ArrivedGuest, GuestListEntry, GuestStatus, NewGuest, Table};
use crate::validation::{
    normalize_guest_name, validate_accompanying_guests, validate_capacity, validate_table_id,
};

/// Applies the seating rules on top of a [`PartyStore`].
pub struct SeatingService<S: PartyStore + ?Sized> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
    write_gate: Mutex<()>,
}

impl<S: PartyStore + ?Sized> SeatingService<S> {
    /// Creates a service using wall-clock time.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Creates a service with an explicit time source.
    pub fn with_clock(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        SeatingService {
            store,
            clock,
            write_gate: Mutex::new(()),
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    // =========================================================================
    // Tables
    // =========================================================================

    /// Creates a table with the given capacity.
    ///
    /// ## Returns
    /// * `Ok(Table)` - the stored table with its assigned id
    /// * `Err(CoreError::Validation)` - capacity out of bounds
    /// * `Err(CoreError::Store)` - the insert failed
    pub async fn add_table(&self, capacity: i64) -> CoreResult<Table> {
        validate_capacity(capacity)?;

        let id = self.store.add_table(capacity).await?;
        info!(id, capacity, "Table created");

        Ok(Table { id, capacity })
    }

    // =========================================================================
    // Guest List
    // =========================================================================

    /// Puts a guest on the list and allots them a table.
    ///
    /// The name is lowercased before any comparison, so "JOHN" and "john"
    /// are the same guest. Returns the normalized name.
    pub async fn allot_guest(
        &self,
        name: &str,
        table_id: i64,
        accompanying_guests: i64,
    ) -> CoreResult<String> {
        let name = normalize_guest_name(name)?;
        validate_table_id(table_id)?;
        validate_accompanying_guests(accompanying_guests)?;

        let _gate = self.write_gate.lock().await;

        if !self.store.table_exists(table_id).await? {
            return Err(CoreError::InvalidTable);
        }

        if self.store.guest_exists(&name).await? {
            return Err(CoreError::GuestAlreadyAdded(name));
        }

        let capacity = self
            .store
            .table_capacity(table_id)
            .await?
            .ok_or(CoreError::InvalidTable)?;

        if accompanying_guests + 1 > capacity {
            return Err(CoreError::AllotCapacityExceeded { capacity });
        }

        if let Some(occupant) = self.store.guest_in_table(table_id).await? {
            return Err(CoreError::TableAlreadyAllotted(occupant));
        }

        self.store
            .add_guest(NewGuest {
                name: name.clone(),
                table_id,
                accompanying_guests,
            })
            .await?;

        info!(guest = %name, table_id, accompanying_guests, "Guest allotted");
        Ok(name)
    }

    /// Lists every guest regardless of status, in insertion order.
    pub async fn guest_list(&self) -> CoreResult<Vec<GuestListEntry>> {
        let guests = self.store.guest_list().await?;
        Ok(guests.into_iter().map(GuestListEntry::from).collect())
    }

    // =========================================================================
    // Arrivals
    // =========================================================================

    /// Checks a guest in with an updated party size.
    ///
    /// Sets status to `checked-in` and stamps the arrival time. The update
    /// does not look at the previous status: a checked-out guest is checked
    /// in again.
    pub async fn check_in_guest(&self, name: &str, accompanying_guests: i64) -> CoreResult<String> {
        let name = normalize_guest_name(name)?;
        validate_accompanying_guests(accompanying_guests)?;

        let _gate = self.write_gate.lock().await;

        if !self.store.guest_exists(&name).await? {
            return Err(CoreError::GuestNotFound(name));
        }

        let table_id = self
            .store
            .table_of_guest(&name)
            .await?
            .ok_or_else(|| CoreError::GuestNotFound(name.clone()))?;

        let capacity = self
            .store
            .table_capacity(table_id)
            .await?
            .ok_or(CoreError::InvalidTable)?;

        if accompanying_guests + 1 > capacity {
            return Err(CoreError::CheckInCapacityExceeded { capacity });
        }

        let arrived_at = self.clock.now();
        self.store
            .check_in_guest(&name, accompanying_guests, arrived_at)
            .await?;

        info!(guest = %name, accompanying_guests, %arrived_at, "Guest checked in");
        Ok(name)
    }

    /// Checks a present guest out.
    ///
    /// Party size and arrival time are kept as they were.
    pub async fn check_out_guest(&self, name: &str) -> CoreResult<()> {
        let name = normalize_guest_name(name)?;

        let _gate = self.write_gate.lock().await;

        if !self.store.guest_exists(&name).await? {
            return Err(CoreError::GuestNotFound(name));
        }

        let status = self
            .store
            .guest_status(&name)
            .await?
            .ok_or_else(|| CoreError::GuestNotFound(name.clone()))?;

        if status != GuestStatus::CheckedIn {
            debug!(guest = %name, %status, "Check-out refused");
            return Err(CoreError::NotCheckedIn { status });
        }

        self.store
            .update_guest_status(&name, GuestStatus::CheckedOut)
            .await?;

        info!(guest = %name, "Guest checked out");
        Ok(())
    }

    /// Guests currently present.
    ///
    /// The store returns everyone who has arrived; only `checked-in` guests
    /// are kept.
    pub async fn arrived_guests(&self) -> CoreResult<Vec<ArrivedGuest>> {
        let guests = self.store.arrived_guests().await?;
        Ok(guests
            .into_iter()
            .filter(|g| g.status == GuestStatus::CheckedIn)
            .map(ArrivedGuest::from)
            .collect())
    }

    /// Seats not taken by checked-in parties.
    ///
    /// ```text
    /// sum(capacity) − (checked-in guests + their accompanying guests)
    /// ```
    pub async fn empty_seats(&self) -> CoreResult<i64> {
        if self.store.tables_empty().await? {
            return Ok(0);
        }

        let capacity = self.store.capacity_sum().await?;

        if self.store.guests_empty(GuestStatus::CheckedIn).await? {
            return Ok(capacity);
        }

        let (accompanying, count) = self
            .store
            .accompanying_guests_sum(GuestStatus::CheckedIn)
            .await?;

        Ok(capacity - (accompanying + count))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::store::memory::MemoryStore;
    use crate::types::Guest;
    use chrono::{TimeZone, Utc};

    fn guest(table_id: i64, accompanying: i64, status: GuestStatus, name: &str) -> Guest {
        Guest {
            name: name.to_string(),
            table_id,
            accompanying_guests: accompanying,
            status,
            time_arrived: None,
        }
    }

    /// Tables 1 and 2 with capacities 3 and 4; john allotted to table 1.
    fn party_with_john() -> (SeatingService<MemoryStore>, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::with_records(
            vec![Table { id: 1, capacity: 3 }, Table { id: 2, capacity: 4 }],
            vec![guest(1, 1, GuestStatus::Allotted, "john")],
        ));
        (SeatingService::new(store.clone()), store)
    }

    // -------------------------------------------------------------------------
    // add_table
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_add_table_assigns_id() {
        let store = Arc::new(MemoryStore::new());
        let service = SeatingService::new(store.clone());

        let table = service.add_table(10).await.unwrap();
        assert!(table.id > 0);
        assert_eq!(table.capacity, 10);
        assert_eq!(store.tables().await, vec![table]);
    }

    #[tokio::test]
    async fn test_add_table_rejects_out_of_bounds() {
        let store = Arc::new(MemoryStore::new());
        let service = SeatingService::new(store.clone());

        for capacity in [0, -1, crate::MAX_FIELD_VALUE, 99_999_999_999_999_999] {
            let err = service.add_table(capacity).await.unwrap_err();
            assert!(matches!(err, CoreError::Validation(_)), "capacity {capacity}");
        }
        assert!(store.tables().await.is_empty());
    }

    // -------------------------------------------------------------------------
    // allot_guest
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_allot_invalid_table() {
        let (service, store) = party_with_john();

        let err = service.allot_guest("akhila", 3, 10).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid table-id");
        assert_eq!(store.guests().await.len(), 1);
    }

    #[tokio::test]
    async fn test_allot_repeat_name_any_case() {
        let (service, _) = party_with_john();

        let err = service.allot_guest("john", 2, 2).await.unwrap_err();
        assert_eq!(err.to_string(), "Guest john already added");

        let err = service.allot_guest("JOHN", 2, 2).await.unwrap_err();
        assert_eq!(err.to_string(), "Guest john already added");
    }

    #[tokio::test]
    async fn test_allot_over_capacity() {
        let (service, _) = party_with_john();

        let err = service.allot_guest("akhila", 2, 10).await.unwrap_err();
        assert_eq!(err.to_string(), "Cannot allot table. Table capacity is 4");
    }

    #[tokio::test]
    async fn test_allot_occupied_table() {
        let (service, _) = party_with_john();

        let err = service.allot_guest("akhila", 1, 0).await.unwrap_err();
        assert_eq!(err.to_string(), "Table already allotted to john");
    }

    #[tokio::test]
    async fn test_allot_negative_accompanying_guests() {
        let (service, store) = party_with_john();

        let err = service.allot_guest("akhila", 2, -1).await.unwrap_err();
        assert_eq!(err.to_string(), "accompanying_guests must be 0 or greater");
        assert_eq!(store.guests().await.len(), 1);
    }

    #[tokio::test]
    async fn test_allot_valid_guest() {
        let (service, store) = party_with_john();

        let name = service.allot_guest("Akhila", 2, 3).await.unwrap();
        assert_eq!(name, "akhila");

        let guests = store.guests().await;
        assert_eq!(guests.len(), 2);
        assert_eq!(guests[1], guest(2, 3, GuestStatus::Allotted, "akhila"));
    }

    #[tokio::test]
    async fn test_concurrent_allotments_single_winner() {
        let store = Arc::new(MemoryStore::with_records(
            vec![Table { id: 1, capacity: 4 }],
            vec![],
        ));
        let service = Arc::new(SeatingService::new(store.clone()));

        let a = tokio::spawn({
            let service = service.clone();
            async move { service.allot_guest("ann", 1, 0).await }
        });
        let b = tokio::spawn({
            let service = service.clone();
            async move { service.allot_guest("bob", 1, 0).await }
        });

        let results = [a.await.unwrap(), b.await.unwrap()];
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .any(|r| matches!(r, Err(CoreError::TableAlreadyAllotted(_)))));
        assert_eq!(store.guests().await.len(), 1);
    }

    // -------------------------------------------------------------------------
    // check_in_guest
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_check_in_unknown_guest() {
        let (service, _) = party_with_john();

        let err = service.check_in_guest("akhila", 10).await.unwrap_err();
        assert_eq!(err.to_string(), "Guest akhila is not present in Guestlist");
    }

    #[tokio::test]
    async fn test_check_in_capacity_boundary() {
        let (service, store) = party_with_john();

        let err = service.check_in_guest("john", 4).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot update number of accompanying guests. Table capacity is 3"
        );

        let err = service.check_in_guest("john", 3).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::CheckInCapacityExceeded { capacity: 3 }
        ));
        assert_eq!(store.guests().await[0].status, GuestStatus::Allotted);

        service.check_in_guest("john", 2).await.unwrap();
        assert_eq!(store.guests().await[0].accompanying_guests, 2);
    }

    #[tokio::test]
    async fn test_check_in_sets_status_and_time() {
        let store = Arc::new(MemoryStore::with_records(
            vec![Table { id: 1, capacity: 3 }],
            vec![guest(1, 1, GuestStatus::Allotted, "john")],
        ));
        let arrived = Utc.with_ymd_and_hms(2024, 6, 1, 19, 30, 0).unwrap();
        let service = SeatingService::with_clock(store.clone(), Arc::new(FixedClock(arrived)));

        let name = service.check_in_guest("John", 0).await.unwrap();
        assert_eq!(name, "john");

        let john = &store.guests().await[0];
        assert_eq!(john.status, GuestStatus::CheckedIn);
        assert_eq!(john.accompanying_guests, 0);
        assert_eq!(john.time_arrived, Some(arrived));
    }

    #[tokio::test]
    async fn test_check_in_after_check_out_is_allowed() {
        let store = Arc::new(MemoryStore::with_records(
            vec![Table { id: 1, capacity: 3 }],
            vec![guest(1, 1, GuestStatus::CheckedOut, "john")],
        ));
        let service = SeatingService::new(store.clone());

        service.check_in_guest("john", 1).await.unwrap();
        assert_eq!(store.guests().await[0].status, GuestStatus::CheckedIn);
    }

    // -------------------------------------------------------------------------
    // check_out_guest
    // -------------------------------------------------------------------------

    fn party_for_check_out() -> (SeatingService<MemoryStore>, Arc<MemoryStore>) {
        let arrived = Utc.with_ymd_and_hms(2024, 6, 1, 20, 0, 0).unwrap();
        let mut akhila = guest(2, 2, GuestStatus::CheckedIn, "akhila");
        akhila.time_arrived = Some(arrived);

        let store = Arc::new(MemoryStore::with_records(
            vec![
                Table { id: 1, capacity: 3 },
                Table { id: 2, capacity: 4 },
                Table { id: 3, capacity: 5 },
            ],
            vec![
                guest(1, 1, GuestStatus::Allotted, "john"),
                akhila,
                guest(3, 3, GuestStatus::CheckedOut, "jack"),
            ],
        ));
        (SeatingService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_check_out_unknown_guest() {
        let (service, _) = party_for_check_out();

        let err = service.check_out_guest("prasob").await.unwrap_err();
        assert_eq!(err.to_string(), "Guest prasob is not present in Guestlist");
    }

    #[tokio::test]
    async fn test_check_out_requires_checked_in() {
        let (service, store) = party_for_check_out();
        let before = store.guests().await;

        let not_arrived = service.check_out_guest("john").await.unwrap_err();
        let already_left = service.check_out_guest("jack").await.unwrap_err();

        assert_eq!(not_arrived.to_string(), "Request failed, guest not checked-in");
        assert_eq!(already_left.to_string(), "Request failed, guest not checked-in");
        assert!(matches!(
            already_left,
            CoreError::NotCheckedIn {
                status: GuestStatus::CheckedOut
            }
        ));
        assert_eq!(store.guests().await, before);
    }

    #[tokio::test]
    async fn test_check_out_keeps_party_and_arrival() {
        let (service, store) = party_for_check_out();
        let before = store.guests().await[1].clone();

        service.check_out_guest("Akhila").await.unwrap();

        let after = &store.guests().await[1];
        assert_eq!(after.status, GuestStatus::CheckedOut);
        assert_eq!(after.accompanying_guests, before.accompanying_guests);
        assert_eq!(after.time_arrived, before.time_arrived);
    }

    // -------------------------------------------------------------------------
    // queries
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_guest_list_empty_and_ordered() {
        let service = SeatingService::new(Arc::new(MemoryStore::new()));
        assert!(service.guest_list().await.unwrap().is_empty());

        let store = Arc::new(MemoryStore::with_records(
            vec![],
            vec![
                guest(1, 1, GuestStatus::Allotted, "john"),
                guest(2, 2, GuestStatus::CheckedIn, "akhila"),
            ],
        ));
        let service = SeatingService::new(store);

        let list = service.guest_list().await.unwrap();
        assert_eq!(
            list,
            vec![
                GuestListEntry {
                    table: 1,
                    accompanying_guests: 1,
                    name: "john".to_string()
                },
                GuestListEntry {
                    table: 2,
                    accompanying_guests: 2,
                    name: "akhila".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_arrived_guests_only_checked_in() {
        let (service, _) = party_for_check_out();

        let arrived = service.arrived_guests().await.unwrap();
        assert_eq!(arrived.len(), 1);
        assert_eq!(arrived[0].name, "akhila");
        assert_eq!(arrived[0].accompanying_guests, 2);
        assert!(arrived[0].time_arrived.is_some());
    }

    #[tokio::test]
    async fn test_empty_seats() {
        let store = Arc::new(MemoryStore::with_records(
            vec![
                Table { id: 1, capacity: 3 },
                Table { id: 2, capacity: 4 },
                Table { id: 3, capacity: 5 },
            ],
            vec![
                guest(1, 0, GuestStatus::CheckedIn, "john"),
                guest(2, 1, GuestStatus::CheckedIn, "akhila"),
                guest(3, 2, GuestStatus::CheckedOut, "jack"),
            ],
        ));
        let service = SeatingService::new(store);

        assert_eq!(service.empty_seats().await.unwrap(), 9);
    }

    #[tokio::test]
    async fn test_empty_seats_short_circuits() {
        let service = SeatingService::new(Arc::new(MemoryStore::new()));
        assert_eq!(service.empty_seats().await.unwrap(), 0);

        let (service, _) = party_with_john();
        assert_eq!(service.empty_seats().await.unwrap(), 7);
    }
}
