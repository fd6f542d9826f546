//! In-process [`PartyStore`] backed by vectors.
//!
//! Mirrors the SQLite store closely enough to run the seating rules in tests
//! without a database: ids start at 1, guests keep insertion order, and
//! duplicate names or tables are rejected as conflicts.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use super::{PartyStore, StoreResult};
use crate::error::StoreError;
use crate::types::{Guest, GuestStatus, NewGuest, Table};

#[derive(Debug, Default)]
struct Inner {
    tables: Vec<Table>,
    guests: Vec<Guest>,
}

/// Vector-backed store for tests and local experiments.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store with existing records.
    ///
    /// Guests are taken as-is, status and arrival time included.
    pub fn with_records(tables: Vec<Table>, guests: Vec<Guest>) -> Self {
        MemoryStore {
            inner: RwLock::new(Inner { tables, guests }),
        }
    }

    /// Snapshot of all guests, for assertions.
    pub async fn guests(&self) -> Vec<Guest> {
        self.inner.read().await.guests.clone()
    }

    /// Snapshot of all tables, for assertions.
    pub async fn tables(&self) -> Vec<Table> {
        self.inner.read().await.tables.clone()
    }
}

#[async_trait]
impl PartyStore for MemoryStore {
    async fn add_table(&self, capacity: i64) -> StoreResult<i64> {
        let mut inner = self.inner.write().await;
        let id = inner.tables.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        inner.tables.push(Table { id, capacity });
        debug!(id, capacity, "Table added");
        Ok(id)
    }

    async fn table_exists(&self, id: i64) -> StoreResult<bool> {
        Ok(self.inner.read().await.tables.iter().any(|t| t.id == id))
    }

    async fn add_guest(&self, guest: NewGuest) -> StoreResult<()> {
        let mut inner = self.inner.write().await;

        if inner.guests.iter().any(|g| g.name == guest.name) {
            return Err(StoreError::Conflict(format!("guests.name: {}", guest.name)));
        }
        if inner.guests.iter().any(|g| g.table_id == guest.table_id) {
            return Err(StoreError::Conflict(format!(
                "guests.table_id: {}",
                guest.table_id
            )));
        }

        inner.guests.push(Guest {
            name: guest.name,
            table_id: guest.table_id,
            accompanying_guests: guest.accompanying_guests,
            status: GuestStatus::Allotted,
            time_arrived: None,
        });
        Ok(())
    }

    async fn update_guest_status(&self, name: &str, status: GuestStatus) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        if let Some(guest) = inner.guests.iter_mut().find(|g| g.name == name) {
            guest.status = status;
        }
        Ok(())
    }

    async fn check_in_guest(
        &self,
        name: &str,
        accompanying_guests: i64,
        arrived_at: DateTime<Utc>,
    ) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        if let Some(guest) = inner.guests.iter_mut().find(|g| g.name == name) {
            guest.accompanying_guests = accompanying_guests;
            guest.status = GuestStatus::CheckedIn;
            guest.time_arrived = Some(arrived_at);
        }
        Ok(())
    }

    async fn guest_in_table(&self, table_id: i64) -> StoreResult<Option<String>> {
        let inner = self.inner.read().await;
        Ok(inner
            .guests
            .iter()
            .find(|g| g.table_id == table_id)
            .map(|g| g.name.clone()))
    }

    async fn guest_status(&self, name: &str) -> StoreResult<Option<GuestStatus>> {
        let inner = self.inner.read().await;
        Ok(inner.guests.iter().find(|g| g.name == name).map(|g| g.status))
    }

    async fn capacity_sum(&self) -> StoreResult<i64> {
        Ok(self.inner.read().await.tables.iter().map(|t| t.capacity).sum())
    }

    async fn accompanying_guests_sum(&self, status: GuestStatus) -> StoreResult<(i64, i64)> {
        let inner = self.inner.read().await;
        let (sum, count) = inner
            .guests
            .iter()
            .filter(|g| g.status == status)
            .fold((0, 0), |(sum, count), g| (sum + g.accompanying_guests, count + 1));
        Ok((sum, count))
    }

    async fn guest_list(&self) -> StoreResult<Vec<Guest>> {
        Ok(self.inner.read().await.guests.clone())
    }

    async fn arrived_guests(&self) -> StoreResult<Vec<Guest>> {
        let inner = self.inner.read().await;
        Ok(inner
            .guests
            .iter()
            .filter(|g| g.status.has_arrived())
            .cloned()
            .collect())
    }

    async fn table_capacity(&self, id: i64) -> StoreResult<Option<i64>> {
        let inner = self.inner.read().await;
        Ok(inner.tables.iter().find(|t| t.id == id).map(|t| t.capacity))
    }

    async fn table_of_guest(&self, name: &str) -> StoreResult<Option<i64>> {
        let inner = self.inner.read().await;
        Ok(inner.guests.iter().find(|g| g.name == name).map(|g| g.table_id))
    }

    async fn guest_exists(&self, name: &str) -> StoreResult<bool> {
        Ok(self.inner.read().await.guests.iter().any(|g| g.name == name))
    }

    async fn tables_empty(&self) -> StoreResult<bool> {
        Ok(self.inner.read().await.tables.is_empty())
    }

    async fn guests_empty(&self, status: GuestStatus) -> StoreResult<bool> {
        Ok(!self.inner.read().await.guests.iter().any(|g| g.status == status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_table_ids_start_at_one() {
        let store = MemoryStore::new();
        assert!(store.tables_empty().await.unwrap());

        assert_eq!(store.add_table(3).await.unwrap(), 1);
        assert_eq!(store.add_table(5).await.unwrap(), 2);
        assert_eq!(store.capacity_sum().await.unwrap(), 8);
        assert_eq!(store.table_capacity(2).await.unwrap(), Some(5));
        assert_eq!(store.table_capacity(9).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_guest_is_conflict() {
        let store = MemoryStore::new();
        store.add_table(3).await.unwrap();
        store.add_table(3).await.unwrap();

        let john = NewGuest {
            name: "john".to_string(),
            table_id: 1,
            accompanying_guests: 0,
        };
        store.add_guest(john.clone()).await.unwrap();

        let again = store.add_guest(NewGuest { table_id: 2, ..john }).await;
        assert!(matches!(again, Err(StoreError::Conflict(_))));

        let same_table = store
            .add_guest(NewGuest {
                name: "jack".to_string(),
                table_id: 1,
                accompanying_guests: 0,
            })
            .await;
        assert!(matches!(same_table, Err(StoreError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_arrived_guests_include_checked_out() {
        let store = MemoryStore::new();
        for (i, name) in ["a", "b", "c"].iter().enumerate() {
            store.add_table(4).await.unwrap();
            store
                .add_guest(NewGuest {
                    name: name.to_string(),
                    table_id: i as i64 + 1,
                    accompanying_guests: 1,
                })
                .await
                .unwrap();
        }
        store.check_in_guest("b", 2, Utc::now()).await.unwrap();
        store.check_in_guest("c", 3, Utc::now()).await.unwrap();
        store
            .update_guest_status("c", GuestStatus::CheckedOut)
            .await
            .unwrap();

        let arrived: Vec<String> = store
            .arrived_guests()
            .await
            .unwrap()
            .into_iter()
            .map(|g| g.name)
            .collect();
        assert_eq!(arrived, vec!["b", "c"]);

        assert_eq!(
            store
                .accompanying_guests_sum(GuestStatus::CheckedIn)
                .await
                .unwrap(),
            (2, 1)
        );
        assert!(!store.guests_empty(GuestStatus::Allotted).await.unwrap());
        assert_eq!(store.table_of_guest("c").await.unwrap(), Some(3));
    }
}
