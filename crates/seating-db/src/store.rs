//! # SQLite Store
//!
//! The production [`PartyStore`]: one SQL statement per operation.
//!
//! ## Tables
//! ```text
//! ┌──────────────────────────┐        ┌──────────────────────────────────┐
//! │ tables                   │        │ guests                           │
//! │ ──────────────────────── │        │ ──────────────────────────────── │
//! │ id        INTEGER PK     │◄───────│ table_id   INTEGER UNIQUE FK     │
//! │ capacity  INTEGER > 0    │        │ name       TEXT UNIQUE           │
//! └──────────────────────────┘        │ accompanying_guests INTEGER      │
//! │                                   │ status     TEXT                  │
//! │                                   │ time_arrived TEXT NULL           │
//!                                     └──────────────────────────────────┘
//! ```
//!
//! Guest order is insertion order (`rowid`).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::query::QueryScalar;
use sqlx::sqlite::SqliteArguments;
use sqlx::{Sqlite, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};
use seating_core::store::{PartyStore, StoreResult};
use seating_core::{Guest, GuestStatus, NewGuest};

/// [`PartyStore`] over a SQLite pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Creates a new SqliteStore.
    pub fn new(pool: SqlitePool) -> Self {
        SqliteStore { pool }
    }

    /// Runs a `SELECT COUNT(*)` style query and reports whether it found rows.
    async fn any_rows<'q>(
        &self,
        query: QueryScalar<'q, Sqlite, i64, SqliteArguments<'q>>,
    ) -> DbResult<bool> {
        let count = query.fetch_one(&self.pool).await?;
        Ok(count > 0)
    }
}

#[async_trait]
impl PartyStore for SqliteStore {
    async fn add_table(&self, capacity: i64) -> StoreResult<i64> {
        debug!(capacity, "Inserting table");

        let result = sqlx::query("INSERT INTO tables (capacity) VALUES (?1)")
            .bind(capacity)
            .execute(&self.pool)
            .await
            .map_err(DbError::from)?;

        Ok(result.last_insert_rowid())
    }

    async fn table_exists(&self, id: i64) -> StoreResult<bool> {
        let query = sqlx::query_scalar::<Sqlite, i64>("SELECT COUNT(*) FROM tables WHERE id = ?1")
            .bind(id);
        Ok(self.any_rows(query).await?)
    }

    async fn add_guest(&self, guest: NewGuest) -> StoreResult<()> {
        debug!(name = %guest.name, table_id = guest.table_id, "Inserting guest");

        sqlx::query(
            r#"
            INSERT INTO guests (name, table_id, accompanying_guests, status, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&guest.name)
        .bind(guest.table_id)
        .bind(guest.accompanying_guests)
        .bind(GuestStatus::Allotted)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(())
    }

    async fn update_guest_status(&self, name: &str, status: GuestStatus) -> StoreResult<()> {
        debug!(name = %name, %status, "Updating guest status");

        let result = sqlx::query("UPDATE guests SET status = ?2 WHERE name = ?1")
            .bind(name)
            .bind(status)
            .execute(&self.pool)
            .await
            .map_err(DbError::from)?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Guest", name).into());
        }

        Ok(())
    }

    async fn check_in_guest(
        &self,
        name: &str,
        accompanying_guests: i64,
        arrived_at: DateTime<Utc>,
    ) -> StoreResult<()> {
        debug!(name = %name, accompanying_guests, "Checking in guest");

        let result = sqlx::query(
            r#"
            UPDATE guests SET
                status = ?2,
                accompanying_guests = ?3,
                time_arrived = ?4
            WHERE name = ?1
            "#,
        )
        .bind(name)
        .bind(GuestStatus::CheckedIn)
        .bind(accompanying_guests)
        .bind(arrived_at)
        .execute(&self.pool)
        .await
        .map_err(DbError::from)?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Guest", name).into());
        }

        Ok(())
    }

    async fn guest_in_table(&self, table_id: i64) -> StoreResult<Option<String>> {
        let name = sqlx::query_scalar::<_, String>("SELECT name FROM guests WHERE table_id = ?1")
            .bind(table_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DbError::from)?;

        Ok(name)
    }

    async fn guest_status(&self, name: &str) -> StoreResult<Option<GuestStatus>> {
        let status =
            sqlx::query_scalar::<_, GuestStatus>("SELECT status FROM guests WHERE name = ?1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await
                .map_err(DbError::from)?;

        Ok(status)
    }

    async fn capacity_sum(&self) -> StoreResult<i64> {
        let sum = sqlx::query_scalar::<_, i64>("SELECT COALESCE(SUM(capacity), 0) FROM tables")
            .fetch_one(&self.pool)
            .await
            .map_err(DbError::from)?;

        Ok(sum)
    }

    async fn accompanying_guests_sum(&self, status: GuestStatus) -> StoreResult<(i64, i64)> {
        let sums = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT COALESCE(SUM(accompanying_guests), 0), COUNT(name)
            FROM guests
            WHERE status = ?1
            "#,
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(sums)
    }

    async fn guest_list(&self) -> StoreResult<Vec<Guest>> {
        let guests = sqlx::query_as::<_, Guest>(
            r#"
            SELECT name, table_id, accompanying_guests, status, time_arrived
            FROM guests
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::from)?;

        debug!(count = guests.len(), "Loaded guest list");
        Ok(guests)
    }

    async fn arrived_guests(&self) -> StoreResult<Vec<Guest>> {
        let guests = sqlx::query_as::<_, Guest>(
            r#"
            SELECT name, table_id, accompanying_guests, status, time_arrived
            FROM guests
            WHERE status IN (?1, ?2)
            ORDER BY rowid
            "#,
        )
        .bind(GuestStatus::CheckedIn)
        .bind(GuestStatus::CheckedOut)
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(guests)
    }

    async fn table_capacity(&self, id: i64) -> StoreResult<Option<i64>> {
        let capacity = sqlx::query_scalar::<_, i64>("SELECT capacity FROM tables WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DbError::from)?;

        Ok(capacity)
    }

    async fn table_of_guest(&self, name: &str) -> StoreResult<Option<i64>> {
        let table_id = sqlx::query_scalar::<_, i64>("SELECT table_id FROM guests WHERE name = ?1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(DbError::from)?;

        Ok(table_id)
    }

    async fn guest_exists(&self, name: &str) -> StoreResult<bool> {
        let query = sqlx::query_scalar::<Sqlite, i64>("SELECT COUNT(*) FROM guests WHERE name = ?1")
            .bind(name);
        Ok(self.any_rows(query).await?)
    }

    async fn tables_empty(&self) -> StoreResult<bool> {
        let query = sqlx::query_scalar::<Sqlite, i64>("SELECT COUNT(*) FROM tables");
        Ok(!self.any_rows(query).await?)
    }

    async fn guests_empty(&self, status: GuestStatus) -> StoreResult<bool> {
        let query = sqlx::query_scalar::<Sqlite, i64>("SELECT COUNT(*) FROM guests WHERE status = ?1")
            .bind(status);
        Ok(!self.any_rows(query).await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
