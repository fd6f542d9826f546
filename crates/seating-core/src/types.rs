//! # Domain Types
//!
//! Core domain types used throughout the seating service.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────┐   ┌─────────────────┐   │
//! │  │     Table       │   │       Guest         │   │  GuestStatus    │   │
//! │  │  ─────────────  │   │  ─────────────────  │   │  ─────────────  │   │
//! │  │  id (i64)       │◄──│  table_id           │   │  Allotted       │   │
//! │  │  capacity       │   │  name (lowercase)   │   │  CheckedIn      │   │
//! │  └─────────────────┘   │  accompanying       │   │  CheckedOut     │   │
//! │                        │  status             │   └─────────────────┘   │
//! │                        │  time_arrived       │                          │
//! │                        └─────────────────────┘                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A table has no "occupied" flag. Occupancy is derived from the guest whose
//! `table_id` points at it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Table
// =============================================================================

/// A seating unit with a fixed capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Table {
    /// Identifier assigned by the store (always > 0).
    pub id: i64,

    /// Number of seats, including the guest's own.
    pub capacity: i64,
}

// =============================================================================
// Guest Status
// =============================================================================

/// Where a guest is in the arrival lifecycle.
///
/// ```text
/// allotted ──check-in──► checked-in ──check-out──► checked-out
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "kebab-case"))]
#[serde(rename_all = "kebab-case")]
pub enum GuestStatus {
    /// On the guest list with a table, not yet arrived.
    #[default]
    Allotted,
    /// Arrived and present.
    CheckedIn,
    /// Arrived and left.
    CheckedOut,
}

impl GuestStatus {
    /// Wire and storage representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            GuestStatus::Allotted => "allotted",
            GuestStatus::CheckedIn => "checked-in",
            GuestStatus::CheckedOut => "checked-out",
        }
    }

    /// Whether the guest has arrived at some point.
    pub const fn has_arrived(&self) -> bool {
        matches!(self, GuestStatus::CheckedIn | GuestStatus::CheckedOut)
    }
}

impl std::fmt::Display for GuestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Guest
// =============================================================================

/// A named invitee with an allotted table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Guest {
    /// Lowercased name, unique across the guest list.
    pub name: String,

    /// The table this guest was allotted.
    pub table_id: i64,

    /// People arriving with the guest, counted against table capacity.
    pub accompanying_guests: i64,

    /// Lifecycle state.
    pub status: GuestStatus,

    /// Set on check-in.
    pub time_arrived: Option<DateTime<Utc>>,
}

impl Guest {
    /// Seats this guest's party takes at the table.
    #[inline]
    pub fn party_size(&self) -> i64 {
        self.accompanying_guests + 1
    }
}

/// Values needed to put a guest on the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGuest {
    pub name: String,
    pub table_id: i64,
    pub accompanying_guests: i64,
}

// =============================================================================
// Views
// =============================================================================

/// One row of `GET /guest_list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestListEntry {
    pub table: i64,
    pub accompanying_guests: i64,
    pub name: String,
}

impl From<Guest> for GuestListEntry {
    fn from(g: Guest) -> Self {
        GuestListEntry {
            table: g.table_id,
            accompanying_guests: g.accompanying_guests,
            name: g.name,
        }
    }
}

/// One row of `GET /guests`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivedGuest {
    pub time_arrived: Option<DateTime<Utc>>,
    pub accompanying_guests: i64,
    pub name: String,
}

impl From<Guest> for ArrivedGuest {
    fn from(g: Guest) -> Self {
        ArrivedGuest {
            time_arrived: g.time_arrived,
            accompanying_guests: g.accompanying_guests,
            name: g.name,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
