//! # Error Types
//!
//! Domain-specific error types for seating-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  seating-core errors (this file)                                       │
//! │  ├── ValidationError  - Input bound violations                         │
//! │  ├── StoreError       - Failures reported by a PartyStore              │
//! │  └── CoreError        - Business rule violations + the two above       │
//! │                                                                         │
//! │  seating-db errors (separate crate)                                    │
//! │  └── DbError          - sqlx failures, converted into StoreError       │
//! │                                                                         │
//! │  API errors (apps/api)                                                 │
//! │  └── ApiError         - Status code + JSON body                        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → HTTP 400               │
//! │        DbError → StoreError → CoreError → ApiError → HTTP 500          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `Display` text of the business-rule variants is the exact message
//! clients receive.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Seating rule violations and wrapped lower-level failures.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The target table of an allotment does not exist.
    #[error("Invalid table-id")]
    InvalidTable,

    /// A guest with the same (lowercased) name is already on the list.
    #[error("Guest {0} already added")]
    GuestAlreadyAdded(String),

    /// The guest and their party do not fit the table being allotted.
    #[error("Cannot allot table. Table capacity is {capacity}")]
    AllotCapacityExceeded { capacity: i64 },

    /// Another guest already occupies the table.
    #[error("Table already allotted to {0}")]
    TableAlreadyAllotted(String),

    /// The named guest is not on the guest list.
    #[error("Guest {0} is not present in Guestlist")]
    GuestNotFound(String),

    /// The updated party size does not fit the guest's table.
    #[error("Cannot update number of accompanying guests. Table capacity is {capacity}")]
    CheckInCapacityExceeded { capacity: i64 },

    /// Check-out requested for a guest who is not currently checked in.
    ///
    /// ## When This Occurs
    /// - Guest is still `allotted` (never arrived)
    /// - Guest is already `checked-out`
    ///
    /// Both cases share one message; `status` keeps the distinction for logs.
    #[error("Request failed, guest not checked-in")]
    NotCheckedIn { status: crate::GuestStatus },

    /// Validation error (wraps ValidationError).
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The store failed to serve a read or a write.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl CoreError {
    /// True when the error was caused by the request, not by the store.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, CoreError::Store(_))
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any rule touches the store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is a required field")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be a maximum of {max} characters in length")]
    TooLong { field: String, max: usize },

    /// Value must be strictly positive.
    #[error("{field} must be greater than 0")]
    MustBePositive { field: String },

    /// Value must be zero or more.
    #[error("{field} must be 0 or greater")]
    MustBeNonNegative { field: String },

    /// Value reached the exclusive upper bound.
    #[error("{field} must be less than {max}")]
    TooLarge { field: String, max: String },
}

// =============================================================================
// Store Error
// =============================================================================

/// Failure reported by a [`crate::PartyStore`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store cannot be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A uniqueness or reference constraint rejected a write.
    #[error("constraint violated: {0}")]
    Conflict(String),

    /// Any other read or write failure.
    #[error("query failed: {0}")]
    Query(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
