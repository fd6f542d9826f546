//! # Validation Module
//!
//! Field-level bounds on inbound request values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP handler (apps/api)                                      │
//! │  └── JSON shape (deserialization)                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Ranges, required fields, name normalization                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: SeatingService rules                                         │
//! │  └── Table exists, capacity, duplicates, status                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 4: Database (SQLite)                                            │
//! │  └── UNIQUE(name), UNIQUE(table_id), CHECK(capacity > 0)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_FIELD_VALUE, MAX_NAME_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// `MAX_FIELD_VALUE` with thousands separators, as shown in messages.
const MAX_FIELD_VALUE_DISPLAY: &str = "4,294,967,295";

// =============================================================================
// String Validators
// =============================================================================

/// Lowercases a guest name and checks its length.
///
/// ## Rules
/// - Must not be empty
/// - At most 100 characters
///
/// ## Example
/// ```rust
/// use seating_core::validation::normalize_guest_name;
///
/// assert_eq!(normalize_guest_name("JOHN").unwrap(), "john");
/// assert!(normalize_guest_name("").is_err());
/// ```
pub fn normalize_guest_name(name: &str) -> ValidationResult<String> {
    let name = name.to_lowercase();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(name)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a requested table capacity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must be below 4,294,967,295
///
/// ## Example
/// ```rust
/// use seating_core::validation::validate_capacity;
///
/// assert!(validate_capacity(10).is_ok());
/// assert!(validate_capacity(0).is_err());
/// ```
pub fn validate_capacity(capacity: i64) -> ValidationResult<()> {
    validate_bounded("capacity", capacity, false)
}

/// Validates the table id of an allotment request.
///
/// ## Rules
/// - Required: `0` is what a missing field decodes to
/// - Must be positive and below 4,294,967,295
pub fn validate_table_id(table_id: i64) -> ValidationResult<()> {
    if table_id == 0 {
        return Err(ValidationError::Required {
            field: "table".to_string(),
        });
    }

    validate_bounded("table", table_id, false)
}

/// Validates the number of accompanying guests.
///
/// ## Rules
/// - Zero is allowed
/// - Must be below 4,294,967,295
pub fn validate_accompanying_guests(count: i64) -> ValidationResult<()> {
    validate_bounded("accompanying_guests", count, true)
}

fn validate_bounded(field: &str, value: i64, zero_allowed: bool) -> ValidationResult<()> {
    if zero_allowed && value < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    if !zero_allowed && value <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    if value >= MAX_FIELD_VALUE {
        return Err(ValidationError::TooLarge {
            field: field.to_string(),
            max: MAX_FIELD_VALUE_DISPLAY.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
