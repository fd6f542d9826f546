//! # HTTP Handlers
//!
//! One module per resource. Handlers only translate HTTP to
//! `SeatingService` calls and back; every rule lives in seating-core.
//!
//! ## Routes
//! ```text
//! POST   /tables               tables::create_table
//! GET    /seats_empty          tables::seats_empty
//! POST   /guest_list/:name     guest_list::allot_guest
//! GET    /guest_list           guest_list::guest_list
//! GET    /guests               guests::arrived_guests
//! PUT    /guests/:name         guests::check_in_guest
//! DELETE /guests/:name         guests::check_out_guest
//! GET    /ping                 health::ping
//! ```

pub mod guest_list;
pub mod guests;
pub mod health;
pub mod tables;

use serde::Serialize;

/// `{name}` body returned after allotment and check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameResponse {
    pub name: String,
}
