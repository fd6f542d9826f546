//! # Seating API
//!
//! REST server for event seating: tables, the guest list and arrivals.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Seating API Server                             │
//! │                                                                         │
//! │  Client ───► axum Router ───► handlers ───► SeatingService ───► SQLite  │
//! │              (TraceLayer)     (JSON ⇄ DTO)   (rules, gate)    (sqlx)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `SEATING_HOST` - Interface to bind (default: 0.0.0.0)
//! - `SEATING_PORT` - HTTP port (default: 3000)
//! - `SEATING_DB_PATH` - SQLite file (default: ./seating.db)
//! - `SEATING_DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `RUST_LOG` - Log filter (default: info,seating=debug,sqlx=warn)

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use seating_core::{PartyStore, SeatingService};

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SeatingService<dyn PartyStore>>,
}

impl AppState {
    /// State over any store, using wall-clock time.
    pub fn new(store: Arc<dyn PartyStore>) -> Self {
        AppState {
            service: Arc::new(SeatingService::new(store)),
        }
    }
}

/// Builds the HTTP router.
pub fn router(state: AppState) -> Router {
    use handlers::{guest_list, guests, health, tables};

    Router::new()
        .route("/tables", post(tables::create_table))
        .route("/seats_empty", get(tables::seats_empty))
        .route("/guest_list", get(guest_list::guest_list))
        .route("/guest_list/:name", post(guest_list::allot_guest))
        .route("/guests", get(guests::arrived_guests))
        .route(
            "/guests/:name",
            put(guests::check_in_guest).delete(guests::check_out_guest),
        )
        .route("/ping", get(health::ping))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// Router Tests
// =============================================================================
