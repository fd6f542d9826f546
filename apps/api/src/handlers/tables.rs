//! Table handlers.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::AppState;
use seating_core::Table;

/// Body of `POST /tables`. A missing capacity reads as 0 and is rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTableRequest {
    #[serde(default)]
    pub capacity: i64,
}

/// Body of `GET /seats_empty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatsEmptyResponse {
    pub seats_empty: i64,
}

/// `POST /tables`
pub async fn create_table(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateTableRequest>,
) -> Result<Json<Table>, ApiError> {
    let table = state.service.add_table(body.capacity).await?;
    Ok(Json(table))
}

/// `GET /seats_empty`
pub async fn seats_empty(State(state): State<AppState>) -> Result<Json<SeatsEmptyResponse>, ApiError> {
    let seats_empty = state.service.empty_seats().await?;
    debug!(seats_empty, "Computed empty seats");
    Ok(Json(SeatsEmptyResponse { seats_empty }))
}
