//! Arrival handlers: check-in, check-out and who is present.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::NameResponse;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::AppState;
use seating_core::ArrivedGuest;

/// Body of `PUT /guests/:name`.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckInRequest {
    #[serde(default)]
    pub accompanying_guests: i64,
}

/// `GET /guests`
pub async fn arrived_guests(State(state): State<AppState>) -> Result<Json<Vec<ArrivedGuest>>, ApiError> {
    Ok(Json(state.service.arrived_guests().await?))
}

/// `PUT /guests/:name`
pub async fn check_in_guest(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ApiJson(body): ApiJson<CheckInRequest>,
) -> Result<Json<NameResponse>, ApiError> {
    let name = state
        .service
        .check_in_guest(&name, body.accompanying_guests)
        .await?;
    Ok(Json(NameResponse { name }))
}

/// `DELETE /guests/:name`
pub async fn check_out_guest(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.service.check_out_guest(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}
