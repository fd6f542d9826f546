//! Guest list handlers: allotment and the full list.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use super::NameResponse;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::AppState;
use seating_core::GuestListEntry;

/// Body of `POST /guest_list/:name`.
///
/// Missing fields read as 0; a 0 table id is reported as a required field.
#[derive(Debug, Clone, Deserialize)]
pub struct AllotGuestRequest {
    #[serde(default)]
    pub table: i64,
    #[serde(default)]
    pub accompanying_guests: i64,
}

/// `POST /guest_list/:name`
pub async fn allot_guest(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ApiJson(body): ApiJson<AllotGuestRequest>,
) -> Result<Json<NameResponse>, ApiError> {
    let name = state
        .service
        .allot_guest(&name, body.table, body.accompanying_guests)
        .await?;
    Ok(Json(NameResponse { name }))
}

/// `GET /guest_list`
pub async fn guest_list(State(state): State<AppState>) -> Result<Json<Vec<GuestListEntry>>, ApiError> {
    Ok(Json(state.service.guest_list().await?))
}
