//! Upgrade request handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;

use loadboard_types::{NewUpgradeRequest, UpgradeRequest};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_upgrade_requests(State(state): State<AppState>) -> Json<Vec<UpgradeRequest>> {
    Json(state.store().list_upgrade_requests())
}

/// The server assigns `id`; any id in the payload is discarded.
pub async fn create_upgrade_request(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<UpgradeRequest>), ApiError> {
    let Json(payload) = payload?;
    let request = NewUpgradeRequest::from_json(&payload)?;
    let record = state.store().create_upgrade_request(request);
    tracing::info!(id = %record.id, "📝 Upgrade request created: {}", record.title);
    Ok((StatusCode::CREATED, Json(record)))
}
