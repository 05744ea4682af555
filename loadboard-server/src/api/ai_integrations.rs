//! AI integration handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;

use loadboard_types::AiIntegration;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_ai_integrations(State(state): State<AppState>) -> Json<Vec<AiIntegration>> {
    Json(state.store().list_ai_integrations())
}

pub async fn create_ai_integration(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<AiIntegration>), ApiError> {
    let Json(payload) = payload?;
    let integration = AiIntegration::from_json(&payload)?;
    let stored = state.store().create_ai_integration(integration);
    tracing::info!("🤖 AI integration registered: {}", stored.name);
    Ok((StatusCode::CREATED, Json(stored)))
}
