//! API Routes
//!
//! Resource endpoints mounted under `/api`.

mod ai_integrations;
mod upgrade_requests;

#[cfg(test)]
mod upgrade_requests_tests;

use axum::{http::StatusCode, response::IntoResponse, response::Json, routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        // Upgrade requests
        .route(
            "/upgrade-requests",
            get(upgrade_requests::list_upgrade_requests)
                .post(upgrade_requests::create_upgrade_request),
        )
        // AI integrations
        .route(
            "/ai-integrations",
            get(ai_integrations::list_ai_integrations).post(ai_integrations::create_ai_integration),
        )
        // API fallback: return 404 for unknown API endpoints
        .fallback(api_not_found)
}

async fn api_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(serde_json::json!({"error": "Not found"})))
}
