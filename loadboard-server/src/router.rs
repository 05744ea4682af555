use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use tower_http::trace::TraceLayer;

use loadboard_core::cors_layer;
use loadboard_types::{AccessPolicy, PolicyError};

use crate::api;
use crate::state::AppState;

/// Assemble the full application: `/api` resources, status routes, tracing
/// and the CORS layer built from `policy`.
pub fn build_router(state: AppState, policy: &AccessPolicy) -> Result<Router, PolicyError> {
    let cors = cors_layer(policy)?;

    Ok(Router::new()
        .nest("/api", api::router())
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/version", get(version_info))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

async fn root() -> impl IntoResponse {
    axum::Json(serde_json::json!({"message": "LoadBoard AI API is running", "status": "ok"}))
}

async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}

async fn version_info() -> impl IntoResponse {
    (StatusCode::OK, axum::Json(serde_json::json!({"version": env!("CARGO_PKG_VERSION")})))
}
