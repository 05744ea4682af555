use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use loadboard_types::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Unparsable JSON or a wrong content type is reported against field `body`.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(ValidationError::new("body", rejection.body_text()))
    }
}

#[derive(Debug, Serialize)]
struct ErrBody<'a> {
    error: &'static str,
    field: &'a str,
    message: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(err) => {
                tracing::warn!(field = %err.field, "rejected payload: {}", err.message);
                let body =
                    ErrBody { error: "validation_error", field: &err.field, message: &err.message };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
        }
    }
}
