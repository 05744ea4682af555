//! Domain models.

mod ai_integration;
mod policy;
mod upgrade_request;

pub use ai_integration::AiIntegration;
pub use policy::{AccessPolicy, Allowance, DEVELOPMENT_ORIGIN, PRODUCTION_ORIGIN, WILDCARD_ORIGIN};
pub use upgrade_request::{NewUpgradeRequest, UpgradeRequest};

use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Borrow the payload as a JSON object, or fail on field `body`.
pub(crate) fn payload_object(value: &Value) -> Result<&Map<String, Value>, ValidationError> {
    value.as_object().ok_or_else(|| ValidationError::not_an_object(value))
}

/// Pull a required string field out of a payload object.
pub(crate) fn required_string(
    object: &Map<String, Value>,
    field: &str,
) -> Result<String, ValidationError> {
    match object.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ValidationError::not_a_string(field, other)),
        None => Err(ValidationError::missing(field)),
    }
}
