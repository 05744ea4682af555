//! Payload validation errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A request payload is missing a required field or carries the wrong type.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[error("Validation error for {field}: {message}")]
pub struct ValidationError {
    /// Name of the offending field, or `body` when the payload itself is unusable
    pub field: String,
    /// Description of the validation failure
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }

    /// Required field absent from the payload.
    pub fn missing(field: &str) -> Self {
        Self::new(field, "field required")
    }

    /// Field present, but not a JSON string.
    pub fn not_a_string(field: &str, found: &serde_json::Value) -> Self {
        Self::new(field, format!("expected a string, found {}", json_type_name(found)))
    }

    /// Payload is not a JSON object at all.
    pub fn not_an_object(found: &serde_json::Value) -> Self {
        Self::new("body", format!("expected a JSON object, found {}", json_type_name(found)))
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
