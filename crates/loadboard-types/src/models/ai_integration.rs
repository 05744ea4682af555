//! AI integration records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{payload_object, required_string};
use crate::error::ValidationError;

/// An AI integration entry. Has no identifier; duplicates are allowed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AiIntegration {
    pub name: String,
    pub status: String,
    /// Percentage display string, e.g. "85%"
    pub usage: String,
    pub performance: String,
}

impl AiIntegration {
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let object = payload_object(value)?;
        Ok(Self {
            name: required_string(object, "name")?,
            status: required_string(object, "status")?,
            usage: required_string(object, "usage")?,
            performance: required_string(object, "performance")?,
        })
    }
}
