//! Upgrade request records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{payload_object, required_string};
use crate::error::ValidationError;

/// A stored upgrade request. `id` is always assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeRequest {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    /// Free-form, e.g. "Pending", "In Progress"
    pub status: String,
    /// Free-form, e.g. "High", "Critical"
    pub priority: String,
    pub description: String,
    /// Display string such as "$2,500/month"
    pub estimated_cost: String,
}

/// Body of `POST /api/upgrade-requests`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewUpgradeRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub status: String,
    pub priority: String,
    pub description: String,
    pub estimated_cost: String,
}

impl NewUpgradeRequest {
    /// Validate a raw JSON payload field by field.
    ///
    /// Any `id` the caller sent is ignored; fields are checked in declaration
    /// order and the first bad one is reported.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let object = payload_object(value)?;
        Ok(Self {
            kind: required_string(object, "type")?,
            title: required_string(object, "title")?,
            status: required_string(object, "status")?,
            priority: required_string(object, "priority")?,
            description: required_string(object, "description")?,
            estimated_cost: required_string(object, "estimatedCost")?,
        })
    }

    pub fn into_record(self, id: String) -> UpgradeRequest {
        UpgradeRequest {
            id,
            kind: self.kind,
            title: self.title,
            status: self.status,
            priority: self.priority,
            description: self.description,
            estimated_cost: self.estimated_cost,
        }
    }
}
