//! Test helpers for loadboard-server unit tests.

use serde_json::{json, Value};

use loadboard_core::ResourceStore;

use crate::state::AppState;

/// `AppState` over an empty store.
pub fn test_app_state() -> AppState {
    AppState::new(ResourceStore::new())
}

/// A complete upgrade request body.
pub fn upgrade_request_payload(title: &str) -> Value {
    json!({
        "type": "AI Integration",
        "title": title,
        "status": "Pending",
        "priority": "High",
        "description": "d",
        "estimatedCost": "$1/month"
    })
}

pub fn ai_integration_payload(name: &str) -> Value {
    json!({
        "name": name,
        "status": "Active",
        "usage": "85%",
        "performance": "Excellent"
    })
}
