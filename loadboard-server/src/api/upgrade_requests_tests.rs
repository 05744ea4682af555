use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::json;

use super::upgrade_requests::{create_upgrade_request, list_upgrade_requests};
use crate::error::ApiError;
use crate::test_helpers::{test_app_state, upgrade_request_payload};

#[tokio::test]
async fn test_list_upgrade_requests_empty() {
    let state = test_app_state();
    let Json(records) = list_upgrade_requests(State(state)).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_create_assigns_sequential_ids() {
    let state = test_app_state();

    let (status, Json(first)) =
        create_upgrade_request(State(state.clone()), Ok(Json(upgrade_request_payload("X"))))
            .await
            .expect("valid payload");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first.id, "1");

    let (_, Json(second)) =
        create_upgrade_request(State(state.clone()), Ok(Json(upgrade_request_payload("X"))))
            .await
            .expect("valid payload");
    assert_eq!(second.id, "2");

    let Json(records) = list_upgrade_requests(State(state)).await;
    assert_eq!(records, vec![first, second]);
}

#[tokio::test]
async fn test_create_overwrites_client_id() {
    let state = test_app_state();
    let mut payload = upgrade_request_payload("X");
    payload["id"] = json!("42");

    let (_, Json(record)) = create_upgrade_request(State(state), Ok(Json(payload)))
        .await
        .expect("valid payload");
    assert_eq!(record.id, "1");
}

#[tokio::test]
async fn test_create_missing_field_is_rejected() {
    let state = test_app_state();
    let mut payload = upgrade_request_payload("X");
    if let Some(object) = payload.as_object_mut() {
        object.remove("priority");
    }

    let result = create_upgrade_request(State(state.clone()), Ok(Json(payload))).await;
    match result {
        Err(ApiError::Validation(err)) => assert_eq!(err.field, "priority"),
        Ok(_) => panic!("payload without priority must be rejected"),
    }

    let Json(records) = list_upgrade_requests(State(state)).await;
    assert!(records.is_empty(), "rejected payload must not be stored");
}
