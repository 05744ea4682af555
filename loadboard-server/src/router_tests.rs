//! Router-level tests: status codes, JSON bodies and CORS headers.

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use loadboard_core::ResourceStore;
use loadboard_types::{AccessPolicy, DEVELOPMENT_ORIGIN, PRODUCTION_ORIGIN};

use crate::router::build_router;
use crate::state::AppState;
use crate::test_helpers::{ai_integration_payload, upgrade_request_payload};

fn test_server(store: ResourceStore) -> TestServer {
    let router =
        build_router(AppState::new(store), &AccessPolicy::default()).expect("default policy is valid");
    TestServer::new(router).expect("failed to start test server")
}

#[tokio::test]
async fn test_root_and_health() {
    let server = test_server(ResourceStore::new());

    let root = server.get("/").await;
    root.assert_status_ok();
    assert_eq!(root.json::<Value>()["status"], "ok");

    let health = server.get("/health").await;
    health.assert_status_ok();
    let body = health.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_empty_store_returns_empty_arrays() {
    let server = test_server(ResourceStore::new());

    let upgrades = server.get("/api/upgrade-requests").await;
    upgrades.assert_status_ok();
    assert_eq!(upgrades.json::<Value>(), json!([]));

    let integrations = server.get("/api/ai-integrations").await;
    integrations.assert_status_ok();
    assert_eq!(integrations.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_post_upgrade_requests_numbers_from_one() {
    let server = test_server(ResourceStore::new());

    for n in 1..=3 {
        let response =
            server.post("/api/upgrade-requests").json(&upgrade_request_payload("X")).await;
        response.assert_status(StatusCode::CREATED);
        let body = response.json::<Value>();
        assert_eq!(body["id"], n.to_string());
        assert_eq!(body["estimatedCost"], "$1/month");
    }

    let listed = server.get("/api/upgrade-requests").await.json::<Vec<Value>>();
    let ids: Vec<_> = listed.iter().map(|r| r["id"].as_str().unwrap_or_default()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
}

#[tokio::test]
async fn test_seeded_store_continues_after_seed() {
    let server = test_server(ResourceStore::seeded());

    let listed = server.get("/api/upgrade-requests").await.json::<Vec<Value>>();
    assert_eq!(listed.len(), 3);

    let created = server.post("/api/upgrade-requests").json(&upgrade_request_payload("Y")).await;
    assert_eq!(created.json::<Value>()["id"], "4");
}

#[tokio::test]
async fn test_post_ai_integration_echoes_without_id() {
    let server = test_server(ResourceStore::new());
    let payload = ai_integration_payload("Claude AI Assistant");

    let response = server.post("/api/ai-integrations").json(&payload).await;
    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body, payload);
    assert!(body.get("id").is_none());
}

#[tokio::test]
async fn test_missing_field_returns_422() {
    let server = test_server(ResourceStore::new());

    let response = server
        .post("/api/upgrade-requests")
        .json(&json!({"type": "AI Integration", "status": "Pending"}))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["field"], "title");
}

#[tokio::test]
async fn test_non_json_body_returns_422() {
    let server = test_server(ResourceStore::new());

    let response = server.post("/api/ai-integrations").text("not json").await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["field"], "body");
}

#[tokio::test]
async fn test_unknown_api_route_returns_404() {
    let server = test_server(ResourceStore::new());

    let response = server.get("/api/unknown").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"], "Not found");
}

#[tokio::test]
async fn test_allowed_origin_is_echoed_with_credentials() {
    let server = test_server(ResourceStore::new());

    for origin in [PRODUCTION_ORIGIN, DEVELOPMENT_ORIGIN] {
        let response = server
            .get("/api/upgrade-requests")
            .add_header(header::ORIGIN, HeaderValue::from_static(origin))
            .await;
        response.assert_status_ok();
        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).and_then(|v| v.to_str().ok()),
            Some(origin)
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).and_then(|v| v.to_str().ok()),
            Some("true")
        );
    }
}

#[tokio::test]
async fn test_unlisted_origin_gets_no_allow_origin() {
    let server = test_server(ResourceStore::new());

    let response = server
        .get("/api/upgrade-requests")
        .add_header(header::ORIGIN, HeaderValue::from_static("https://evil.example"))
        .await;
    response.assert_status_ok();
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn test_preflight_is_answered_by_cors_layer() {
    let server = test_server(ResourceStore::new());

    let response = server
        .method(Method::OPTIONS, "/api/upgrade-requests")
        .add_header(header::ORIGIN, HeaderValue::from_static(DEVELOPMENT_ORIGIN))
        .add_header(header::ACCESS_CONTROL_REQUEST_METHOD, HeaderValue::from_static("POST"))
        .add_header(header::ACCESS_CONTROL_REQUEST_HEADERS, HeaderValue::from_static("x-custom"))
        .await;

    // The route only has GET/POST; a 200 means the handlers were never reached.
    response.assert_status_ok();
    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).and_then(|v| v.to_str().ok()),
        Some(DEVELOPMENT_ORIGIN)
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).and_then(|v| v.to_str().ok()),
        Some("POST")
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).and_then(|v| v.to_str().ok()),
        Some("x-custom")
    );
}

#[test]
fn test_wildcard_credentials_policy_cannot_build_router() {
    let policy = AccessPolicy::with_origins(["*"]);
    assert!(build_router(AppState::new(ResourceStore::new()), &policy).is_err());
}
