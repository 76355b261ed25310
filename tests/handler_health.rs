mod common;

use axum::http::StatusCode;
use serde_json::Value;
use tinylink::api::dto::health::HealthzResponse;

#[tokio::test]
async fn test_healthz_endpoint() {
    let (state, _rx, _repository) = common::create_test_state(100);
    let server = common::test_server(state);

    let response = server.get("/healthz").await;

    response.assert_status_ok();

    let health = response.json::<HealthzResponse>();
    assert!(health.ok);
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(health.env, "test");
}

#[tokio::test]
async fn test_healthz_structure() {
    let (state, _rx, _repository) = common::create_test_state(100);
    let server = common::test_server(state);

    let json = server.get("/healthz").await.json::<Value>();

    assert!(json.get("ok").is_some());
    assert!(json.get("version").is_some());
    assert!(json["now"].is_string());
    assert!(json["uptimeSec"].is_u64());
    assert!(json.get("env").is_some());
}

#[tokio::test]
async fn test_healthz_does_not_need_store() {
    let (state, _rx) = common::unavailable_state();
    let server = common::test_server(state);

    server.get("/healthz").await.assert_status_ok();
}

#[tokio::test]
async fn test_dbcheck_reports_link_count() {
    let (state, _rx, repository) = common::create_test_state(100);
    common::create_test_link(&repository, "count1", "https://example.com").await;
    common::create_test_link(&repository, "count2", "https://example.com").await;
    let server = common::test_server(state);

    let response = server.get("/api/dbcheck").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["ok"], true);
    assert_eq!(json["linkCount"], 2);
    assert!(json["now"].is_string());
}

#[tokio::test]
async fn test_dbcheck_store_unavailable() {
    let (state, _rx) = common::unavailable_state();
    let server = common::test_server(state);

    let response = server.get("/api/dbcheck").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<Value>();
    assert_eq!(json["ok"], false);
    assert!(json["error"].is_string());
}
