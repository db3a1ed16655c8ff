mod common;

use axum::http::StatusCode;
use std::sync::Arc;
use std::time::Duration;
use tinylink::application::rate_limiter::TokenBucket;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, _store) = common::create_memory_state(common::roomy_limiter());
    let server = common::create_test_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["checks"]["rate_limiter"]["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_health_store_failure_is_degraded() {
    let state = common::create_state(
        Arc::new(common::FailingUrlStore),
        Arc::new(common::FailingVisitStore),
        common::roomy_limiter(),
        false,
    );
    let server = common::create_test_server(state);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
}

#[tokio::test]
async fn test_health_is_not_rate_limited() {
    let (state, _store) =
        common::create_memory_state(TokenBucket::new(0, Duration::from_secs(3600)));
    let server = common::create_test_server(state);

    server
        .get("/api/urls/count")
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["checks"]["rate_limiter"]["message"], "0/0 tokens available, 1 token per 3600s");
}
