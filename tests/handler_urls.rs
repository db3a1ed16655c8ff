mod common;

use axum::http::StatusCode;
use std::sync::Arc;

#[tokio::test]
async fn test_list_urls_pagination() {
    let (state, store) = common::create_memory_state(common::roomy_limiter());
    for i in 1..=7 {
        common::create_test_url(&store, &format!("https://{i}.example")).await;
    }
    common::create_test_visit(&store, 6, "10.0.0.1").await;
    common::create_test_visit(&store, 6, "10.0.0.2").await;
    let server = common::create_test_server(state);

    let response = server.get("/api/urls?page_size=5&page_index=2").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);

    assert_eq!(items[0]["original"], "https://6.example");
    assert_eq!(items[0]["shorten"], format!("{}/6", common::BASE_URL));
    assert_eq!(items[0]["total_visitor"], 2);
    assert!(items[0]["created_at"].is_string());

    assert_eq!(items[1]["original"], "https://7.example");
    assert_eq!(items[1]["total_visitor"], 0);
}

#[tokio::test]
async fn test_list_urls_past_the_end_is_empty() {
    let (state, store) = common::create_memory_state(common::roomy_limiter());
    common::create_test_url(&store, "https://example.com").await;
    let server = common::create_test_server(state);

    let response = server.get("/api/urls?page_size=10&page_index=3").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), serde_json::json!([]));
}

#[tokio::test]
async fn test_list_urls_invalid_pagination() {
    let (state, _store) = common::create_memory_state(common::roomy_limiter());
    let server = common::create_test_server(state);

    for query in [
        "page_size=0&page_index=1",
        "page_size=101&page_index=1",
        "page_size=10&page_index=0",
        "page_size=10&page_index=-2",
        "page_size=10",
        "page_index=1",
        "page_size=ten&page_index=1",
    ] {
        let response = server.get(&format!("/api/urls?{query}")).await;

        assert_eq!(
            response.status_code(),
            StatusCode::BAD_REQUEST,
            "query {query} should be rejected"
        );
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "validation_error");
    }
}

#[tokio::test]
async fn test_list_visitors() {
    let (state, store) = common::create_memory_state(common::roomy_limiter());
    let id = common::create_test_url(&store, "https://example.com").await;
    for ip in ["10.0.0.1", "10.0.0.2", "10.0.0.3"] {
        common::create_test_visit(&store, id, ip).await;
    }
    let server = common::create_test_server(state);

    let response = server
        .get("/api/urls/1/visitors?page_size=2&page_index=1")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["ip"], "10.0.0.1");
    assert_eq!(items[0]["original"], "https://example.com");
    assert_eq!(items[0]["shorten"], format!("{}/1", common::BASE_URL));
    assert!(items[0]["time_visited"].is_string());
    assert_eq!(items[1]["ip"], "10.0.0.2");
}

#[tokio::test]
async fn test_list_visitors_after_redirects() {
    let (state, store) = common::create_memory_state(common::roomy_limiter());
    common::create_test_url(&store, "https://example.com").await;
    let server = common::create_test_server(state);

    server.get("/1").await;

    let json = server
        .get("/api/urls/1/visitors?page_size=10&page_index=1")
        .await
        .json::<serde_json::Value>();

    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["ip"], common::PEER_IP);
}

#[tokio::test]
async fn test_list_visitors_unknown_code() {
    let (state, _store) = common::create_memory_state(common::roomy_limiter());
    let server = common::create_test_server(state);

    let response = server
        .get("/api/urls/abc/visitors?page_size=10&page_index=1")
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_list_visitors_invalid_pagination_before_lookup() {
    let (state, _store) = common::create_memory_state(common::roomy_limiter());
    let server = common::create_test_server(state);

    // Unknown code, but the page is checked first.
    let response = server
        .get("/api/urls/abc/visitors?page_size=0&page_index=1")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_count_urls() {
    let (state, store) = common::create_memory_state(common::roomy_limiter());
    let server = common::create_test_server(state);

    let json = server
        .get("/api/urls/count")
        .await
        .json::<serde_json::Value>();
    assert_eq!(json["total_urls"], 0);

    common::create_test_url(&store, "https://a.example").await;
    common::create_test_url(&store, "https://b.example").await;

    let response = server.get("/api/urls/count").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        serde_json::json!({ "total_urls": 2 })
    );
}

#[tokio::test]
async fn test_count_urls_storage_failure() {
    let state = common::create_state(
        Arc::new(common::FailingUrlStore),
        Arc::new(common::FailingVisitStore),
        common::roomy_limiter(),
        false,
    );
    let server = common::create_test_server(state);

    let response = server.get("/api/urls/count").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
