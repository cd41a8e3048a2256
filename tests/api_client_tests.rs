//! HTTP-level tests for the API client against a mock server.

use httpmock::prelude::*;
use serde_json::json;

use linkdeck::client::{ApiClient, ApiError, LinkApi};
use linkdeck::config::ApiConfig;

fn client_for(server: &MockServer) -> ApiClient {
    let config = ApiConfig {
        base_url: format!("{}/api", server.base_url()),
        public_base_url: server.base_url(),
        timeout_secs: 5,
    };
    ApiClient::new(&config).unwrap()
}

fn link_json(id: u64, url: &str, slug: &str) -> serde_json::Value {
    json!({
        "id": id,
        "url": url,
        "slug": slug,
        "shortened_url": null,
        "created_at": "2025-06-01T12:00:00.000000Z",
        "updated_at": "2025-06-01T12:00:00.000000Z",
    })
}

// ---- list_links ----

#[tokio::test]
async fn test_list_links_success() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/links")
                .query_param("page", "2")
                .query_param("per_page", "10");
            then.status(200).json_body(json!({
                "data": [link_json(1, "https://example.com/a", "aaaa")],
                "current_page": 2,
                "last_page": 5,
                "per_page": 10,
                "total": 42,
            }));
        })
        .await;

    let client = client_for(&server);
    let page = client.list_links(2, 10, None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(page.current_page, 2);
    assert_eq!(page.last_page, 5);
    assert_eq!(page.total, 42);
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].slug, "aaaa");
}

#[tokio::test]
async fn test_list_links_sends_search_term() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/links")
                .query_param("search", "rust");
            then.status(200).json_body(json!({
                "data": [],
                "current_page": 1,
                "last_page": 1,
                "per_page": 5,
                "total": 0,
            }));
        })
        .await;

    let client = client_for(&server);
    let page = client.list_links(1, 5, Some("rust")).await.unwrap();

    mock.assert_async().await;
    assert!(page.data.is_empty());
}

#[tokio::test]
async fn test_list_links_omits_blank_search_term() {
    let server = MockServer::start_async().await;
    let with_search = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/links")
                .query_param_exists("search");
            then.status(500);
        })
        .await;
    let without_search = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/links");
            then.status(200).json_body(json!({
                "data": [],
                "current_page": 1,
                "last_page": 1,
                "per_page": 5,
                "total": 0,
            }));
        })
        .await;

    let client = client_for(&server);
    client.list_links(1, 5, Some("   ")).await.unwrap();

    assert_eq!(with_search.hits_async().await, 0);
    without_search.assert_async().await;
}

#[tokio::test]
async fn test_list_links_server_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/links");
            then.status(500).json_body(json!({"message": "database down"}));
        })
        .await;

    let client = client_for(&server);
    let err = client.list_links(1, 5, None).await.unwrap_err();

    assert_eq!(err.server_message(), Some("database down"));
}

// ---- create_link ----

#[tokio::test]
async fn test_create_link_with_slug() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/links")
                .json_body(json!({"url": "https://example.com/page", "slug": "mypage"}));
            then.status(201)
                .json_body(link_json(7, "https://example.com/page", "mypage"));
        })
        .await;

    let client = client_for(&server);
    let link = client
        .create_link("https://example.com/page", Some("mypage"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(link.id, 7);
    assert_eq!(link.slug, "mypage");
}

#[tokio::test]
async fn test_create_link_without_slug_sends_null() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/links")
                .json_body(json!({"url": "https://example.com/page", "slug": null}));
            then.status(201)
                .json_body(link_json(8, "https://example.com/page", "x7k2"));
        })
        .await;

    let client = client_for(&server);
    let link = client
        .create_link("https://example.com/page", None)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(link.slug, "x7k2");
}

#[tokio::test]
async fn test_create_link_conflict_keeps_server_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/links");
            then.status(422)
                .json_body(json!({"error": "The slug has already been taken."}));
        })
        .await;

    let client = client_for(&server);
    let err = client
        .create_link("https://example.com", Some("taken"))
        .await
        .unwrap_err();

    assert_eq!(
        err.server_message(),
        Some("The slug has already been taken.")
    );
}

#[tokio::test]
async fn test_create_link_connection_refused_is_transport() {
    // TEST-NET port nobody listens on.
    let config = ApiConfig {
        base_url: "http://127.0.0.1:9/api".to_string(),
        public_base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
    };
    let client = ApiClient::new(&config).unwrap();

    let err = client
        .create_link("https://example.com", None)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
}

// ---- check_slug ----

#[tokio::test]
async fn test_check_slug_adds_cachebust_param() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/links/check-slug/mypage")
                .query_param_exists("_t");
            then.status(200).json_body(json!({"available": true}));
        })
        .await;

    let client = client_for(&server);
    let status = client.check_slug("mypage").await.unwrap();

    mock.assert_async().await;
    assert!(status.available);
}

#[tokio::test]
async fn test_check_slug_unavailable() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/links/check-slug/taken");
            then.status(200).json_body(json!({"available": false}));
        })
        .await;

    let client = client_for(&server);
    let status = client.check_slug("taken").await.unwrap();

    assert!(!status.available);
}

// ---- resolve_redirect ----

#[tokio::test]
async fn test_resolve_redirect_success() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/r/mypage");
            then.status(200)
                .json_body(json!({"url": "https://example.com/page"}));
        })
        .await;

    let client = client_for(&server);
    let target = client.resolve_redirect("mypage").await.unwrap();

    mock.assert_async().await;
    assert_eq!(target.url, "https://example.com/page");
}

#[tokio::test]
async fn test_resolve_redirect_404_is_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/r/expired");
            then.status(404).json_body(json!({"error": "Not found"}));
        })
        .await;

    let client = client_for(&server);
    let err = client.resolve_redirect("expired").await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_resolve_redirect_other_failure_is_not_notfound() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/r/mypage");
            then.status(503).json_body(json!({"message": "maintenance"}));
        })
        .await;

    let client = client_for(&server);
    let err = client.resolve_redirect("mypage").await.unwrap_err();

    assert!(!err.is_not_found());
    assert_eq!(err.server_message(), Some("maintenance"));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/r/mypage");
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let client = client_for(&server);
    let err = client.resolve_redirect("mypage").await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}
