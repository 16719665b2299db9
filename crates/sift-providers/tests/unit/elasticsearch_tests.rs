//! Elasticsearch provider tests against a mock HTTP server

use std::time::Duration;

use mockito::{Matcher, Server};
use reqwest::Client;
use serde_json::json;
use sift_domain::error::Error;
use sift_domain::value_objects::{SearchKind, SearchRequest};
use sift_providers::SearchEngineProvider;
use sift_providers::search_engine::ElasticsearchProvider;
use sift_providers::search_engine::elasticsearch::ElasticsearchAuth;

fn provider(url: &str, timeout: Duration) -> ElasticsearchProvider {
    let client = Client::builder().timeout(timeout).build().unwrap();
    ElasticsearchProvider::new(url, "pages", timeout, client)
}

fn request() -> SearchRequest {
    SearchRequest::new("rust", 0, 10, "en", None, SearchKind::Web)
}

#[tokio::test]
async fn test_search_posts_to_index() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/pages/_search")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({ "size": 10, "from": 0 })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "hits": {
                    "total": { "value": 1 },
                    "hits": [{ "_id": "1", "_score": 2.0, "_source": { "url": "https://x.test/a" } }]
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let response = provider(&server.url(), Duration::from_secs(2))
        .search(&request())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.total, 1);
    assert_eq!(response.hits[0].document.url.as_deref(), Some("https://x.test/a"));
}

#[tokio::test]
async fn test_server_error_is_upstream() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/pages/_search")
        .with_status(503)
        .with_body("cluster unavailable")
        .create_async()
        .await;

    let err = provider(&server.url(), Duration::from_secs(2))
        .search(&request())
        .await
        .unwrap_err();

    assert!(err.is_upstream());
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_api_key_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/pages/_search")
        .match_header("authorization", "ApiKey secret")
        .with_status(200)
        .with_body(json!({ "hits": { "total": 0, "hits": [] } }).to_string())
        .create_async()
        .await;

    provider(&server.url(), Duration::from_secs(2))
        .with_auth(ElasticsearchAuth::ApiKey("secret".into()))
        .search(&request())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_engine_is_network_error() {
    let err = provider("http://127.0.0.1:1", Duration::from_millis(500))
        .search(&request())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Network { .. } | Error::Timeout { .. }));
}

#[tokio::test]
async fn test_missing_index_names_error_type() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/pages/_search")
        .with_status(404)
        .with_body(
            json!({
                "error": {
                    "root_cause": [{ "type": "index_not_found_exception", "reason": "no such index [pages]" }],
                    "type": "index_not_found_exception",
                    "reason": "no such index [pages]"
                },
                "status": 404
            })
            .to_string(),
        )
        .create_async()
        .await;

    let err = provider(&server.url(), Duration::from_secs(2))
        .search(&request())
        .await
        .unwrap_err();

    assert!(err.is_upstream());
    let message = err.to_string();
    assert!(message.contains("index not found"));
    assert!(message.contains("index_not_found_exception: no such index [pages]"));
}

#[tokio::test]
async fn test_bad_request_reports_engine_reason() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/pages/_search")
        .with_status(400)
        .with_body(
            json!({
                "error": { "type": "search_phase_execution_exception", "reason": "all shards failed" },
                "status": 400
            })
            .to_string(),
        )
        .create_async()
        .await;

    let err = provider(&server.url(), Duration::from_secs(2))
        .search(&request())
        .await
        .unwrap_err();

    assert!(err.is_upstream());
    assert!(err.to_string().contains("request failed (400)"));
    assert!(err.to_string().contains("search_phase_execution_exception: all shards failed"));
}

#[tokio::test]
async fn test_unknown_path_is_not_index_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/pages/_search")
        .with_status(404)
        .with_body("<html>Not Found</html>")
        .create_async()
        .await;

    let err = provider(&server.url(), Duration::from_secs(2))
        .search(&request())
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("endpoint not found"));
    assert!(!message.contains("index not found"));
}

#[tokio::test]
async fn test_non_json_success_body_is_json_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/pages/_search")
        .with_status(200)
        .with_body("upstream proxy says hello")
        .create_async()
        .await;

    let err = provider(&server.url(), Duration::from_secs(2))
        .search(&request())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Json { .. }));
    assert!(!err.is_upstream());
}

#[tokio::test]
async fn test_health_check() {
    let mut server = Server::new_async().await;
    let _green = server
        .mock("GET", "/_cluster/health")
        .with_status(200)
        .with_body(json!({ "status": "green" }).to_string())
        .create_async()
        .await;

    let engine = provider(&server.url(), Duration::from_secs(2));
    assert!(engine.health_check().await.is_ok());
    assert_eq!(engine.provider_name(), "elasticsearch");
}

#[tokio::test]
async fn test_red_cluster_is_unhealthy() {
    let mut server = Server::new_async().await;
    let _red = server
        .mock("GET", "/_cluster/health")
        .with_status(200)
        .with_body(json!({ "status": "red" }).to_string())
        .create_async()
        .await;

    let err = provider(&server.url(), Duration::from_secs(2))
        .health_check()
        .await
        .unwrap_err();
    assert!(err.is_upstream());
}
