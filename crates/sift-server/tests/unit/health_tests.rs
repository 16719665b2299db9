//! `GET /health` endpoint tests

use rocket::http::Status;

use crate::support::{StubEngine, client, response};

#[rocket::async_test]
async fn test_health_ok() {
    let client = client(StubEngine::responding(response(vec![]))).await;

    let response = client.get("/health").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let body = response.into_string().await.expect("response body");
    let json: serde_json::Value = serde_json::from_str(&body).expect("json body");
    assert_eq!(json["status"], "ok");
    assert_eq!(json["engine"], "stub");
    assert!(json.get("error").is_none());
}

#[rocket::async_test]
async fn test_health_unavailable() {
    let client = client(StubEngine::failing()).await;

    let response = client.get("/health").dispatch().await;
    assert_eq!(response.status(), Status::ServiceUnavailable);

    let body = response.into_string().await.expect("response body");
    let json: serde_json::Value = serde_json::from_str(&body).expect("json body");
    assert_eq!(json["status"], "unavailable");
    assert_eq!(json["engine"], "stub");
    assert!(json["error"].as_str().is_some_and(|e| e.contains("cluster unreachable")));
}
