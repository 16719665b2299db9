//! Unit tests for response envelopes

use sift_domain::{
    Entity, EntityType, ImageSearchResponse, NormalizedResult, SearchEnvelope, SearchResponse,
};

#[test]
fn test_empty_response_shape() {
    let json = serde_json::to_value(SearchResponse::empty(0, 20)).expect("serialize");
    assert_eq!(json["hits"], serde_json::json!([]));
    assert_eq!(json["suggestions"], serde_json::json!([]));
    assert_eq!(json["total"], 0);
    assert_eq!(json["page"], 0);
    assert_eq!(json["size"], 20);
    assert!(json.get("error").is_none());
    assert!(json.get("cursor").is_none());
}

#[test]
fn test_failure_response_shape() {
    let response = SearchResponse::failure("Search failed");
    assert!(response.is_failure());

    let json = serde_json::to_value(&response).expect("serialize");
    assert_eq!(json["hits"], serde_json::json!([]));
    assert_eq!(json["total"], 0);
    assert_eq!(json["error"], "Search failed");
}

#[test]
fn test_result_serializes_camel_case() {
    let result = NormalizedResult {
        id: "1".to_string(),
        url: "https://x.test/a".to_string(),
        relevance_score: 2.0,
        composite_score: 7.5,
        entities: vec![Entity::new("Berlin", EntityType::Place)],
        ..Default::default()
    };

    let json = serde_json::to_value(&result).expect("serialize");
    assert_eq!(json["relevanceScore"], 2.0);
    assert_eq!(json["compositeScore"], 7.5);
    assert_eq!(json["entities"][0]["type"], "place");
    assert!(json.get("sortValues").is_none());
    assert!(json.get("highlightedTitle").is_none());
}

#[test]
fn test_envelope_is_untagged() {
    let envelope = SearchEnvelope::from(ImageSearchResponse {
        hits: Vec::new(),
        total: 0,
        page: 1,
        size: 10,
    });
    let json = serde_json::to_value(&envelope).expect("serialize");
    assert_eq!(json["page"], 1);
    assert!(json.get("Image").is_none());
    assert!(!envelope.is_failure());
}
