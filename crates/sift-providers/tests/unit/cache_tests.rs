//! Moka result cache tests

use std::time::Duration;

use sift_domain::value_objects::{
    SearchEnvelope, SearchKind, SearchRequest, SearchResponse,
};
use sift_providers::ResultCache;
use sift_providers::cache::MokaResultCache;

fn request(query: &str, page: u32) -> SearchRequest {
    SearchRequest::new(query, page, 20, "en", None, SearchKind::Web)
}

fn envelope(total: u64) -> SearchEnvelope {
    SearchResponse {
        total,
        ..SearchResponse::empty(0, 20)
    }
    .into()
}

#[tokio::test]
async fn test_hit_and_miss() {
    let cache = MokaResultCache::with_config(10, Duration::from_secs(60));
    cache.insert(request("rust", 0), envelope(7)).await;

    assert_eq!(cache.get(&request("rust", 0)).await, Some(envelope(7)));
    assert!(cache.get(&request("rust", 1)).await.is_none());
    assert!(cache.get(&request("rusty", 0)).await.is_none());
}

#[tokio::test]
async fn test_key_includes_language_cursor_and_kind() {
    let cache = MokaResultCache::with_config(10, Duration::from_secs(60));
    cache.insert(request("rust", 0), envelope(1)).await;

    let german = SearchRequest::new("rust", 0, 20, "de", None, SearchKind::Web);
    let images = SearchRequest::new("rust", 0, 20, "en", None, SearchKind::Image);
    let cursor = SearchRequest::new("rust", 0, 20, "en", Some("WzFd".into()), SearchKind::Web);

    assert!(cache.get(&german).await.is_none());
    assert!(cache.get(&images).await.is_none());
    assert!(cache.get(&cursor).await.is_none());
}

#[tokio::test]
async fn test_failures_are_not_cached() {
    let cache = MokaResultCache::default();
    cache
        .insert(request("rust", 0), SearchResponse::failure("Search failed").into())
        .await;
    cache.sync().await;

    assert!(cache.get(&request("rust", 0)).await.is_none());
    assert_eq!(cache.entry_count(), 0);
    assert_eq!(cache.capacity(), 1_000);
}
