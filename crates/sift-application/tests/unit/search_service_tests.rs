//! Search service use case tests

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use serde_json::json;
use sift_application::ports::SearchServiceInterface;
use sift_application::use_cases::SearchServiceImpl;
use sift_domain::error::Error;
use sift_domain::value_objects::{
    EngineResponse, Highlight, PageCursor, RawDocument, RawHit, RawImage, ScoringWeights,
    SearchEnvelope, SearchKind, SearchLimits, SearchParams, SearchResponse,
};

use crate::support::{FakeEngine, FakeExtractor, MemoryCache, hit, hits};

fn service(engine: Arc<FakeEngine>, extractor: Arc<FakeExtractor>) -> SearchServiceImpl {
    SearchServiceImpl::new(
        engine,
        extractor,
        SearchLimits::default(),
        ScoringWeights::default(),
    )
}

fn web(envelope: SearchEnvelope) -> SearchResponse {
    match envelope {
        SearchEnvelope::Web(response) => response,
        SearchEnvelope::Image(_) => panic!("expected a web envelope"),
    }
}

#[tokio::test]
async fn test_short_query_never_calls_engine() {
    let engine = FakeEngine::responding(hits(3));
    let service = service(engine.clone(), Arc::new(FakeExtractor::default()));

    for query in ["", "a", "  x  "] {
        let response = web(service.search(SearchParams::with_query(query)).await.unwrap());
        assert!(response.hits.is_empty());
        assert!(response.suggestions.is_empty());
        assert_eq!(response.total, 0);
        assert!(response.error.is_none());
    }
    assert_eq!(engine.calls(), 0);
}

#[tokio::test]
async fn test_duplicate_urls_are_collapsed() {
    let mut second = hit("2", "https://x.test/a");
    second.document.title = Some("Second".into());
    let engine = FakeEngine::responding(EngineResponse {
        total: 2,
        hits: vec![hit("1", "https://x.test/a"), second],
    });
    let service = service(engine, Arc::new(FakeExtractor::default()));

    let response = web(service.search(SearchParams::with_query("rust")).await.unwrap());
    assert_eq!(response.hits.len(), 1);
    assert_eq!(response.hits[0].id, "1");
    assert_eq!(response.hits[0].url, "https://x.test/a");
}

#[tokio::test]
async fn test_ki_projekte_end_to_end() {
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let engine = FakeEngine::responding(EngineResponse {
        total: 1,
        hits: vec![RawHit {
            id: "ki".into(),
            score: Some(1.2),
            document: RawDocument {
                url: Some("https://x.test/ki".into()),
                title: Some("KI-Projekte 2024".into()),
                tags: vec!["KI".into(), "Projekte".into()],
                views: Some(100),
                updated_at: Some(now),
                ..Default::default()
            },
            ..Default::default()
        }],
    });
    let service = service(engine, Arc::new(FakeExtractor::default()));

    let response = web(
        service
            .search_at(SearchParams::with_query("ki projekte"), now)
            .await
            .unwrap(),
    );

    assert_eq!(response.hits.len(), 1);
    let result = &response.hits[0];
    let expected = 1.2 * 1.5 + 101f64.ln() * 2.0 + 3.0 + 4.0;
    assert!((result.composite_score - expected).abs() < 1e-9);
    assert!(result.composite_score > result.relevance_score);
    assert!((result.relevance_score - 1.2).abs() < f64::EPSILON);
    assert_eq!(response.suggestions, vec!["KI", "Projekte"]);
}

#[tokio::test]
async fn test_engine_failure_is_upstream_error() {
    let engine = FakeEngine::failing("cluster red");
    let service = service(engine.clone(), Arc::new(FakeExtractor::default()));

    let err = service
        .search(SearchParams::with_query("rust"))
        .await
        .unwrap_err();
    assert!(err.is_upstream());
    assert_eq!(engine.calls(), 1);
}

#[tokio::test]
async fn test_unparseable_engine_body_is_upstream_error() {
    let engine = FakeEngine::malformed();
    let service = service(engine, Arc::new(FakeExtractor::default()));

    let err = service
        .search(SearchParams::with_query("rust"))
        .await
        .unwrap_err();
    assert!(err.is_upstream());
    assert!(err.to_string().contains("fake request failed"));
}

#[tokio::test(start_paused = true)]
async fn test_engine_timeout_is_bounded() {
    let engine = FakeEngine::hanging(Duration::from_secs(30));
    let service = service(engine, Arc::new(FakeExtractor::default()))
        .with_engine_timeout(Duration::from_millis(1500));

    let err = service
        .search(SearchParams::with_query("rust"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Timeout { timeout_ms: 1500 }));
}

#[tokio::test]
async fn test_cached_request_skips_engine() {
    let engine = FakeEngine::responding(hits(3));
    let cache = Arc::new(MemoryCache::default());
    let service =
        service(engine.clone(), Arc::new(FakeExtractor::default())).with_cache(cache.clone());

    let first = web(service.search(SearchParams::with_query("rust")).await.unwrap());
    let second = web(service.search(SearchParams::with_query("rust")).await.unwrap());

    assert_eq!(engine.calls(), 1);
    assert_eq!(cache.len(), 1);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_cache_key_covers_language_and_cursor() {
    let engine = FakeEngine::responding(hits(3));
    let cache = Arc::new(MemoryCache::default());
    let service =
        service(engine.clone(), Arc::new(FakeExtractor::default())).with_cache(cache.clone());

    service.search(SearchParams::with_query("rust")).await.unwrap();
    let german = SearchParams {
        lang: Some("de".into()),
        ..SearchParams::with_query("rust")
    };
    service.search(german).await.unwrap();
    let continued = SearchParams {
        cursor: PageCursor::encode(&[json!(1.0), json!("https://x.test/2")]),
        ..SearchParams::with_query("rust")
    };
    service.search(continued).await.unwrap();

    assert_eq!(engine.calls(), 3);
    assert_eq!(cache.len(), 3);
}

#[tokio::test]
async fn test_engine_failure_is_not_cached() {
    let engine = FakeEngine::failing("cluster red");
    let cache = Arc::new(MemoryCache::default());
    let service =
        service(engine.clone(), Arc::new(FakeExtractor::default())).with_cache(cache.clone());

    assert!(service.search(SearchParams::with_query("rust")).await.is_err());
    assert!(service.search(SearchParams::with_query("rust")).await.is_err());

    assert_eq!(engine.calls(), 2);
    assert_eq!(cache.len(), 0);
}

#[tokio::test]
async fn test_entity_extraction_is_bounded_to_top_five() {
    let engine = FakeEngine::responding(hits(12));
    let extractor = Arc::new(FakeExtractor::default());
    let service = service(engine, extractor.clone());

    let response = web(service.search(SearchParams::with_query("body")).await.unwrap());

    assert_eq!(response.hits.len(), 12);
    assert_eq!(extractor.calls(), 5);
    assert!(response.hits[..5].iter().all(|r| !r.entities.is_empty()));
    assert!(response.hits[5..].iter().all(|r| r.entities.is_empty()));
}

#[tokio::test]
async fn test_pagination_envelope() {
    let engine = FakeEngine::responding(EngineResponse {
        total: 45,
        ..hits(10)
    });
    let service = service(engine.clone(), Arc::new(FakeExtractor::default()));

    let params = SearchParams {
        page: Some(2),
        size: Some(10),
        ..SearchParams::with_query("rust")
    };
    let response = web(service.search(params).await.unwrap());

    assert_eq!(response.page, Some(2));
    assert_eq!(response.size, Some(10));
    assert_eq!(response.total_pages, Some(5));
    let cursor = response.cursor.expect("full page carries a cursor");
    assert_eq!(
        PageCursor::decode(&cursor).unwrap(),
        vec![json!(1.0), json!("https://x.test/9")]
    );

    let request = engine.last_request().unwrap();
    assert_eq!(request.offset(), 20);
}

#[tokio::test]
async fn test_partial_page_has_no_cursor() {
    let engine = FakeEngine::responding(hits(3));
    let service = service(engine, Arc::new(FakeExtractor::default()));

    let response = web(service.search(SearchParams::with_query("rust")).await.unwrap());
    assert!(response.cursor.is_none());
    assert_eq!(response.total_pages, Some(1));
}

#[tokio::test]
async fn test_engine_order_is_kept_unless_configured() {
    let mut popular = hit("popular", "https://x.test/popular");
    popular.document.views = Some(1_000_000);
    let engine = FakeEngine::responding(EngineResponse {
        total: 2,
        hits: vec![hit("plain", "https://x.test/plain"), popular],
    });

    let keep = service(engine.clone(), Arc::new(FakeExtractor::default()));
    let response = web(keep.search(SearchParams::with_query("rust")).await.unwrap());
    assert_eq!(response.hits[0].id, "plain");

    let limits = SearchLimits {
        sort_by_composite: true,
        ..SearchLimits::default()
    };
    let sorted = SearchServiceImpl::new(
        engine,
        Arc::new(FakeExtractor::default()),
        limits,
        ScoringWeights::default(),
    );
    let response = web(sorted.search(SearchParams::with_query("rust")).await.unwrap());
    assert_eq!(response.hits[0].id, "popular");
}

#[tokio::test]
async fn test_image_search_flattens_images() {
    let engine = FakeEngine::responding(EngineResponse {
        total: 1,
        hits: vec![RawHit {
            id: "p".into(),
            document: RawDocument {
                url: Some("https://x.test/p".into()),
                title: Some("Gallery".into()),
                images: vec![
                    RawImage {
                        url: "https://x.test/1.jpg".into(),
                        ..Default::default()
                    },
                    RawImage {
                        url: "https://x.test/2.jpg".into(),
                        alt: Some("Second".into()),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            highlight: Highlight::default(),
            ..Default::default()
        }],
    });
    let service = service(engine.clone(), Arc::new(FakeExtractor::default()));

    let params = SearchParams {
        kind: Some("image".into()),
        ..SearchParams::with_query("gallery")
    };
    let SearchEnvelope::Image(response) = service.search(params).await.unwrap() else {
        panic!("expected an image envelope");
    };

    assert_eq!(response.total, 2);
    assert_eq!(response.hits[0].alt, "Gallery");
    assert_eq!(response.hits[1].alt, "Second");
    assert_eq!(engine.last_request().unwrap().kind(), SearchKind::Image);
}

#[tokio::test]
async fn test_unknown_type_returns_empty_web_envelope() {
    let engine = FakeEngine::responding(hits(3));
    let service = service(engine.clone(), Arc::new(FakeExtractor::default()));

    let params = SearchParams {
        kind: Some("video".into()),
        ..SearchParams::with_query("rust")
    };
    let response = web(service.search(params).await.unwrap());
    assert!(response.hits.is_empty());
    assert_eq!(engine.calls(), 0);
}

#[tokio::test]
async fn test_health_reports_engine_name() {
    let service = service(
        FakeEngine::responding(EngineResponse::default()),
        Arc::new(FakeExtractor::default()),
    );
    assert!(service.health().await.is_ok());
    assert_eq!(service.engine_name(), "fake");
}
