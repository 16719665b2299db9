//! Query normalizer tests

use sift_application::domain_services::{NormalizedQuery, QueryNormalizer};
use sift_domain::value_objects::{PageCursor, SearchKind, SearchLimits, SearchParams};

fn normalize(params: &SearchParams) -> NormalizedQuery {
    QueryNormalizer::new(SearchLimits::default()).normalize(params)
}

fn request(params: &SearchParams) -> sift_domain::SearchRequest {
    match normalize(params) {
        NormalizedQuery::Search(request) => request,
        other => panic!("expected a search request, got {other:?}"),
    }
}

#[test]
fn test_short_queries_are_rejected() {
    for query in ["", " ", "a", "  b  ", "\tx\n"] {
        let outcome = normalize(&SearchParams::with_query(query));
        assert!(
            matches!(outcome, NormalizedQuery::TooShort { .. }),
            "query {query:?} should be rejected"
        );
    }
    assert!(matches!(
        normalize(&SearchParams::default()),
        NormalizedQuery::TooShort { page: 0, size: 20 }
    ));
}

#[test]
fn test_query_is_trimmed() {
    let request = request(&SearchParams::with_query("  ki projekte  "));
    assert_eq!(request.query(), "ki projekte");
}

#[test]
fn test_two_multibyte_chars_are_long_enough() {
    let request = request(&SearchParams::with_query("äö"));
    assert_eq!(request.query(), "äö");
}

#[test]
fn test_page_size_is_clamped() {
    let cases = [(None, 20), (Some(5), 5), (Some(500), 20), (Some(0), 1), (Some(-3), 1)];
    for (size, expected) in cases {
        let params = SearchParams {
            size,
            ..SearchParams::with_query("rust")
        };
        assert_eq!(request(&params).page_size(), expected, "size {size:?}");
    }
}

#[test]
fn test_negative_page_becomes_zero() {
    let params = SearchParams {
        page: Some(-4),
        ..SearchParams::with_query("rust")
    };
    assert_eq!(request(&params).page(), 0);

    let params = SearchParams {
        page: Some(7),
        ..SearchParams::with_query("rust")
    };
    assert_eq!(request(&params).page(), 7);
}

#[test]
fn test_language_preference() {
    let cases = [
        (None, None, "en"),
        (Some("de"), None, "de"),
        (Some("de-AT"), None, "de"),
        (Some("DE"), None, "de"),
        (Some("fr"), None, "en"),
        (None, Some("de-DE,de;q=0.9,en;q=0.8"), "de"),
        (None, Some("en-US,en;q=0.9"), "en"),
        (Some("en"), Some("de-DE"), "en"),
        (Some(""), Some("de-DE"), "de"),
    ];
    for (lang, header, expected) in cases {
        let params = SearchParams {
            lang: lang.map(str::to_string),
            accept_language: header.map(str::to_string),
            ..SearchParams::with_query("rust")
        };
        assert_eq!(
            request(&params).language(),
            expected,
            "lang {lang:?}, header {header:?}"
        );
    }
}

#[test]
fn test_fallback_language_is_configurable() {
    let limits = SearchLimits {
        fallback_language: "fr".to_string(),
        ..SearchLimits::default()
    };
    let outcome = QueryNormalizer::new(limits).normalize(&SearchParams::with_query("rust"));
    let NormalizedQuery::Search(request) = outcome else {
        panic!("expected a search request");
    };
    assert_eq!(request.language(), "fr");
}

#[test]
fn test_invalid_cursor_is_dropped() {
    let params = SearchParams {
        cursor: Some("%%%".to_string()),
        ..SearchParams::with_query("rust")
    };
    assert!(request(&params).cursor().is_none());

    let token = PageCursor::encode(&[serde_json::json!(3.5)]).unwrap();
    let params = SearchParams {
        cursor: Some(token.clone()),
        ..SearchParams::with_query("rust")
    };
    assert_eq!(request(&params).cursor(), Some(token.as_str()));
}

#[test]
fn test_search_kind() {
    let params = SearchParams {
        kind: Some("image".to_string()),
        ..SearchParams::with_query("rust")
    };
    assert_eq!(request(&params).kind(), SearchKind::Image);

    let params = SearchParams {
        kind: Some("video".to_string()),
        ..SearchParams::with_query("rust")
    };
    assert!(matches!(
        normalize(&params),
        NormalizedQuery::UnknownKind { .. }
    ));
}
