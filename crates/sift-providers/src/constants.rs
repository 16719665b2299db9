//! Provider Constants
//!
//! Constants specific to provider implementations. Ranking defaults live in
//! `sift-domain`.

// ============================================================================
// HTTP
// ============================================================================

/// Content-Type header value for JSON
pub const CONTENT_TYPE_JSON: &str = "application/json";

// ============================================================================
// ELASTICSEARCH
// ============================================================================

/// Default cluster URL
pub const ELASTICSEARCH_DEFAULT_URL: &str = "http://localhost:9200";

/// Default page index
pub const ELASTICSEARCH_DEFAULT_INDEX: &str = "pages";

/// Default secondary sort field, keeps `search_after` cursors stable
pub const ELASTICSEARCH_DEFAULT_TIEBREAKER: &str = "url.keyword";

/// `error.type` reported when the queried index does not exist
pub const ES_INDEX_NOT_FOUND: &str = "index_not_found_exception";

/// Field carrying the document language
pub const FIELD_LANGUAGE: &str = "lang.keyword";

/// Field carrying the crawl / update timestamp
pub const FIELD_FRESHNESS: &str = "crawl_time";

/// Field carrying the view counter
pub const FIELD_VIEWS: &str = "views";

/// Weighted fields of the web multi-match, highest weight first
pub const WEB_SEARCH_FIELDS: [&str; 4] = ["title^5", "tags^4", "meta_keywords^3", "content^2"];

/// Weighted fields of the image multi-match
pub const IMAGE_SEARCH_FIELDS: [&str; 2] = ["title^2", "content"];

/// Boost of the exact title phrase clause
pub const TITLE_PHRASE_BOOST: f64 = 6.0;

/// `minimum_should_match` of the web multi-match
pub const MINIMUM_SHOULD_MATCH: &str = "70%";

/// Gaussian decay at one scale distance
pub const FRESHNESS_DECAY: f64 = 0.5;

/// Highlight fragments returned for the title
pub const HIGHLIGHT_TITLE_FRAGMENTS: u32 = 1;

/// Highlight fragments returned for the content
pub const HIGHLIGHT_CONTENT_FRAGMENTS: u32 = 2;

// ============================================================================
// CACHE
// ============================================================================

/// Default number of cached responses
pub const CACHE_DEFAULT_CAPACITY: u64 = 1_000;

/// Default time-to-live of a cached response in seconds
pub const CACHE_DEFAULT_TTL_SECS: u64 = 60;
