//! Elasticsearch Request Builder
//!
//! Deterministically turns a [`SearchRequest`] into a `_search` body.
//!
//! Web requests use a `function_score` query:
//!
//! ```text
//! final = base_query_score * Σ functions        (score_mode sum, boost_mode multiply)
//!
//! base      = multi_match(title^5, tags^4, meta_keywords^3, content^2)
//!             + match_phrase(title, boost 6)
//! functions = language match (weight 2.5)
//!             + gauss(crawl_time, origin now, scale 30d, decay 0.5)
//!             + field_value_factor(views, log1p, missing 0)   // optional
//! ```
//!
//! Shallow pages use `from`; a cursor switches to `search_after`. Both sort
//! by `_score` then the tiebreaker field so that cursors are stable.

use serde_json::{Map, Value, json};
use sift_domain::constants::{FRESHNESS_DECAY_SCALE_DAYS, LANGUAGE_MATCH_WEIGHT};
use sift_domain::value_objects::{SearchKind, SearchRequest};

use crate::constants::{
    ELASTICSEARCH_DEFAULT_TIEBREAKER, FIELD_FRESHNESS, FIELD_LANGUAGE, FIELD_VIEWS,
    FRESHNESS_DECAY, HIGHLIGHT_CONTENT_FRAGMENTS, HIGHLIGHT_TITLE_FRAGMENTS, IMAGE_SEARCH_FIELDS,
    MINIMUM_SHOULD_MATCH, TITLE_PHRASE_BOOST, WEB_SEARCH_FIELDS,
};

/// Builds `_search` request bodies
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    tiebreaker_field: String,
    popularity_boost: bool,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new(ELASTICSEARCH_DEFAULT_TIEBREAKER)
    }
}

impl QueryBuilder {
    /// Create a builder sorting ties on `tiebreaker_field`
    pub fn new(tiebreaker_field: impl Into<String>) -> Self {
        Self {
            tiebreaker_field: tiebreaker_field.into(),
            popularity_boost: true,
        }
    }

    /// Toggle the view-count popularity function
    pub fn with_popularity_boost(mut self, enabled: bool) -> Self {
        self.popularity_boost = enabled;
        self
    }

    /// Build the request body for `request`
    pub fn build(&self, request: &SearchRequest) -> Value {
        let mut body = match request.kind() {
            SearchKind::Web => self.web_body(request),
            SearchKind::Image => Self::image_body(request),
        };
        self.paginate(&mut body, request);
        Value::Object(body)
    }

    fn web_body(&self, request: &SearchRequest) -> Map<String, Value> {
        let query = request.query();

        let mut functions = vec![
            json!({
                "filter": { "term": { FIELD_LANGUAGE: request.language() } },
                "weight": LANGUAGE_MATCH_WEIGHT,
            }),
            json!({
                "gauss": {
                    FIELD_FRESHNESS: {
                        "origin": "now",
                        "scale": format!("{FRESHNESS_DECAY_SCALE_DAYS}d"),
                        "decay": FRESHNESS_DECAY,
                    }
                }
            }),
        ];
        if self.popularity_boost {
            functions.push(json!({
                "field_value_factor": {
                    "field": FIELD_VIEWS,
                    "modifier": "log1p",
                    "missing": 0,
                }
            }));
        }

        let body = json!({
            "size": request.page_size(),
            "track_total_hits": true,
            "query": {
                "function_score": {
                    "query": {
                        "bool": {
                            "must": [{
                                "multi_match": {
                                    "query": query,
                                    "fields": WEB_SEARCH_FIELDS,
                                    "type": "best_fields",
                                    "operator": "and",
                                    "fuzziness": "AUTO",
                                    "minimum_should_match": MINIMUM_SHOULD_MATCH,
                                }
                            }],
                            "should": [{
                                "match_phrase": {
                                    "title": { "query": query, "boost": TITLE_PHRASE_BOOST }
                                }
                            }],
                        }
                    },
                    "functions": functions,
                    "score_mode": "sum",
                    "boost_mode": "multiply",
                }
            },
            "highlight": {
                "fields": {
                    "title": { "number_of_fragments": HIGHLIGHT_TITLE_FRAGMENTS },
                    "content": { "number_of_fragments": HIGHLIGHT_CONTENT_FRAGMENTS },
                }
            },
        });

        into_map(body)
    }

    fn image_body(request: &SearchRequest) -> Map<String, Value> {
        into_map(json!({
            "size": request.page_size(),
            "track_total_hits": true,
            "query": {
                "bool": {
                    "must": [
                        { "exists": { "field": "images.url" } },
                        {
                            "multi_match": {
                                "query": request.query(),
                                "fields": IMAGE_SEARCH_FIELDS,
                                "fuzziness": "AUTO",
                            }
                        },
                    ]
                }
            },
        }))
    }

    fn paginate(&self, body: &mut Map<String, Value>, request: &SearchRequest) {
        body.insert(
            "sort".to_string(),
            json!([
                { "_score": "desc" },
                { self.tiebreaker_field.as_str(): "asc" },
            ]),
        );
        match request.search_after() {
            Some(values) => {
                body.insert("search_after".to_string(), Value::Array(values));
            }
            None => {
                body.insert("from".to_string(), json!(request.offset()));
            }
        }
    }
}

fn into_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
