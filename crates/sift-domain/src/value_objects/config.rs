//! Tunable ranking configuration
//!
//! Both structs deserialize with defaults for missing fields, so a
//! configuration file only has to name the values it changes.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LANGUAGE, DEFAULT_PAGE_SIZE, ENTITY_EXTRACTION_TOP_N, MAX_PAGE_SIZE, MAX_SUGGESTIONS,
    MIN_QUERY_LENGTH, SCORE_CONTENT_LENGTH_CAP, SCORE_CONTENT_LENGTH_DIVISOR,
    SCORE_ENTITY_MATCH_BONUS, SCORE_FRESHNESS_WEIGHT, SCORE_KEYWORD_MATCH_BONUS,
    SCORE_POPULARITY_WEIGHT, SCORE_RELEVANCE_WEIGHT, SCORE_TAG_MATCH_BONUS, SNIPPET_MAX_CHARS,
    SUGGESTION_SIMILARITY_THRESHOLD,
};

/// Value Object: Composite Score Weights
///
/// ```text
/// composite = relevance * relevance_weight
///           + log1p(views) * popularity_weight
///           + freshness * freshness_weight
///           + tag_match_bonus * matching_tags
///           + keyword_match_bonus * matching_keywords
///           + min(body_chars / content_length_divisor, content_length_cap)
///           + entity_match_bonus * matching_entities
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Multiplier on the engine relevance score
    pub relevance: f64,
    /// Multiplier on `log1p(views)`
    pub popularity: f64,
    /// Multiplier on `1 / (1 + age_in_days)`
    pub freshness: f64,
    /// Bonus per tag that is a case-insensitive substring of the query
    pub tag_match_bonus: f64,
    /// Bonus per keyword that is a case-insensitive substring of the query
    pub keyword_match_bonus: f64,
    /// Bonus per extracted entity that is a case-insensitive substring of the query
    pub entity_match_bonus: f64,
    /// Body characters worth one bonus point
    pub content_length_divisor: f64,
    /// Upper bound of the content-length bonus
    pub content_length_cap: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            relevance: SCORE_RELEVANCE_WEIGHT,
            popularity: SCORE_POPULARITY_WEIGHT,
            freshness: SCORE_FRESHNESS_WEIGHT,
            tag_match_bonus: SCORE_TAG_MATCH_BONUS,
            keyword_match_bonus: SCORE_KEYWORD_MATCH_BONUS,
            entity_match_bonus: SCORE_ENTITY_MATCH_BONUS,
            content_length_divisor: SCORE_CONTENT_LENGTH_DIVISOR,
            content_length_cap: SCORE_CONTENT_LENGTH_CAP,
        }
    }
}

/// Value Object: Request Limits
///
/// Bounds the cost of one search request and seeds the defaults applied by
/// the query normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// Minimum trimmed query length in characters
    pub min_query_length: usize,
    /// Hard ceiling for the page size
    pub max_page_size: u32,
    /// Page size when the caller sends none
    pub default_page_size: u32,
    /// Leading results that go through entity extraction
    pub entity_top_n: usize,
    /// Maximum number of suggestions
    pub max_suggestions: usize,
    /// Maximum fallback snippet length in characters
    pub snippet_max_chars: usize,
    /// Similarity above which a vocabulary term is suggested
    pub similarity_threshold: f64,
    /// Language used when no locale hint is present
    pub fallback_language: String,
    /// Reorder hits by descending composite score before responding
    pub sort_by_composite: bool,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            min_query_length: MIN_QUERY_LENGTH,
            max_page_size: MAX_PAGE_SIZE,
            default_page_size: DEFAULT_PAGE_SIZE,
            entity_top_n: ENTITY_EXTRACTION_TOP_N,
            max_suggestions: MAX_SUGGESTIONS,
            snippet_max_chars: SNIPPET_MAX_CHARS,
            similarity_threshold: SUGGESTION_SIMILARITY_THRESHOLD,
            fallback_language: DEFAULT_LANGUAGE.to_string(),
            sort_by_composite: false,
        }
    }
}
