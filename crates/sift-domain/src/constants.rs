//! Domain constants
//!
//! Default request limits and ranking weights. Every value here seeds a
//! field of [`SearchLimits`](crate::value_objects::SearchLimits) or
//! [`ScoringWeights`](crate::value_objects::ScoringWeights) and can be
//! overridden through configuration.

// ============================================================================
// REQUEST LIMITS
// ============================================================================

/// Minimum trimmed query length (in characters) before the engine is called
pub const MIN_QUERY_LENGTH: usize = 2;

/// Maximum page size a caller can request
pub const MAX_PAGE_SIZE: u32 = 20;

/// Page size used when the caller does not send one
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Number of leading results that go through entity extraction
pub const ENTITY_EXTRACTION_TOP_N: usize = 5;

/// Maximum number of query suggestions per response
pub const MAX_SUGGESTIONS: usize = 5;

/// Maximum length of a markup-stripped fallback snippet, in characters
pub const SNIPPET_MAX_CHARS: usize = 300;

/// Similarity above which a vocabulary term becomes a suggestion
pub const SUGGESTION_SIMILARITY_THRESHOLD: f64 = 0.6;

// ============================================================================
// LANGUAGE PREFERENCE
// ============================================================================

/// Language used when no locale hint is present
pub const DEFAULT_LANGUAGE: &str = "en";

/// Language selected for locale hints starting with "de"
pub const GERMAN_LANGUAGE: &str = "de";

// ============================================================================
// COMPOSITE SCORE WEIGHTS
// ============================================================================

/// Multiplier on the engine relevance score
pub const SCORE_RELEVANCE_WEIGHT: f64 = 1.5;

/// Multiplier on `log1p(views)`
pub const SCORE_POPULARITY_WEIGHT: f64 = 2.0;

/// Multiplier on `1 / (1 + age_in_days)`
pub const SCORE_FRESHNESS_WEIGHT: f64 = 3.0;

/// Bonus per tag contained in the query
pub const SCORE_TAG_MATCH_BONUS: f64 = 2.0;

/// Bonus per keyword contained in the query
pub const SCORE_KEYWORD_MATCH_BONUS: f64 = 1.5;

/// Bonus per extracted entity contained in the query
pub const SCORE_ENTITY_MATCH_BONUS: f64 = 1.0;

/// Body characters worth one point of content-length bonus
pub const SCORE_CONTENT_LENGTH_DIVISOR: f64 = 1000.0;

/// Upper bound of the content-length bonus
pub const SCORE_CONTENT_LENGTH_CAP: f64 = 5.0;

// ============================================================================
// ENGINE-SIDE FUNCTION SCORE
// ============================================================================

/// Freshness decay window used by the engine-side Gaussian, in days
pub const FRESHNESS_DECAY_SCALE_DAYS: u32 = 30;

/// Engine-side weight applied when document language matches the preference
pub const LANGUAGE_MATCH_WEIGHT: f64 = 2.5;

/// Default budget for one engine call, in milliseconds
pub const ENGINE_TIMEOUT_MS: u64 = 1500;

/// Seconds in one day, used for document age
pub const SECONDS_PER_DAY: f64 = 86_400.0;
