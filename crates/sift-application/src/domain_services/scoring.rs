//! Composite Scorer
//!
//! ```text
//! composite = relevance * w.relevance
//!           + log1p(views) * w.popularity
//!           + freshness * w.freshness
//!           + tag overlap + keyword overlap + content length + entity overlap
//! ```
//!
//! `freshness = 1 / (1 + age_in_days)` for dated documents and exactly 0
//! for undated ones. The caller supplies one `now` per request so scores are
//! reproducible.

use chrono::{DateTime, Utc};
use sift_domain::constants::SECONDS_PER_DAY;
use sift_domain::value_objects::{NormalizedResult, ScoringWeights};

/// Individual contributions to one composite score
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    /// Weighted engine relevance
    pub relevance: f64,
    /// Weighted `log1p(views)`
    pub popularity: f64,
    /// Weighted freshness
    pub freshness: f64,
    /// Bonus for tags contained in the query
    pub tag_overlap: f64,
    /// Bonus for keywords contained in the query
    pub keyword_overlap: f64,
    /// Capped body-length bonus
    pub content_length: f64,
    /// Bonus for entities contained in the query
    pub entity_overlap: f64,
}

impl ScoreBreakdown {
    /// Sum of all contributions
    pub fn total(&self) -> f64 {
        self.relevance
            + self.popularity
            + self.freshness
            + self.tag_overlap
            + self.keyword_overlap
            + self.content_length
            + self.entity_overlap
    }
}

/// Computes composite scores from a fixed set of weights
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositeScorer {
    weights: ScoringWeights,
}

impl CompositeScorer {
    /// Create a scorer with the given weights
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Set `composite_score` on every result; `relevance_score` is untouched
    pub fn score_all(&self, results: &mut [NormalizedResult], query: &str, now: DateTime<Utc>) {
        let query = query.to_lowercase();
        for result in results.iter_mut() {
            result.composite_score = self.breakdown_lowered(result, &query, now).total();
        }
    }

    /// Score a single result
    pub fn score(&self, result: &NormalizedResult, query: &str, now: DateTime<Utc>) -> f64 {
        self.breakdown(result, query, now).total()
    }

    /// Per-signal contributions for a single result
    pub fn breakdown(
        &self,
        result: &NormalizedResult,
        query: &str,
        now: DateTime<Utc>,
    ) -> ScoreBreakdown {
        self.breakdown_lowered(result, &query.to_lowercase(), now)
    }

    fn breakdown_lowered(
        &self,
        result: &NormalizedResult,
        query: &str,
        now: DateTime<Utc>,
    ) -> ScoreBreakdown {
        let w = &self.weights;
        let tag_matches = count_contained(result.tags.iter().map(String::as_str), query);
        let keyword_matches = count_contained(result.keywords.iter().map(String::as_str), query);
        let entity_matches =
            count_contained(result.entities.iter().map(|e| e.text.as_str()), query);

        ScoreBreakdown {
            relevance: result.relevance_score * w.relevance,
            popularity: (result.views as f64).ln_1p() * w.popularity,
            freshness: freshness(result.updated_at, now) * w.freshness,
            tag_overlap: tag_matches as f64 * w.tag_match_bonus,
            keyword_overlap: keyword_matches as f64 * w.keyword_match_bonus,
            content_length: self.content_length_bonus(&result.body),
            entity_overlap: entity_matches as f64 * w.entity_match_bonus,
        }
    }

    fn content_length_bonus(&self, body: &str) -> f64 {
        let w = &self.weights;
        if w.content_length_divisor <= 0.0 {
            return 0.0;
        }
        (body.chars().count() as f64 / w.content_length_divisor).min(w.content_length_cap)
    }
}

/// `1 / (1 + age_in_days)`, 0 for undated documents
///
/// Timestamps in the future count as age 0.
pub fn freshness(updated_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    let Some(updated_at) = updated_at else {
        return 0.0;
    };
    let age_secs = (now - updated_at).num_milliseconds() as f64 / 1000.0;
    let age_days = (age_secs / SECONDS_PER_DAY).max(0.0);
    1.0 / (1.0 + age_days)
}

fn count_contained<'a>(terms: impl Iterator<Item = &'a str>, query: &str) -> usize {
    terms
        .map(str::trim)
        .filter(|term| !term.is_empty() && query.contains(&term.to_lowercase()))
        .count()
}
