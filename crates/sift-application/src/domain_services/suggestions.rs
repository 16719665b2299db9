//! Suggestion Generator
//!
//! Candidates are the tags and keywords of the deduplicated result set. A
//! candidate qualifies when its Sørensen-Dice similarity to the query is
//! above the threshold, or when any query token is a substring of it.
//! Qualifying candidates are returned in first-qualifying order.

use std::collections::HashSet;

use sift_domain::value_objects::NormalizedResult;

/// Builds query refinement suggestions
#[derive(Debug, Clone, Copy)]
pub struct SuggestionGenerator {
    max_suggestions: usize,
    similarity_threshold: f64,
}

impl SuggestionGenerator {
    /// Create a generator returning at most `max_suggestions` entries
    pub fn new(max_suggestions: usize, similarity_threshold: f64) -> Self {
        Self {
            max_suggestions,
            similarity_threshold,
        }
    }

    /// Suggestions for `query` drawn from the results' vocabulary
    ///
    /// Duplicates are removed case-insensitively; the first spelling wins.
    pub fn suggest(&self, query: &str, results: &[NormalizedResult]) -> Vec<String> {
        let query = query.trim().to_lowercase();
        let tokens: Vec<&str> = query.split_whitespace().collect();
        let mut seen = HashSet::new();
        let mut suggestions = Vec::new();

        let vocabulary = results
            .iter()
            .flat_map(|result| result.tags.iter().chain(result.keywords.iter()))
            .map(|term| term.trim())
            .filter(|term| !term.is_empty());

        for candidate in vocabulary {
            if suggestions.len() >= self.max_suggestions {
                break;
            }
            let lowered = candidate.to_lowercase();
            if !seen.insert(lowered.clone()) {
                continue;
            }
            if self.qualifies(&lowered, &query, &tokens) {
                suggestions.push(candidate.to_string());
            }
        }

        suggestions
    }

    /// Symmetric similarity in `[0, 1]` between two lower-cased strings
    pub fn similarity(a: &str, b: &str) -> f64 {
        strsim::sorensen_dice(a, b)
    }

    fn qualifies(&self, candidate: &str, query: &str, tokens: &[&str]) -> bool {
        Self::similarity(candidate, query) > self.similarity_threshold
            || tokens.iter().any(|token| candidate.contains(token))
    }
}
