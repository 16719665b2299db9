//! Entity Enricher
//!
//! Runs the configured [`EntityExtractor`] over the snippet of the leading
//! results only. Everything past the first `top_n` keeps an empty entity
//! list.

use std::sync::Arc;

use sift_domain::ports::providers::EntityExtractor;
use sift_domain::value_objects::NormalizedResult;

use super::transform::strip_markup;

/// Bounded entity extraction stage
#[derive(Clone)]
pub struct EntityEnricher {
    extractor: Arc<dyn EntityExtractor>,
    top_n: usize,
}

impl EntityEnricher {
    /// Create an enricher that processes at most `top_n` results
    pub fn new(extractor: Arc<dyn EntityExtractor>, top_n: usize) -> Self {
        Self { extractor, top_n }
    }

    /// Extract entities for the leading results; returns how many were processed
    pub fn enrich(&self, results: &mut [NormalizedResult]) -> usize {
        let mut processed = 0;
        for result in results.iter_mut().take(self.top_n) {
            let text = strip_markup(&result.snippet);
            result.entities = self.extractor.extract(&text);
            processed += 1;
        }
        processed
    }

    /// Name of the underlying extractor
    pub fn extractor_name(&self) -> &str {
        self.extractor.provider_name()
    }
}

impl std::fmt::Debug for EntityEnricher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityEnricher")
            .field("extractor", &self.extractor.provider_name())
            .field("top_n", &self.top_n)
            .finish()
    }
}
