//! Deduplicator

use std::collections::HashSet;

use sift_domain::value_objects::NormalizedResult;

/// Keep the first result per URL, in the given order
///
/// The URL is the only key. An empty URL is a value like any other, so at
/// most one URL-less result survives.
pub fn deduplicate(results: Vec<NormalizedResult>) -> Vec<NormalizedResult> {
    let mut seen_urls = HashSet::new();

    results
        .into_iter()
        .filter(|result| seen_urls.insert(result.url.clone()))
        .collect()
}
