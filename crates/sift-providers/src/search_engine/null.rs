//! Null search engine for testing and development
//!
//! Answers every query with zero hits. No network access.

use std::sync::Arc;

use async_trait::async_trait;
use sift_application::ports::registry::{
    SEARCH_ENGINE_PROVIDERS, SearchEngineProviderConfig, SearchEngineProviderEntry,
};
use sift_domain::error::Result;
use sift_domain::ports::providers::SearchEngineProvider;
use sift_domain::value_objects::{EngineResponse, SearchRequest};

/// Search engine that never finds anything
///
/// # Example
///
/// ```rust
/// use sift_providers::search_engine::NullSearchEngine;
/// use sift_providers::SearchEngineProvider;
///
/// let engine = NullSearchEngine::new();
/// assert_eq!(engine.provider_name(), "null");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSearchEngine;

impl NullSearchEngine {
    /// Create a new null engine
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SearchEngineProvider for NullSearchEngine {
    async fn search(&self, _request: &SearchRequest) -> Result<EngineResponse> {
        Ok(EngineResponse::default())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

fn null_factory(
    _config: &SearchEngineProviderConfig,
) -> std::result::Result<Arc<dyn SearchEngineProvider>, String> {
    Ok(Arc::new(NullSearchEngine::new()))
}

#[linkme::distributed_slice(SEARCH_ENGINE_PROVIDERS)]
static NULL_ENGINE: SearchEngineProviderEntry = SearchEngineProviderEntry {
    name: "null",
    description: "Null search engine (always empty, for testing)",
    factory: null_factory,
};
