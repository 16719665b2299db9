//! Search Engine Provider Registry
//!
//! Auto-registration system for search engine adapters using linkme
//! distributed slices.

use std::collections::HashMap;
use std::sync::Arc;

use sift_domain::ports::providers::SearchEngineProvider;

/// Configuration for search engine provider creation
///
/// Carries every option an engine adapter might need. Adapters use what
/// they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct SearchEngineProviderConfig {
    /// Provider name (e.g., "elasticsearch", "null")
    pub provider: String,
    /// Base URL of the engine cluster
    pub url: Option<String>,
    /// Index (or alias) to query
    pub index: Option<String>,
    /// Basic-auth user name
    pub username: Option<String>,
    /// Basic-auth password
    pub password: Option<String>,
    /// API key, sent instead of basic auth when present
    pub api_key: Option<String>,
    /// Per-call timeout in milliseconds
    pub timeout_ms: Option<u64>,
    /// Secondary sort field that makes `search_after` cursors stable
    pub tiebreaker_field: Option<String>,
    /// Whether to add the view-count popularity function
    pub popularity_boost: bool,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl SearchEngineProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            popularity_boost: true,
            ..Default::default()
        }
    }

    /// Set the engine URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the index name
    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    /// Set basic-auth credentials
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the call timeout
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Set the tiebreaker sort field
    pub fn with_tiebreaker_field(mut self, field: impl Into<String>) -> Self {
        self.tiebreaker_field = Some(field.into());
        self
    }

    /// Toggle the popularity function
    pub fn with_popularity_boost(mut self, enabled: bool) -> Self {
        self.popularity_boost = enabled;
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for search engine providers
pub struct SearchEngineProviderEntry {
    /// Unique provider name (e.g., "elasticsearch", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&SearchEngineProviderConfig) -> Result<Arc<dyn SearchEngineProvider>, String>,
}

#[linkme::distributed_slice]
pub static SEARCH_ENGINE_PROVIDERS: [SearchEngineProviderEntry] = [..];

/// Resolve a search engine provider by name from the registry
///
/// # Returns
/// * `Ok(Arc<dyn SearchEngineProvider>)` - Created provider instance
/// * `Err(String)` - Unknown name (with the available names) or factory failure
pub fn resolve_search_engine(
    config: &SearchEngineProviderConfig,
) -> Result<Arc<dyn SearchEngineProvider>, String> {
    let provider_name = &config.provider;

    for entry in SEARCH_ENGINE_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = SEARCH_ENGINE_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown search engine provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered search engine providers as (name, description)
pub fn list_search_engines() -> Vec<(&'static str, &'static str)> {
    SEARCH_ENGINE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
