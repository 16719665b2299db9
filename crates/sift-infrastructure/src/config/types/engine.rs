//! Provider selection

use serde::{Deserialize, Serialize};
use sift_application::ports::registry::{EntityExtractorConfig, SearchEngineProviderConfig};
use sift_domain::constants::ENGINE_TIMEOUT_MS;

use crate::constants::{DEFAULT_ENGINE_PROVIDER, DEFAULT_ENTITY_EXTRACTOR};

/// Search engine configuration
///
/// `url`, `index` and `tiebreaker_field` fall back to the adapter's own
/// defaults when unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    /// Registered provider name
    pub provider: String,
    /// Cluster base URL
    pub url: Option<String>,
    /// Index or alias
    pub index: Option<String>,
    /// Basic-auth user
    pub username: Option<String>,
    /// Basic-auth password
    pub password: Option<String>,
    /// API key (takes precedence over basic auth)
    pub api_key: Option<String>,
    /// Budget for one engine call
    pub timeout_ms: u64,
    /// Secondary sort field for stable cursors
    pub tiebreaker_field: Option<String>,
    /// Add the view-count popularity function to web queries
    pub popularity_boost: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_ENGINE_PROVIDER.to_string(),
            url: None,
            index: None,
            username: None,
            password: None,
            api_key: None,
            timeout_ms: ENGINE_TIMEOUT_MS,
            tiebreaker_field: None,
            popularity_boost: true,
        }
    }
}

impl EngineConfig {
    /// Registry config for resolving the adapter
    pub fn to_provider_config(&self) -> SearchEngineProviderConfig {
        let mut config = SearchEngineProviderConfig::new(&self.provider)
            .with_timeout_ms(self.timeout_ms)
            .with_popularity_boost(self.popularity_boost);
        if let Some(url) = &self.url {
            config = config.with_url(url);
        }
        if let Some(index) = &self.index {
            config = config.with_index(index);
        }
        if let (Some(username), Some(password)) = (&self.username, &self.password) {
            config = config.with_basic_auth(username, password);
        }
        if let Some(api_key) = &self.api_key {
            config = config.with_api_key(api_key);
        }
        if let Some(field) = &self.tiebreaker_field {
            config = config.with_tiebreaker_field(field);
        }
        config
    }
}

/// Entity extractor configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EntitiesConfig {
    /// Registered extractor name
    pub provider: String,
}

impl Default for EntitiesConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_ENTITY_EXTRACTOR.to_string(),
        }
    }
}

impl EntitiesConfig {
    /// Registry config for resolving the extractor
    pub fn to_provider_config(&self) -> EntityExtractorConfig {
        EntityExtractorConfig::new(&self.provider)
    }
}
