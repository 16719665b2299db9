//! Root configuration

use serde::{Deserialize, Serialize};
use sift_domain::value_objects::{ScoringWeights, SearchLimits};

use super::{CacheConfig, EngineConfig, EntitiesConfig, LoggingConfig, ServerConfig};

/// Main application configuration
///
/// Every section has defaults, so an empty file (or none at all) yields a
/// runnable configuration pointing at a local Elasticsearch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server
    pub server: ServerConfig,
    /// Search engine adapter
    pub engine: EngineConfig,
    /// Entity extractor
    pub entities: EntitiesConfig,
    /// Request limits and pipeline switches
    pub search: SearchLimits,
    /// Composite score weights
    pub scoring: ScoringWeights,
    /// Response cache
    pub cache: CacheConfig,
    /// Logging
    pub logging: LoggingConfig,
}
