//! Entity Extractor Registry

use std::collections::HashMap;
use std::sync::Arc;

use sift_domain::ports::providers::EntityExtractor;

/// Configuration for entity extractor creation
#[derive(Debug, Clone, Default)]
pub struct EntityExtractorConfig {
    /// Extractor name (e.g., "heuristic", "null")
    pub provider: String,
    /// Additional extractor-specific configuration
    pub extra: HashMap<String, String>,
}

impl EntityExtractorConfig {
    /// Create a new config with the given extractor name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for entity extractors
pub struct EntityExtractorEntry {
    /// Unique extractor name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create extractor instance
    pub factory: fn(&EntityExtractorConfig) -> Result<Arc<dyn EntityExtractor>, String>,
}

#[linkme::distributed_slice]
pub static ENTITY_EXTRACTORS: [EntityExtractorEntry] = [..];

/// Resolve an entity extractor by name from the registry
pub fn resolve_entity_extractor(
    config: &EntityExtractorConfig,
) -> Result<Arc<dyn EntityExtractor>, String> {
    let provider_name = &config.provider;

    ENTITY_EXTRACTORS
        .iter()
        .find(|entry| entry.name == provider_name)
        .map_or_else(
            || {
                let available: Vec<&str> = ENTITY_EXTRACTORS.iter().map(|e| e.name).collect();
                Err(format!(
                    "Unknown entity extractor '{provider_name}'. Available providers: {available:?}"
                ))
            },
            |entry| (entry.factory)(config),
        )
}

/// List all registered entity extractors as (name, description)
pub fn list_entity_extractors() -> Vec<(&'static str, &'static str)> {
    ENTITY_EXTRACTORS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
