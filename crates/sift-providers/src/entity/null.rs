//! Null entity extractor

use std::sync::Arc;

use sift_application::ports::registry::{
    ENTITY_EXTRACTORS, EntityExtractorConfig, EntityExtractorEntry,
};
use sift_domain::ports::providers::EntityExtractor;
use sift_domain::value_objects::Entity;

/// Extractor that never finds anything, disabling the entity signal
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEntityExtractor;

impl NullEntityExtractor {
    /// Create a new null extractor
    pub fn new() -> Self {
        Self
    }
}

impl EntityExtractor for NullEntityExtractor {
    fn extract(&self, _text: &str) -> Vec<Entity> {
        Vec::new()
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

fn null_factory(
    _config: &EntityExtractorConfig,
) -> std::result::Result<Arc<dyn EntityExtractor>, String> {
    Ok(Arc::new(NullEntityExtractor::new()))
}

#[linkme::distributed_slice(ENTITY_EXTRACTORS)]
static NULL_EXTRACTOR: EntityExtractorEntry = EntityExtractorEntry {
    name: "null",
    description: "Null entity extractor (always empty)",
    factory: null_factory,
};
