//! Provider registry tests
//!
//! Registers test-only entries into the slices to exercise resolution.

use std::sync::Arc;

use sift_application::ports::registry::{
    ENTITY_EXTRACTORS, EntityExtractorConfig, EntityExtractorEntry, SEARCH_ENGINE_PROVIDERS,
    SearchEngineProviderConfig, SearchEngineProviderEntry, list_entity_extractors,
    list_search_engines, resolve_entity_extractor, resolve_search_engine,
};
use sift_domain::value_objects::EngineResponse;

use crate::support::{FakeEngine, FakeExtractor};

#[linkme::distributed_slice(SEARCH_ENGINE_PROVIDERS)]
static TEST_ENGINE: SearchEngineProviderEntry = SearchEngineProviderEntry {
    name: "registry-test",
    description: "Engine registered by the registry tests",
    factory: |config| {
        if config.url.is_none() {
            return Err("url is required".to_string());
        }
        Ok(FakeEngine::responding(EngineResponse::default()))
    },
};

#[linkme::distributed_slice(ENTITY_EXTRACTORS)]
static TEST_EXTRACTOR: EntityExtractorEntry = EntityExtractorEntry {
    name: "registry-test",
    description: "Extractor registered by the registry tests",
    factory: |_| Ok(Arc::new(FakeExtractor::default())),
};

#[test]
fn test_resolve_registered_engine() {
    let config = SearchEngineProviderConfig::new("registry-test").with_url("http://localhost");
    let engine = resolve_search_engine(&config).expect("registered engine resolves");
    assert_eq!(engine.provider_name(), "fake");
}

#[test]
fn test_factory_errors_are_returned() {
    let config = SearchEngineProviderConfig::new("registry-test");
    let Err(message) = resolve_search_engine(&config) else {
        panic!("factory error must propagate");
    };
    assert_eq!(message, "url is required");
}

#[test]
fn test_unknown_engine_lists_available() {
    let config = SearchEngineProviderConfig::new("solr");
    let Err(message) = resolve_search_engine(&config) else {
        panic!("unknown engine must not resolve");
    };
    assert!(message.contains("solr"));
    assert!(message.contains("registry-test"));
}

#[test]
fn test_resolve_registered_extractor() {
    let extractor = resolve_entity_extractor(&EntityExtractorConfig::new("registry-test"))
        .expect("registered extractor resolves");
    assert_eq!(extractor.provider_name(), "fake");
    assert!(resolve_entity_extractor(&EntityExtractorConfig::new("spacy")).is_err());
}

#[test]
fn test_list_includes_registered_entries() {
    assert!(
        list_search_engines()
            .iter()
            .any(|(name, _)| *name == "registry-test")
    );
    assert!(
        list_entity_extractors()
            .iter()
            .any(|(name, description)| *name == "registry-test" && !description.is_empty())
    );
}
