//! Registration of the bundled providers

use sift_application::ports::registry::{
    EntityExtractorConfig, SearchEngineProviderConfig, list_entity_extractors,
    list_search_engines, resolve_entity_extractor, resolve_search_engine,
};

#[test]
fn test_engines_are_registered() {
    let names: Vec<&str> = list_search_engines().iter().map(|(n, _)| *n).collect();
    assert!(names.contains(&"elasticsearch"));
    assert!(names.contains(&"null"));
}

#[test]
fn test_extractors_are_registered() {
    let names: Vec<&str> = list_entity_extractors().iter().map(|(n, _)| *n).collect();
    assert!(names.contains(&"heuristic"));
    assert!(names.contains(&"null"));
}

#[test]
fn test_resolve_elasticsearch_with_defaults() {
    let engine = resolve_search_engine(&SearchEngineProviderConfig::new("elasticsearch"))
        .expect("elasticsearch resolves");
    assert_eq!(engine.provider_name(), "elasticsearch");
}

#[test]
fn test_resolve_extractors() {
    for name in ["heuristic", "null"] {
        let extractor = resolve_entity_extractor(&EntityExtractorConfig::new(name))
            .expect("extractor resolves");
        assert_eq!(extractor.provider_name(), name);
    }
}
