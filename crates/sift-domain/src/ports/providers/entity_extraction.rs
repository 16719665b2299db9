use crate::value_objects::Entity;

/// Named-Entity Extraction Interface
///
/// Narrow capability the ranking core uses to enrich the leading results.
/// Extraction never fails: text without recognizable entities yields an
/// empty list. Each call is independent, so callers may run extractions in
/// any order.
pub trait EntityExtractor: Send + Sync {
    /// Extract entities from a short, markup-free text
    fn extract(&self, text: &str) -> Vec<Entity>;

    /// Get the name/identifier of this extractor implementation
    fn provider_name(&self) -> &str;
}
