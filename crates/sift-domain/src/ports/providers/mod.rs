//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`SearchEngineProvider`] | External document-search engine |
//! | [`EntityExtractor`] | Named-entity extraction over short text |
//! | [`ResultCache`] | Optional cache of finished responses |

/// Result cache port
pub mod cache;
/// Entity extraction port
pub mod entity_extraction;
/// Search engine port
pub mod search_engine;

pub use cache::ResultCache;
pub use entity_extraction::EntityExtractor;
pub use search_engine::SearchEngineProvider;
