//! Provider Registry System
//!
//! Engine adapters and entity extractors register themselves at link time
//! through `linkme` distributed slices and are resolved by the name given in
//! configuration.
//!
//! ```text
//! sift-providers:       #[linkme::distributed_slice(SEARCH_ENGINE_PROVIDERS)]
//!                       static ENTRY: SearchEngineProviderEntry = ...
//!                                   ↓
//! sift-application:     pub static SEARCH_ENGINE_PROVIDERS: [Entry] = [..]
//!                                   ↓
//! sift-infrastructure:  resolve_search_engine(&config)  // "elasticsearch" → adapter
//! ```
//!
//! The binary must link `sift-providers` (an `extern crate` is enough) or
//! the slices stay empty.

pub mod entity_extractor;
pub mod search_engine;

pub use entity_extractor::{
    ENTITY_EXTRACTORS, EntityExtractorConfig, EntityExtractorEntry, list_entity_extractors,
    resolve_entity_extractor,
};
pub use search_engine::{
    SEARCH_ENGINE_PROVIDERS, SearchEngineProviderConfig, SearchEngineProviderEntry,
    list_search_engines, resolve_search_engine,
};
