//! # Sift - Provider Implementations
//!
//! Every user-selectable adapter behind a `sift-domain` port. Adapters
//! register themselves in the `sift-application` registries, so linking
//! this crate is enough to make them resolvable by name.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Search engine | `SearchEngineProvider` | Elasticsearch, Null |
//! | Entities | `EntityExtractor` | Heuristic, Null |
//! | Result cache | `ResultCache` | Moka |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! sift-providers = { version = "0.1", default-features = false, features = ["engine-elasticsearch"] }
//! ```

pub use sift_domain::error::{Error, Result};
pub use sift_domain::ports::providers::{EntityExtractor, ResultCache, SearchEngineProvider};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Search engine provider implementations
pub mod search_engine;

/// Entity extractor implementations
pub mod entity;

/// Result cache implementations
#[cfg(feature = "cache-moka")]
pub mod cache;
