//! # Sift
//!
//! Ranking and aggregation front end for an external document-search
//! engine. Sift forwards a normalized query to the engine, then re-ranks,
//! deduplicates and enriches the hits before answering over HTTP.
//!
//! ## Example
//!
//! ```ignore
//! use sift::domain::{SearchKind, SearchRequest};
//!
//! let request = SearchRequest::new("rust async", 0, 20, "en", None, SearchKind::Web);
//! assert_eq!(request.offset(), 0);
//! ```
//!
//! ## Layers
//!
//! - `domain` - value objects, ports and the error type
//! - `application` - the ranking pipeline and provider registries
//! - `providers` - Elasticsearch client, entity extractors, result cache
//! - `infrastructure` - configuration, logging, bootstrap
//! - `server` - Rocket HTTP surface

/// Domain layer - value objects, ports and errors
pub mod domain {
    pub use sift_domain::*;
}

/// Application layer - ranking pipeline and registries
pub mod application {
    pub use sift_application::*;
}

/// Provider implementations
pub mod providers {
    pub use sift_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
pub mod infrastructure {
    pub use sift_infrastructure::*;
}

/// Server layer - HTTP routes and startup
pub mod server {
    pub use sift_server::*;
}

pub use sift_domain::{Error, Result};
pub use sift_server::run_server;
