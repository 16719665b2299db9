//! Domain Port Interfaces
//!
//! Boundary contracts between the ranking core and its collaborators.
//! Implementations live in `sift-providers` and `sift-infrastructure` and
//! are injected at bootstrap.
//!
//! - **providers/** - External capabilities (search engine, entity extraction, result cache)

/// External provider ports
pub mod providers;

pub use providers::{EntityExtractor, ResultCache, SearchEngineProvider};
