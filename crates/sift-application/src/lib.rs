//! Application Layer - Sift
//!
//! Implements the ranking and aggregation pipeline that sits between the
//! HTTP surface and the external document-search engine.
//!
//! ## Architecture
//!
//! The application layer:
//! - Contains the search use case ([`use_cases::SearchServiceImpl`])
//! - Implements the per-request pipeline stages as pure domain services
//! - Declares the provider registries that adapters plug into
//! - Has no dependencies on infrastructure or external frameworks
//!
//! ## Pipeline
//!
//! ```text
//! normalize → engine call → transform → dedupe → entities (top N) → score → suggest
//! ```
//!
//! Every stage except the engine call is synchronous, deterministic and
//! free of shared state.

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
