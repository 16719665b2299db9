//! Application Ports
//!
//! - [`services`]: the interface the HTTP surface depends on
//! - [`registry`]: name-based provider registries filled at link time

pub mod registry;
pub mod services;

pub use services::SearchServiceInterface;
