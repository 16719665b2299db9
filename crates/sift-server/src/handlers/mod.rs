//! Route handlers

pub mod health;
pub mod search;

pub use health::HealthResponse;
pub use search::{AcceptLanguage, SearchQuery};
