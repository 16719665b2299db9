//! Use Cases
//!
//! Application services that orchestrate the domain services and ports.

pub mod search_service;

pub use search_service::SearchServiceImpl;
