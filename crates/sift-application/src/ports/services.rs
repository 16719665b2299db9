//! Application Service Interfaces

use async_trait::async_trait;
use sift_domain::error::Result;
use sift_domain::value_objects::{SearchEnvelope, SearchParams};

/// Search Service Interface
///
/// Runs one inbound search through the whole pipeline. Validation
/// short-circuits come back as `Ok` with an empty envelope; only upstream
/// failures are reported as errors, and the caller turns those into the
/// failure envelope.
#[async_trait]
pub trait SearchServiceInterface: Send + Sync {
    /// Search with raw caller parameters
    async fn search(&self, params: SearchParams) -> Result<SearchEnvelope>;

    /// Check that the engine is reachable
    async fn health(&self) -> Result<()>;

    /// Name of the engine provider in use
    fn engine_name(&self) -> &str;
}
