use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{EngineResponse, SearchRequest};

/// External Document-Search Engine Interface
///
/// One call per inbound search. The implementation owns query construction
/// for its engine (field weights, fuzziness, function scoring, highlighting,
/// pagination) and parses the answer into [`EngineResponse`] without
/// failing on missing or mistyped document fields.
///
/// Implementations must bound the call with a timeout and report both
/// timeouts and non-success answers as upstream errors.
///
/// # Example
///
/// ```ignore
/// let engine: Arc<dyn SearchEngineProvider> = resolve_search_engine(&config)?;
/// let response = engine.search(&request).await?;
/// println!("{} of {} hits", response.hits.len(), response.total);
/// ```
#[async_trait]
pub trait SearchEngineProvider: Send + Sync {
    /// Run the query described by `request` and return one page of raw hits
    async fn search(&self, request: &SearchRequest) -> Result<EngineResponse>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation provided)
    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
