use async_trait::async_trait;

use crate::value_objects::{SearchEnvelope, SearchRequest};

/// Finished-Response Cache Interface
///
/// Keyed strictly on the normalized [`SearchRequest`] (query, page, size,
/// language, cursor and kind), so one query can never be answered with
/// another query's results. Only successful envelopes are stored.
#[async_trait]
pub trait ResultCache: Send + Sync {
    /// Look up a cached response
    async fn get(&self, request: &SearchRequest) -> Option<SearchEnvelope>;

    /// Store a successful response
    async fn insert(&self, request: SearchRequest, envelope: SearchEnvelope);
}
