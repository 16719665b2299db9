//! Moka in-memory result cache
//!
//! Stores finished, successful envelopes keyed on the full normalized
//! request. Entries expire after a fixed time-to-live.
//!
//! ## Example
//!
//! ```ignore
//! use sift_providers::cache::MokaResultCache;
//! use std::time::Duration;
//!
//! let cache = MokaResultCache::with_config(1000, Duration::from_secs(60));
//! ```

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use sift_domain::ports::providers::ResultCache;
use sift_domain::value_objects::{SearchEnvelope, SearchRequest};

use crate::constants::{CACHE_DEFAULT_CAPACITY, CACHE_DEFAULT_TTL_SECS};

/// Moka-based response cache
#[derive(Clone)]
pub struct MokaResultCache {
    cache: Cache<SearchRequest, SearchEnvelope>,
    capacity: u64,
}

impl Default for MokaResultCache {
    fn default() -> Self {
        Self::with_config(
            CACHE_DEFAULT_CAPACITY,
            Duration::from_secs(CACHE_DEFAULT_TTL_SECS),
        )
    }
}

impl MokaResultCache {
    /// Create a cache holding at most `capacity` responses for `time_to_live`
    pub fn with_config(capacity: u64, time_to_live: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(time_to_live)
            .build();

        Self { cache, capacity }
    }

    /// Maximum number of cached responses
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Approximate number of cached responses
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Flush pending maintenance so counts are current
    pub async fn sync(&self) {
        self.cache.run_pending_tasks().await;
    }
}

#[async_trait]
impl ResultCache for MokaResultCache {
    async fn get(&self, request: &SearchRequest) -> Option<SearchEnvelope> {
        self.cache.get(request).await
    }

    async fn insert(&self, request: SearchRequest, envelope: SearchEnvelope) {
        if envelope.is_failure() {
            return;
        }
        self.cache.insert(request, envelope).await;
    }
}
