//! Search Service Use Case
//!
//! Runs one inbound search end to end:
//!
//! ```text
//! normalize → cache → engine (bounded) → transform → dedupe
//!           → entities (top N) → score → suggest → envelope
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sift_domain::constants::ENGINE_TIMEOUT_MS;
use sift_domain::error::{Error, Result};
use sift_domain::ports::providers::{EntityExtractor, ResultCache, SearchEngineProvider};
use sift_domain::value_objects::{
    EngineResponse, ImageSearchResponse, PageCursor, RawHit, ScoringWeights,
    SearchEnvelope, SearchKind, SearchLimits, SearchParams, SearchRequest, SearchResponse,
};
use tracing::{debug, error, info};

use crate::domain_services::{
    CompositeScorer, EntityEnricher, NormalizedQuery, QueryNormalizer, ResultTransformer,
    SuggestionGenerator, deduplicate, flatten_images,
};
use crate::ports::services::SearchServiceInterface;

/// Search service implementation
///
/// Holds no per-request state. The engine client is injected and owned by
/// the caller; every engine call is bounded by `engine_timeout`.
pub struct SearchServiceImpl {
    engine: Arc<dyn SearchEngineProvider>,
    cache: Option<Arc<dyn ResultCache>>,
    normalizer: QueryNormalizer,
    transformer: ResultTransformer,
    enricher: EntityEnricher,
    scorer: CompositeScorer,
    suggester: SuggestionGenerator,
    sort_by_composite: bool,
    engine_timeout: Duration,
}

impl SearchServiceImpl {
    /// Create a new search service with injected providers
    pub fn new(
        engine: Arc<dyn SearchEngineProvider>,
        extractor: Arc<dyn EntityExtractor>,
        limits: SearchLimits,
        weights: ScoringWeights,
    ) -> Self {
        Self {
            engine,
            cache: None,
            transformer: ResultTransformer::new(limits.snippet_max_chars),
            enricher: EntityEnricher::new(extractor, limits.entity_top_n),
            scorer: CompositeScorer::new(weights),
            suggester: SuggestionGenerator::new(
                limits.max_suggestions,
                limits.similarity_threshold,
            ),
            sort_by_composite: limits.sort_by_composite,
            normalizer: QueryNormalizer::new(limits),
            engine_timeout: Duration::from_millis(ENGINE_TIMEOUT_MS),
        }
    }

    /// Attach a result cache
    pub fn with_cache(mut self, cache: Arc<dyn ResultCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Override the engine call budget
    pub fn with_engine_timeout(mut self, timeout: Duration) -> Self {
        self.engine_timeout = timeout;
        self
    }

    /// Run a search with an explicit "now" used for freshness
    pub async fn search_at(
        &self,
        params: SearchParams,
        now: DateTime<Utc>,
    ) -> Result<SearchEnvelope> {
        let request = match self.normalizer.normalize(&params) {
            NormalizedQuery::Search(request) => request,
            NormalizedQuery::TooShort { page, size } => {
                debug!(page, size, "query too short, skipping engine call");
                return Ok(SearchResponse::empty(page, size).into());
            }
            NormalizedQuery::UnknownKind { page, size } => {
                debug!(kind = ?params.kind, "unknown search type, returning empty result");
                return Ok(SearchResponse::empty(page, size).into());
            }
        };

        if let Some(cache) = &self.cache
            && let Some(cached) = cache.get(&request).await
        {
            debug!(query_len = request.query().len(), "serving cached response");
            return Ok(cached);
        }

        let started = Instant::now();
        let response = self.call_engine(&request).await?;
        let elapsed_ms = started.elapsed().as_millis();

        let envelope = match request.kind() {
            SearchKind::Web => self.rank(&request, response, now).into(),
            SearchKind::Image => Self::images(&request, &response).into(),
        };

        info!(
            engine = self.engine.provider_name(),
            kind = request.kind().as_str(),
            query_len = request.query().len(),
            page = request.page(),
            size = request.page_size(),
            hits = hit_count(&envelope),
            elapsed_ms,
            "search completed"
        );

        if let Some(cache) = &self.cache {
            cache.insert(request, envelope.clone()).await;
        }

        Ok(envelope)
    }

    async fn call_engine(&self, request: &SearchRequest) -> Result<EngineResponse> {
        let engine = self.engine.provider_name();
        match tokio::time::timeout(self.engine_timeout, self.engine.search(request)).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(e)) => {
                error!(engine, error = %e, "search engine call failed");
                Err(if e.is_upstream() {
                    e
                } else {
                    Error::upstream_with_source(format!("{engine} request failed"), e)
                })
            }
            Err(_) => {
                let timeout_ms = self.timeout_ms();
                error!(engine, timeout_ms, "search engine call timed out");
                Err(Error::timeout(timeout_ms))
            }
        }
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.engine_timeout.as_millis()).unwrap_or(u64::MAX)
    }

    fn rank(
        &self,
        request: &SearchRequest,
        response: EngineResponse,
        now: DateTime<Utc>,
    ) -> SearchResponse {
        let cursor = next_cursor(&response.hits, request.page_size());

        let mut hits = deduplicate(self.transformer.transform_all(&response.hits));
        let enriched = self.enricher.enrich(&mut hits);
        self.scorer.score_all(&mut hits, request.query(), now);

        if self.sort_by_composite {
            hits.sort_by(|a, b| b.composite_score.total_cmp(&a.composite_score));
        }

        let suggestions = self.suggester.suggest(request.query(), &hits);
        debug!(
            extractor = self.enricher.extractor_name(),
            enriched,
            suggestions = suggestions.len(),
            "ranked web results"
        );

        let size = request.page_size();
        SearchResponse {
            hits,
            suggestions,
            total: response.total,
            page: Some(request.page()),
            size: Some(size),
            total_pages: Some(response.total.div_ceil(u64::from(size.max(1)))),
            cursor,
            error: None,
        }
    }

    fn images(request: &SearchRequest, response: &EngineResponse) -> ImageSearchResponse {
        let hits = flatten_images(&response.hits);
        ImageSearchResponse {
            total: hits.len() as u64,
            hits,
            page: request.page(),
            size: request.page_size(),
        }
    }
}

/// Continuation cursor from the last raw hit of a full page
fn next_cursor(hits: &[RawHit], page_size: u32) -> Option<String> {
    let full = u32::try_from(hits.len()).is_ok_and(|len| len >= page_size);
    if !full {
        return None;
    }
    hits.last().and_then(|last| PageCursor::encode(&last.sort))
}

fn hit_count(envelope: &SearchEnvelope) -> usize {
    match envelope {
        SearchEnvelope::Web(response) => response.hits.len(),
        SearchEnvelope::Image(response) => response.hits.len(),
    }
}

#[async_trait]
impl SearchServiceInterface for SearchServiceImpl {
    async fn search(&self, params: SearchParams) -> Result<SearchEnvelope> {
        self.search_at(params, Utc::now()).await
    }

    async fn health(&self) -> Result<()> {
        match tokio::time::timeout(self.engine_timeout, self.engine.health_check()).await {
            Ok(result) => result,
            Err(_) => Err(Error::timeout(self.timeout_ms())),
        }
    }

    fn engine_name(&self) -> &str {
        self.engine.provider_name()
    }
}
