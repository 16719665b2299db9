//! Application bootstrap
//!
//! Turns a validated [`AppConfig`] into a ready search service: providers
//! are resolved by name from the linkme registries, the optional response
//! cache is attached and the engine budget is applied.

use std::sync::Arc;
use std::time::Duration;

use sift_application::ports::registry::{resolve_entity_extractor, resolve_search_engine};
use sift_application::ports::services::SearchServiceInterface;
use sift_application::use_cases::SearchServiceImpl;
use sift_domain::error::{Error, Result};
use sift_providers::cache::MokaResultCache;
use tracing::info;

use crate::config::AppConfig;

/// Everything the server needs at runtime
#[derive(Clone)]
pub struct AppContext {
    config: AppConfig,
    search_service: Arc<dyn SearchServiceInterface>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("engine", &self.search_service.engine_name())
            .field("config", &self.config)
            .finish()
    }
}

impl AppContext {
    /// Resolve providers and assemble the search service
    pub fn build(config: AppConfig) -> Result<Self> {
        let search_service = Arc::new(build_search_service(&config)?);
        Ok(Self {
            config,
            search_service,
        })
    }

    /// Wrap an already-built service (tests, embedding)
    pub fn with_service(config: AppConfig, search_service: Arc<dyn SearchServiceInterface>) -> Self {
        Self {
            config,
            search_service,
        }
    }

    /// Effective configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Shared search service
    pub fn search_service(&self) -> Arc<dyn SearchServiceInterface> {
        Arc::clone(&self.search_service)
    }
}

/// Build the search service described by `config`
pub fn build_search_service(config: &AppConfig) -> Result<SearchServiceImpl> {
    let engine = resolve_search_engine(&config.engine.to_provider_config()).map_err(Error::config)?;
    let extractor =
        resolve_entity_extractor(&config.entities.to_provider_config()).map_err(Error::config)?;

    info!(
        engine = %engine.provider_name(),
        extractor = %extractor.provider_name(),
        timeout_ms = config.engine.timeout_ms,
        cache = config.cache.enabled,
        "Search providers resolved"
    );

    let mut service = SearchServiceImpl::new(
        engine,
        extractor,
        config.search.clone(),
        config.scoring,
    )
    .with_engine_timeout(Duration::from_millis(config.engine.timeout_ms));

    if config.cache.enabled {
        let cache = MokaResultCache::with_config(
            config.cache.capacity,
            Duration::from_secs(config.cache.ttl_secs),
        );
        service = service.with_cache(Arc::new(cache));
    }

    Ok(service)
}
