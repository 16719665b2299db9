//! Elasticsearch Search Engine Provider
//!
//! Implements the `SearchEngineProvider` port against the Elasticsearch
//! (or OpenSearch) `_search` API. Receives its HTTP client via constructor
//! injection; the client is never a process-wide global.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use sift_domain::error::{Error, Result};
use sift_domain::ports::providers::SearchEngineProvider;
use sift_domain::value_objects::{EngineResponse, SearchRequest};
use tracing::debug;

use super::parse::parse_search_response;
use super::query::QueryBuilder;
use crate::constants::CONTENT_TYPE_JSON;
use crate::utils::{HttpResponseUtils, JsonExt};

/// How requests authenticate against the cluster
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ElasticsearchAuth {
    /// No credentials
    #[default]
    None,
    /// HTTP basic auth
    Basic {
        /// User name
        username: String,
        /// Password
        password: String,
    },
    /// `Authorization: ApiKey <key>`
    ApiKey(String),
}

/// Elasticsearch search engine provider
///
/// ## Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use reqwest::Client;
/// use sift_providers::search_engine::ElasticsearchProvider;
///
/// let timeout = Duration::from_millis(1500);
/// let client = Client::builder().timeout(timeout).build().unwrap();
/// let provider = ElasticsearchProvider::new("http://localhost:9200", "pages", timeout, client);
/// ```
pub struct ElasticsearchProvider {
    base_url: String,
    index: String,
    auth: ElasticsearchAuth,
    timeout: Duration,
    http_client: Client,
    query_builder: QueryBuilder,
}

impl ElasticsearchProvider {
    /// Create a new provider
    ///
    /// # Arguments
    /// * `base_url` - Cluster URL (e.g., "http://localhost:9200")
    /// * `index` - Index or alias holding page documents
    /// * `timeout` - Per-request timeout
    /// * `http_client` - Reqwest HTTP client
    pub fn new(
        base_url: impl Into<String>,
        index: impl Into<String>,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            index: index.into(),
            auth: ElasticsearchAuth::None,
            timeout,
            http_client,
            query_builder: QueryBuilder::default(),
        }
    }

    /// Set the authentication scheme
    pub fn with_auth(mut self, auth: ElasticsearchAuth) -> Self {
        self.auth = auth;
        self
    }

    /// Replace the request builder
    pub fn with_query_builder(mut self, query_builder: QueryBuilder) -> Self {
        self.query_builder = query_builder;
        self
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            ElasticsearchAuth::None => request,
            ElasticsearchAuth::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
            ElasticsearchAuth::ApiKey(key) => {
                request.header("Authorization", format!("ApiKey {key}"))
            }
        }
    }

    fn map_send_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::timeout(u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX))
        } else if e.is_connect() {
            Error::network_with_source(format!("Cannot reach {}", self.base_url), e)
        } else {
            Error::upstream_with_source("HTTP request failed", e)
        }
    }
}

#[async_trait]
impl SearchEngineProvider for ElasticsearchProvider {
    async fn search(&self, request: &SearchRequest) -> Result<EngineResponse> {
        let body = self.query_builder.build(request);
        debug!(
            index = %self.index,
            kind = request.kind().as_str(),
            cursor = request.cursor().is_some(),
            "sending search request"
        );

        let response = self
            .authorize(
                self.http_client
                    .post(format!("{}/{}/_search", self.base_url, self.index)),
            )
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let json = HttpResponseUtils::check_and_parse(response, "Elasticsearch").await?;
        parse_search_response(&json)
    }

    fn provider_name(&self) -> &str {
        "elasticsearch"
    }

    async fn health_check(&self) -> Result<()> {
        let response = self
            .authorize(
                self.http_client
                    .get(format!("{}/_cluster/health", self.base_url)),
            )
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let json = HttpResponseUtils::check_and_parse(response, "Elasticsearch").await?;
        match json.opt_string("status").as_deref() {
            Some("red") => Err(Error::upstream("Elasticsearch cluster status is red")),
            _ => Ok(()),
        }
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use sift_application::ports::registry::{
    SEARCH_ENGINE_PROVIDERS, SearchEngineProviderConfig, SearchEngineProviderEntry,
};
use sift_domain::constants::ENGINE_TIMEOUT_MS;

use crate::constants::{
    ELASTICSEARCH_DEFAULT_INDEX, ELASTICSEARCH_DEFAULT_TIEBREAKER, ELASTICSEARCH_DEFAULT_URL,
};

/// Factory function for creating Elasticsearch provider instances.
fn elasticsearch_factory(
    config: &SearchEngineProviderConfig,
) -> std::result::Result<Arc<dyn SearchEngineProvider>, String> {
    let base_url = config
        .url
        .clone()
        .unwrap_or_else(|| ELASTICSEARCH_DEFAULT_URL.to_string());
    let index = config
        .index
        .clone()
        .unwrap_or_else(|| ELASTICSEARCH_DEFAULT_INDEX.to_string());
    let timeout = Duration::from_millis(config.timeout_ms.unwrap_or(ENGINE_TIMEOUT_MS));
    let http_client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))?;

    let auth = match (&config.api_key, &config.username) {
        (Some(key), _) => ElasticsearchAuth::ApiKey(key.clone()),
        (None, Some(username)) => ElasticsearchAuth::Basic {
            username: username.clone(),
            password: config.password.clone().unwrap_or_default(),
        },
        (None, None) => ElasticsearchAuth::None,
    };

    let query_builder = QueryBuilder::new(
        config
            .tiebreaker_field
            .as_deref()
            .unwrap_or(ELASTICSEARCH_DEFAULT_TIEBREAKER),
    )
    .with_popularity_boost(config.popularity_boost);

    Ok(Arc::new(
        ElasticsearchProvider::new(base_url, index, timeout, http_client)
            .with_auth(auth)
            .with_query_builder(query_builder),
    ))
}

#[linkme::distributed_slice(SEARCH_ENGINE_PROVIDERS)]
static ELASTICSEARCH_PROVIDER: SearchEngineProviderEntry = SearchEngineProviderEntry {
    name: "elasticsearch",
    description: "Elasticsearch / OpenSearch _search API over HTTP",
    factory: elasticsearch_factory,
};
