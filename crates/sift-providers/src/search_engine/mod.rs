//! Search engine provider implementations
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`ElasticsearchProvider`] | Elasticsearch / OpenSearch `_search` API over HTTP |
//! | [`NullSearchEngine`] | Always answers with no hits |

#[cfg(feature = "engine-elasticsearch")]
pub mod elasticsearch;
pub mod null;
#[cfg(feature = "engine-elasticsearch")]
pub mod parse;
#[cfg(feature = "engine-elasticsearch")]
pub mod query;

#[cfg(feature = "engine-elasticsearch")]
pub use elasticsearch::ElasticsearchProvider;
pub use null::NullSearchEngine;
#[cfg(feature = "engine-elasticsearch")]
pub use query::QueryBuilder;
