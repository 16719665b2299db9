//! Server initialization
//!
//! Resolves providers from the configuration, then serves HTTP.

use sift_domain::error::Result;
use sift_infrastructure::bootstrap::AppContext;
use sift_infrastructure::config::AppConfig;
use tracing::info;

use crate::state::ServerState;
use crate::transport::http::SearchServer;

/// Run the search API with an already loaded configuration
///
/// Logging is expected to be initialized by the caller.
pub async fn run_server(config: AppConfig) -> Result<()> {
    let context = AppContext::build(config)?;
    info!(
        engine = %context.search_service().engine_name(),
        entities = %context.config().entities.provider,
        "Search service initialized"
    );

    let server = SearchServer::new(context.config().server.clone(), ServerState::from(&context));
    server.start().await
}
