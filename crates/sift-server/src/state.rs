//! Shared handler state

use std::sync::Arc;

use sift_application::ports::services::SearchServiceInterface;
use sift_infrastructure::bootstrap::AppContext;

/// State managed by Rocket and handed to every handler
#[derive(Clone)]
pub struct ServerState {
    /// Search use case
    pub search: Arc<dyn SearchServiceInterface>,
}

impl ServerState {
    /// Wrap a search service
    pub fn new(search: Arc<dyn SearchServiceInterface>) -> Self {
        Self { search }
    }
}

impl From<&AppContext> for ServerState {
    fn from(context: &AppContext) -> Self {
        Self::new(context.search_service())
    }
}
