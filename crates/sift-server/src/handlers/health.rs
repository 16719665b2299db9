//! `GET /health`

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, get};
use serde::Serialize;
use tracing::warn;

use crate::constants::{HEALTH_STATUS_OK, HEALTH_STATUS_UNAVAILABLE};
use crate::state::ServerState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` or `unavailable`
    pub status: &'static str,
    /// Configured engine provider
    pub engine: String,
    /// Failure detail when unavailable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Report whether the engine answers within its budget
#[get("/health")]
pub async fn health(state: &State<ServerState>) -> (Status, Json<HealthResponse>) {
    let engine = state.search.engine_name().to_string();

    match state.search.health().await {
        Ok(()) => (
            Status::Ok,
            Json(HealthResponse {
                status: HEALTH_STATUS_OK,
                engine,
                error: None,
            }),
        ),
        Err(e) => {
            warn!(engine = %engine, error = %e, "Engine health check failed");
            (
                Status::ServiceUnavailable,
                Json(HealthResponse {
                    status: HEALTH_STATUS_UNAVAILABLE,
                    engine,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}
