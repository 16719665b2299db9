//! HTTP transport
//!
//! Builds the Rocket application and binds it to the configured address.

use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{Build, Request, Response, Rocket, routes};
use sift_domain::error::Result;
use sift_infrastructure::config::ServerConfig;
use sift_infrastructure::error_ext::ErrorContext;
use tracing::info;

use crate::constants::CORS_ALLOWED_METHODS;
use crate::handlers::{health, search};
use crate::state::ServerState;

/// HTTP server for the search API
pub struct SearchServer {
    config: ServerConfig,
    state: ServerState,
}

impl SearchServer {
    /// Create a server from its configuration and handler state
    pub fn new(config: ServerConfig, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Build the Rocket application (also used by tests)
    pub fn rocket(&self) -> Rocket<Build> {
        let mut rocket = rocket::build()
            .manage(self.state.clone())
            .mount("/", routes![search::search, health::health]);

        if self.config.cors {
            rocket = rocket.attach(Cors);
        }

        rocket
    }

    /// Bind and serve until shutdown
    pub async fn start(self) -> Result<()> {
        info!(
            host = %self.config.host,
            port = self.config.port,
            engine = %self.state.search.engine_name(),
            "Search API listening"
        );

        let figment = rocket::Config::figment()
            .merge(("address", self.config.host.clone()))
            .merge(("port", self.config.port));

        self.rocket()
            .configure(figment)
            .launch()
            .await
            .context("HTTP server failed")?;

        Ok(())
    }
}

/// CORS Fairing for Rocket
///
/// Adds permissive CORS headers so a browser UI on another origin can call
/// the API.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS Headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            CORS_ALLOWED_METHODS,
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}
