//! # Sift Server
//!
//! HTTP surface of the search front end, built on Rocket.
//!
//! | Route | Description |
//! |-------|-------------|
//! | `GET /search?q&page&size&lang&cursor&type` | Ranked web results or flattened image results |
//! | `GET /health` | Engine reachability |
//!
//! The handlers only translate between HTTP and the
//! [`SearchServiceInterface`](sift_application::SearchServiceInterface);
//! every ranking decision lives in `sift-application`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sift_infrastructure::config::AppConfig;
//! use sift_server::run_server;
//!
//! #[rocket::main]
//! async fn main() -> sift_domain::Result<()> {
//!     run_server(AppConfig::default()).await
//! }
//! ```

pub mod constants;
pub mod handlers;
pub mod init;
pub mod state;
pub mod transport;

pub use init::run_server;
pub use state::ServerState;
pub use transport::http::{Cors, SearchServer};
