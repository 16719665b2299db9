//! # Sift - Infrastructure Layer
//!
//! Cross-cutting technical concerns:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration (defaults → TOML → `SIFT_*` env) with validation |
//! | [`logging`] | `tracing` subscriber setup (plain or JSON, optional daily file) |
//! | [`error_ext`] | Context helpers that turn foreign errors into domain errors |
//! | [`bootstrap`] | Resolves providers by name and assembles the search service |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::AppContext;
pub use config::{AppConfig, ConfigLoader};
