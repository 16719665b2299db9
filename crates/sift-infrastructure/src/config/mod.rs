//! Configuration
//!
//! Figment-based loading: compiled defaults, then an optional TOML file,
//! then `SIFT_*` environment variables (`__` separates nested keys).

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, validate_app_config};
pub use types::{
    AppConfig, CacheConfig, EngineConfig, EntitiesConfig, LoggingConfig, ServerConfig,
};
