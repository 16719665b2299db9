//! Configuration sections

mod app;
mod cache;
mod engine;
mod logging;
mod server;

pub use app::AppConfig;
pub use cache::CacheConfig;
pub use engine::{EngineConfig, EntitiesConfig};
pub use logging::LoggingConfig;
pub use server::ServerConfig;
