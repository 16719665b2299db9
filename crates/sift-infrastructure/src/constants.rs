//! Infrastructure constants

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "SIFT";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "sift.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "sift";

// ============================================================================
// SERVER
// ============================================================================

/// Default bind address
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// ============================================================================
// PROVIDERS
// ============================================================================

/// Default search engine provider
pub const DEFAULT_ENGINE_PROVIDER: &str = "elasticsearch";

/// Default entity extractor
pub const DEFAULT_ENTITY_EXTRACTOR: &str = "heuristic";

/// Upper bound for the engine call timeout
pub const MAX_ENGINE_TIMEOUT_MS: u64 = 10_000;

// ============================================================================
// CACHE
// ============================================================================

/// Default cache time-to-live in seconds
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60;

/// Default number of cached responses
pub const DEFAULT_CACHE_CAPACITY: u64 = 1_000;

// ============================================================================
// LOGGING
// ============================================================================

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "SIFT_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File stem used when the log file path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "sift";
