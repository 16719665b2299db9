//! Configuration loader
//!
//! Sources merge in order, later ones overriding earlier:
//! 1. `AppConfig::default()`
//! 2. A TOML file (explicit path, or the first default location found)
//! 3. `SIFT_*` environment variables, e.g. `SIFT_ENGINE__URL`

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use sift_domain::error::{Error, Result};

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
    MAX_ENGINE_TIMEOUT_MS,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader with the `SIFT` prefix and default file discovery
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Use this file instead of searching the default locations
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Override the environment variable prefix (without trailing `_`)
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load, merge and validate the configuration
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        match &self.config_path {
            Some(path) if path.exists() => {
                figment = figment.merge(Toml::file(path));
                log_config_loaded(path, true);
            }
            Some(path) => log_config_loaded(path, false),
            None => {
                if let Some(path) = Self::find_default_config_path() {
                    figment = figment.merge(Toml::file(&path));
                    log_config_loaded(&path, true);
                }
            }
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&config)?;
        Ok(config)
    }

    /// Render a configuration as pretty TOML
    pub fn to_toml_string(config: &AppConfig) -> Result<String> {
        toml::to_string_pretty(config).context("Failed to serialize config to TOML")
    }

    /// First existing file among the default locations
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let mut candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
        ];
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
        }
        if let Some(home) = dirs::home_dir() {
            candidates.push(
                home.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME),
            );
        }

        candidates.into_iter().find(|path| path.exists())
    }
}

/// Validate every section of the application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_engine_config(config)?;
    validate_search_config(config)?;
    validate_cache_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::config("server.port cannot be 0"));
    }
    if config.server.host.trim().is_empty() {
        return Err(Error::config("server.host cannot be empty"));
    }
    Ok(())
}

fn validate_engine_config(config: &AppConfig) -> Result<()> {
    let engine = &config.engine;
    if engine.provider.trim().is_empty() {
        return Err(Error::config("engine.provider cannot be empty"));
    }
    if engine.timeout_ms == 0 || engine.timeout_ms > MAX_ENGINE_TIMEOUT_MS {
        return Err(Error::config(format!(
            "engine.timeout_ms must be between 1 and {MAX_ENGINE_TIMEOUT_MS}"
        )));
    }
    if engine.username.is_some() != engine.password.is_some() {
        return Err(Error::config(
            "engine.username and engine.password must be set together",
        ));
    }
    if config.entities.provider.trim().is_empty() {
        return Err(Error::config("entities.provider cannot be empty"));
    }
    Ok(())
}

fn validate_search_config(config: &AppConfig) -> Result<()> {
    let search = &config.search;
    if search.max_page_size == 0 {
        return Err(Error::config("search.max_page_size must be at least 1"));
    }
    if search.default_page_size == 0 || search.default_page_size > search.max_page_size {
        return Err(Error::config(
            "search.default_page_size must be between 1 and search.max_page_size",
        ));
    }
    if !(0.0..=1.0).contains(&search.similarity_threshold) {
        return Err(Error::config(
            "search.similarity_threshold must be between 0 and 1",
        ));
    }
    if search.fallback_language.trim().is_empty() {
        return Err(Error::config("search.fallback_language cannot be empty"));
    }
    Ok(())
}

fn validate_cache_config(config: &AppConfig) -> Result<()> {
    if config.cache.enabled {
        if config.cache.ttl_secs == 0 {
            return Err(Error::config(
                "cache.ttl_secs must be greater than 0 when the cache is enabled",
            ));
        }
        if config.cache.capacity == 0 {
            return Err(Error::config(
                "cache.capacity must be greater than 0 when the cache is enabled",
            ));
        }
    }
    Ok(())
}
