//! Sift server binary
//!
//! Loads configuration, applies command line overrides, initializes logging
//! and serves the search API.

// Force-link sift-providers so its linkme registrations are included
extern crate sift_providers;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sift_application::ports::registry::{list_entity_extractors, list_search_engines};
use sift_infrastructure::config::{AppConfig, ConfigLoader, validate_app_config};
use sift_infrastructure::logging::init_logging;

/// Command line interface for Sift
#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(about = "Sift - ranking and aggregation front end for a document-search engine")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Bind address (overrides `server.host`)
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port (overrides `server.port`)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Search engine base URL (overrides `engine.url`)
    #[arg(long)]
    pub engine_url: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// List registered providers and exit
    #[arg(long)]
    pub list_providers: bool,
}

impl Cli {
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(url) = &self.engine_url {
            config.engine.url = Some(url.clone());
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.list_providers {
        print_providers();
        return Ok(());
    }

    let loader = match &cli.config {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let mut config = loader.load().context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);
    validate_app_config(&config).context("Invalid command line override")?;

    if cli.print_config {
        print!("{}", ConfigLoader::to_toml_string(&config)?);
        return Ok(());
    }

    init_logging(&config.logging)?;
    sift_server::run_server(config).await?;
    Ok(())
}

fn print_providers() {
    println!("Search engines:");
    for (name, description) in list_search_engines() {
        println!("  {name:<16} {description}");
    }
    println!("Entity extractors:");
    for (name, description) in list_entity_extractors() {
        println!("  {name:<16} {description}");
    }
}
