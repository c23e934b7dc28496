//! Stockrs - a desktop client for the hardware inventory backend
//!
//! Built with GTK4 and Relm4.

mod app;
mod components;
mod config;

use anyhow::Result;
use clap::Parser;
use relm4::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Stockrs - a desktop client for the hardware inventory backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Backend API base URL (overrides config)
    #[arg(short, long, value_name = "URL")]
    api_url: Option<String>,
}

fn main() -> Result<()> {
    // Parse CLI arguments BEFORE initializing logging/GTK
    // This consumes the args so GTK won't see them
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("stockrs=info".parse()?))
        .init();

    tracing::info!("Starting stockrs");

    // Load configuration
    let mut config = config::Config::load(args.config)?;

    // Override API URL if provided via CLI
    if let Some(api_url) = args.api_url {
        tracing::info!("Overriding API URL from CLI: {}", api_url);
        config.api_url = api_url;
    }

    tracing::info!("API URL: {}", config.api_url);

    // Run GTK application with empty args to prevent GTK from seeing our CLI args
    let app = RelmApp::new("io.github.stockrs");
    // Set empty args so GTK doesn't complain about unknown options
    app.with_args(Vec::<String>::new()).run::<app::App>(config);

    Ok(())
}
