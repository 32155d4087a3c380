//! Primer - a compiled-in documentation site for front-end fundamentals.

#![allow(dead_code)]

mod cli;
mod config;
mod content;
mod core;
mod embed;
mod generator;
mod logger;
mod registry;
mod render;
mod topics;
mod utils;

use std::sync::Arc;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SiteConfig, init_config};

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = init_config(SiteConfig::load(&cli)?);

    // The registry is built once here and passed down explicitly; resolution
    // never consults ambient state
    let registry = topics::site_registry()?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&registry, &config),
        Commands::Serve { .. } => serve(registry, &config),
        Commands::Query { args } => cli::query::run_query(args, &registry),
    }
}

/// Bind the development server and block on the request loop.
fn serve(registry: registry::Registry, config: &SiteConfig) -> Result<()> {
    let bound = cli::serve::bind_server(config)?;
    bound.run(Arc::new(registry))
}
