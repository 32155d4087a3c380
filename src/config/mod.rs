//! Site configuration management for `primer.toml`.
//!
//! # Sections
//!
//! | Section   | Purpose                                         |
//! |-----------|-------------------------------------------------|
//! | `[site]`  | Site metadata (title, description, url)         |
//! | `[build]` | Output directory and sitemap settings           |
//! | `[serve]` | Development server (port, interface)            |
//!
//! The content itself is compiled in, so a missing config file is not an
//! error: defaults apply and only presentation metadata and paths are lost.

mod error;
mod handle;
pub mod section;

pub use error::ConfigError;
pub use handle::{cfg, init_config};
pub use section::{BuildSection, ServeSection, SiteSection};

use crate::cli::{BuildArgs, Cli, Commands};
use crate::log;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing primer.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata
    pub site: SiteSection,

    /// Build settings
    pub build: BuildSection,

    /// Development server settings
    pub serve: ServeSection,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// The project root is the config file's parent directory, or the
    /// current directory when no config file exists.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| ConfigError::Io(PathBuf::from("."), e))?;
        let config_path = if cli.config.is_absolute() {
            cli.config.clone()
        } else {
            cwd.join(&cli.config)
        };

        let mut config = if config_path.is_file() {
            Self::from_path(&config_path)?
        } else {
            crate::debug!("config"; "{} not found, using defaults", cli.config.display());
            Self::default()
        };

        config.config_path = config_path;
        config.finalize(cli);
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "ignoring unknown fields in {}:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        self.root = root;
        self.normalize_paths(cli);
        self.apply_command_options(cli);
    }

    /// Normalize the output path: tilde expansion, then root-relative.
    fn normalize_paths(&mut self, cli: &Cli) {
        if let Some(output) = cli.output.as_ref() {
            self.build.output = output.clone();
        }

        let expanded =
            shellexpand::tilde(&self.build.output.to_string_lossy().into_owned()).into_owned();
        let output = PathBuf::from(expanded);
        self.build.output = if output.is_absolute() {
            output
        } else {
            self.root.join(output)
        };
    }

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => {
                self.apply_build_args(build_args, false);
            }
            Commands::Serve {
                build_args,
                interface,
                port,
            } => {
                self.apply_build_args(build_args, true);
                self.apply_serve_options(*interface, *port);
            }
            // Query command doesn't modify config
            Commands::Query { .. } => {}
        }
    }

    /// Apply build arguments from CLI.
    ///
    /// `is_serve`: If true, the sitemap defaults to disabled for local preview.
    fn apply_build_args(&mut self, args: &BuildArgs, is_serve: bool) {
        // Set verbose mode globally
        crate::logger::set_verbose(args.verbose);

        self.build.clean = args.clean;

        if let Some(ref url) = args.site_url {
            self.site.url = Some(url.clone());
        }

        if is_serve {
            // Serve: disable sitemap by default, enable only if explicitly requested
            self.build.sitemap.enable = args.sitemap.unwrap_or(false);
        } else if let Some(sitemap) = args.sitemap {
            self.build.sitemap.enable = sitemap;
        }
    }

    /// Apply serve-specific options.
    fn apply_serve_options(&mut self, interface: Option<std::net::IpAddr>, port: Option<u16>) {
        if let Some(interface) = interface {
            self.serve.interface = interface;
        }
        if let Some(port) = port {
            self.serve.port = port;
        }

        // Base URL for local development (unless overridden via --site-url)
        if self.site.url.is_none() {
            self.site.url = Some(format!("http://{}:{}", self.serve.interface, self.serve.port));
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Base site URL without a trailing slash, if configured.
    pub fn base_url(&self) -> Option<&str> {
        self.site.url.as_deref().map(|u| u.trim_end_matches('/'))
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from a TOML snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
