//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "public"           # Output directory, relative to project root
//!
//! [build.sitemap]
//! enable = true
//! path = "sitemap.xml"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Build settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Output directory (relative paths resolve against the project root).
    pub output: PathBuf,

    /// Sitemap generation settings.
    pub sitemap: SitemapConfig,

    /// Clean output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            output: PathBuf::from("public"),
            sitemap: SitemapConfig::default(),
            clean: false,
        }
    }
}

/// `[build.sitemap]` settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Generate sitemap.xml during builds.
    pub enable: bool,

    /// Sitemap filename, relative to the output directory.
    pub path: PathBuf,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: PathBuf::from("sitemap.xml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_build_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(config.build.sitemap.enable);
        assert_eq!(config.build.sitemap.path, PathBuf::from("sitemap.xml"));
        assert!(!config.build.clean);
    }

    #[test]
    fn test_build_output_override() {
        let config = test_parse_config("[build]\noutput = \"dist\"");
        assert_eq!(config.build.output, PathBuf::from("dist"));
    }

    #[test]
    fn test_sitemap_disabled() {
        let config = test_parse_config("[build.sitemap]\nenable = false");
        assert!(!config.build.sitemap.enable);
    }

    #[test]
    fn test_clean_not_deserialized() {
        // `clean` is a CLI flag; a config file cannot set it
        let (config, ignored) =
            crate::config::SiteConfig::parse_with_ignored("[build]\nclean = true").unwrap();
        assert!(!config.build.clean);
        assert!(ignored.iter().any(|f| f.contains("clean")));
    }
}
