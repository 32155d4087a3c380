//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Front-End Primer"
//! description = "A working reference for front-end fundamentals"
//! url = "https://primer.example.com"
//! ```

use serde::{Deserialize, Serialize};

/// Site metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Site title, shown in the header and every `<title>`.
    pub title: String,

    /// One-line site description.
    pub description: String,

    /// Base URL (e.g. `https://primer.example.com`).
    /// Required for sitemap generation; serve mode fills in a local default.
    pub url: Option<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Primer".to_string(),
            description: String::new(),
            url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_site_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.title, "Primer");
        assert!(config.site.description.is_empty());
        assert!(config.site.url.is_none());
    }

    #[test]
    fn test_site_partial_override() {
        let config = test_parse_config("[site]\ntitle = \"Notes\"");
        assert_eq!(config.site.title, "Notes");
        assert!(config.site.url.is_none());
    }
}
