//! Sitemap generation.
//!
//! Generates a sitemap.xml file listing all pages for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/hooks/</loc>
//!   </url>
//! </urlset>
//! ```

use crate::{config::SiteConfig, log, registry::Registry};
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build sitemap if enabled and a base URL is configured.
pub fn build_sitemap(registry: &Registry, config: &SiteConfig) -> Result<()> {
    if !config.build.sitemap.enable {
        return Ok(());
    }

    let Some(base_url) = config.base_url() else {
        log!("sitemap"; "skipped: no site url configured");
        return Ok(());
    };

    let sitemap = Sitemap::build(registry, base_url);
    sitemap.write(config)
}

struct Sitemap {
    urls: Vec<String>,
}

impl Sitemap {
    fn build(registry: &Registry, base_url: &str) -> Self {
        let urls = registry
            .topics()
            .map(|topic| format!("{}{}", base_url, topic.route.to_encoded()))
            .collect();

        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for loc in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&loc));
            xml.push_str("</loc>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = config.build.output.join(&config.build.sitemap.path);
        let xml = self.into_xml();

        fs::write(&sitemap_path, &xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{}", sitemap_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Topic;
    use crate::registry::Registry;

    fn make_registry() -> Registry {
        Registry::new(
            vec![
                Topic::new("/", "Topics", "lead"),
                Topic::new("/hooks/", "Hooks", "lead"),
                Topic::new("/state/lift-state/", "Lifting State Up", "lead"),
            ],
            Topic::new("/not-found/", "Page Not Found", ""),
        )
        .unwrap()
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_sitemap_empty() {
        let sitemap = Sitemap { urls: vec![] };
        let xml = sitemap.into_xml();

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_lists_registered_topics() {
        let sitemap = Sitemap::build(&make_registry(), "https://example.com");
        let xml = sitemap.into_xml();

        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<loc>https://example.com/hooks/</loc>"));
        assert!(xml.contains("<loc>https://example.com/state/lift-state/</loc>"));
        assert_eq!(xml.matches("<url>").count(), 3);
        assert_eq!(xml.matches("</url>").count(), 3);
    }

    #[test]
    fn test_sitemap_excludes_fallback() {
        let sitemap = Sitemap::build(&make_registry(), "https://example.com");
        let xml = sitemap.into_xml();
        assert!(!xml.contains("/not-found/"));
    }

    #[test]
    fn test_sitemap_escapes_special_chars() {
        let registry = Registry::new(
            vec![Topic::new("/a&b/", "Mixed", "")],
            Topic::new("/not-found/", "Page Not Found", ""),
        )
        .unwrap();

        let sitemap = Sitemap::build(&registry, "https://example.com");
        let xml = sitemap.into_xml();

        // Route segments are percent-encoded before XML escaping
        assert!(xml.contains("<loc>https://example.com/a%26b/</loc>"));
    }

    #[test]
    fn test_sitemap_xml_structure() {
        let sitemap = Sitemap::build(&make_registry(), "https://example.com");
        let xml = sitemap.into_xml();

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].starts_with("<urlset"));
        assert!(lines.last().unwrap().trim() == "</urlset>");
    }
}
