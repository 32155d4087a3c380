//! Embedded assets: the stylesheet and the HTML document shell.
//!
//! Both are compiled into the binary so `serve` works without any on-disk
//! build, and `build` writes them out alongside the rendered pages. The
//! stylesheet filename carries a content fingerprint for cache busting.

mod template;

pub use template::{Template, TemplateVars};

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};

use crate::utils::hash;

/// Site stylesheet, shared by every page.
pub static STYLE_CSS: &str = include_str!("styles.css");

/// Outer HTML document shell with `{{...}}` placeholders.
pub static SHELL: Template = Template::new(include_str!("shell.html"));

/// Fingerprinted stylesheet filename (e.g. `styles.a1b2c3d4.css`).
pub static STYLE_FILENAME: LazyLock<String> =
    LazyLock::new(|| format!("styles.{}.css", hash::fingerprint(STYLE_CSS)));

/// Root-relative stylesheet href for page heads.
pub fn stylesheet_href() -> String {
    format!("/{}", *STYLE_FILENAME)
}

/// Write the stylesheet into the output directory.
pub fn write_embedded_assets(output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(&*STYLE_FILENAME);
    std::fs::write(&path, STYLE_CSS)
        .with_context(|| format!("Failed to write stylesheet to {}", path.display()))?;
    Ok(path)
}

/// Variables for the document shell.
pub struct ShellVars<'a> {
    /// Contents of `<title>`.
    pub title: &'a str,
    /// Site title shown in the header.
    pub site_title: &'a str,
    /// Href of the fingerprinted stylesheet.
    pub stylesheet: &'a str,
    /// Rendered page body (already escaped HTML).
    pub body: &'a str,
}

impl TemplateVars for ShellVars<'_> {
    fn apply(&self, content: &str) -> String {
        use crate::utils::html::escape;
        content
            .replace("{{title}}", &escape(self.title))
            .replace("{{site_title}}", &escape(self.site_title))
            .replace("{{stylesheet}}", self.stylesheet)
            .replace("{{body}}", self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_filename_is_fingerprinted() {
        assert!(STYLE_FILENAME.starts_with("styles."));
        assert!(STYLE_FILENAME.ends_with(".css"));
        // styles. + 8 hex chars + .css
        assert_eq!(STYLE_FILENAME.len(), "styles.".len() + 8 + ".css".len());
    }

    #[test]
    fn test_shell_substitutes_all_placeholders() {
        let html = SHELL.render(&ShellVars {
            title: "Hooks · Primer",
            site_title: "Primer",
            stylesheet: "/styles.a1b2c3d4.css",
            body: "<main>content</main>",
        });

        assert!(html.contains("<title>Hooks · Primer</title>"));
        assert!(html.contains("/styles.a1b2c3d4.css"));
        assert!(html.contains("<main>content</main>"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_shell_escapes_titles() {
        let html = SHELL.render(&ShellVars {
            title: "<Fragment> & Friends",
            site_title: "Primer",
            stylesheet: "/styles.css",
            body: "",
        });
        assert!(html.contains("&lt;Fragment&gt; &amp; Friends"));
    }

    #[test]
    fn test_write_embedded_assets() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_embedded_assets(dir.path()).unwrap();
        assert!(path.is_file());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), STYLE_CSS);
    }
}
