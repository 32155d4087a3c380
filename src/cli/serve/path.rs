//! URL to filesystem path resolution for built assets.

use std::path::{Path, PathBuf};

/// Resolve an asset-like URL to a file under the output directory.
///
/// Only paths with a file extension are considered; extensionless paths are
/// page routes and resolve through the registry instead. Traversal outside
/// the output directory is rejected.
pub fn resolve_asset(url: &str, output_root: &Path) -> Option<PathBuf> {
    let clean = normalize_url(url);

    // Page routes have no extension; let the registry handle them
    if Path::new(&clean).extension().is_none() {
        return None;
    }

    // Reject paths with suspicious patterns early
    if clean.contains("..") {
        return None;
    }

    let local = output_root.join(&clean);

    // Canonicalize to resolve symlinks and verify path is under output_root
    let canonical = local.canonicalize().ok()?;
    let root_canonical = output_root.canonicalize().ok()?;

    if !canonical.starts_with(&root_canonical) {
        // Path escapes the output directory - reject
        return None;
    }

    canonical.is_file().then_some(canonical)
}

/// Normalize URL: decode, strip query string, trim slashes
fn normalize_url(url: &str) -> String {
    use percent_encoding::percent_decode_str;
    let decoded = percent_decode_str(url)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default();

    let path = decoded.split('?').next().unwrap_or(&decoded);
    path.trim_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_resolves_existing_asset() {
        let dir = tempfile::tempdir().unwrap();
        let css = dir.path().join("styles.css");
        fs::write(&css, "body {}").unwrap();

        let resolved = resolve_asset("/styles.css?v=1", dir.path()).unwrap();
        assert_eq!(resolved.canonicalize().unwrap(), css.canonicalize().unwrap());
    }

    #[test]
    fn test_page_routes_are_not_assets() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("hooks")).unwrap();
        fs::write(dir.path().join("hooks/index.html"), "x").unwrap();

        // Extensionless: belongs to the registry even if a file exists
        assert!(resolve_asset("/hooks/", dir.path()).is_none());
        assert!(resolve_asset("/hooks", dir.path()).is_none());
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(resolve_asset("/missing.css", dir.path()).is_none());
    }

    #[test]
    fn test_traversal_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(resolve_asset("/../../etc/passwd.txt", dir.path()).is_none());
        assert!(resolve_asset("/%2e%2e/secret.txt", dir.path()).is_none());
    }
}
