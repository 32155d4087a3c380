//! Route key type for type-safe navigation handling.
//!
//! - Internal representation: Always decoded (human-readable)
//! - Browser boundary: Decode on input, encode on output

use std::borrow::Borrow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Canonical decoded route key (internal representation)
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts with `/` and ends with `/`
/// - Query strings and fragments are stripped
///
/// Construction is total: any input string yields a valid key. The empty
/// string and `"/"` both canonicalize to `"/"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteKey(Arc<str>);

impl RouteKey {
    /// Create from browser URL (decode percent-encoding, strip query string).
    pub fn from_browser(encoded: &str) -> Self {
        use percent_encoding::percent_decode_str;
        // Strip query string before decoding
        let path = encoded.split('?').next().unwrap_or(encoded);
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string());
        Self::from_path(&decoded)
    }

    /// Create from a decoded path. Normalizes leading/trailing slashes and
    /// strips query string and fragment.
    pub fn from_path(decoded: &str) -> Self {
        let trimmed = decoded.trim();

        // Handle root path specially
        if trimmed.is_empty() || trimmed == "/" {
            return Self(Arc::from("/"));
        }

        // Use url crate to properly strip query and fragment
        let path = Self::strip_query_fragment(trimmed);

        // Add leading slash if missing
        let with_leading = if path.starts_with('/') {
            path
        } else {
            format!("/{}", path)
        };

        // Add trailing slash if missing
        let normalized = if with_leading.ends_with('/') {
            with_leading
        } else {
            format!("{}/", with_leading)
        };

        Self(Arc::from(normalized))
    }

    /// Strip query string and fragment from a path using url crate.
    fn strip_query_fragment(path: &str) -> String {
        use percent_encoding::percent_decode_str;

        // Use a dummy base URL to parse the path
        static BASE: std::sync::OnceLock<url::Url> = std::sync::OnceLock::new();
        let base = BASE.get_or_init(|| url::Url::parse("http://x").unwrap());

        match base.join(path) {
            Ok(parsed) => {
                // url crate returns percent-encoded path, decode it
                percent_decode_str(parsed.path())
                    .decode_utf8()
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| parsed.path().to_string())
            }
            // Fallback to simple split if url parsing fails
            Err(_) => path.split(['?', '#']).next().unwrap_or(path).to_string(),
        }
    }

    /// Get the decoded route key as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Encode for browser (percent-encode non-ASCII and special characters).
    pub fn to_encoded(&self) -> String {
        use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
        self.0
            .split('/')
            .map(|segment| utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Check if this is the root key (`/`).
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "/"
    }

    /// Path segments between the slashes.
    ///
    /// `/state/lift-state/` -> `["state", "lift-state"]`, `/` -> `[]`
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }
}

impl std::fmt::Display for RouteKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for RouteKey {
    fn default() -> Self {
        Self::from_path("/")
    }
}

impl AsRef<str> for RouteKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RouteKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for RouteKey {
    fn from(s: String) -> Self {
        Self::from_path(&s)
    }
}

impl From<&str> for RouteKey {
    fn from(s: &str) -> Self {
        Self::from_path(s)
    }
}

impl PartialEq<str> for RouteKey {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for RouteKey {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for RouteKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RouteKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_path(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_browser_encoded() {
        let key = RouteKey::from_browser("/topics/hello%20world/");
        assert_eq!(key.as_str(), "/topics/hello world/");
    }

    #[test]
    fn test_from_browser_special_chars() {
        let key = RouteKey::from_browser("/topics/%26%3D%3F/");
        assert_eq!(key.as_str(), "/topics/&=?/");
    }

    #[test]
    fn test_from_browser_invalid_utf8() {
        // Invalid UTF-8 sequence should be preserved
        let key = RouteKey::from_browser("/topics/%FF/");
        assert_eq!(key.as_str(), "/topics/%FF/");
    }

    #[test]
    fn test_from_path() {
        let key = RouteKey::from_path("/state/lift-state/");
        assert_eq!(key.as_str(), "/state/lift-state/");
    }

    #[test]
    fn test_from_path_adds_leading_slash() {
        let key = RouteKey::from_path("state/lift-state/");
        assert_eq!(key.as_str(), "/state/lift-state/");
    }

    #[test]
    fn test_from_path_adds_trailing_slash() {
        let key = RouteKey::from_path("/state/lift-state");
        assert_eq!(key.as_str(), "/state/lift-state/");
    }

    #[test]
    fn test_empty_string_is_root() {
        assert_eq!(RouteKey::from_path("").as_str(), "/");
        assert_eq!(RouteKey::from_browser("").as_str(), "/");
        assert!(RouteKey::from_path("").is_root());
    }

    #[test]
    fn test_from_path_strips_query() {
        let key = RouteKey::from_path("/forms/validation?v=1");
        assert_eq!(key.as_str(), "/forms/validation/");
    }

    #[test]
    fn test_from_path_strips_fragment() {
        let key = RouteKey::from_path("/forms/validation#glossary");
        assert_eq!(key.as_str(), "/forms/validation/");
    }

    #[test]
    fn test_from_path_strips_query_and_fragment() {
        let key = RouteKey::from_path("/forms/validation?v=1#glossary");
        assert_eq!(key.as_str(), "/forms/validation/");
    }

    #[test]
    fn test_to_encoded() {
        let key = RouteKey::from_path("/topics/hello world/");
        assert_eq!(key.to_encoded(), "/topics/hello%20world/");
    }

    #[test]
    fn test_segments() {
        let key = RouteKey::from_path("/state/lift-state/");
        let segments: Vec<_> = key.segments().collect();
        assert_eq!(segments, vec!["state", "lift-state"]);

        let root = RouteKey::from_path("/");
        assert_eq!(root.segments().count(), 0);
    }

    #[test]
    fn test_equality_and_hash() {
        use rustc_hash::FxHashSet;

        let a = RouteKey::from_path("/hooks/");
        let b = RouteKey::from_path("hooks");
        assert_eq!(a, b);

        let mut set = FxHashSet::default();
        set.insert(a);
        set.insert(b); // duplicate after normalization
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_serialize_deserialize() {
        let key = RouteKey::from_path("/animations/scroll-effects/");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, r#""/animations/scroll-effects/""#);

        let parsed: RouteKey = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, key);
    }

    #[test]
    fn test_display() {
        let key = RouteKey::from_path("/hooks/");
        assert_eq!(format!("{}", key), "/hooks/");
    }
}
