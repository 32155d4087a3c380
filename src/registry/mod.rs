//! Route registry: the static mapping from route key to topic.
//!
//! Built once at startup from the compiled-in topic library, read-only
//! afterwards. Resolution is a pure map lookup: every key resolves to either
//! its topic or the registry's not-found fallback, never to an error.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::content::Topic;
use crate::core::RouteKey;

/// Registry construction errors.
///
/// These are authoring defects: the topic library is wrong, not the request.
/// They can only surface while building the registry, never during resolution.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate route `{0}`")]
    DuplicateRoute(RouteKey),

    #[error("fallback topic route `{0}` collides with a registered topic")]
    FallbackCollision(RouteKey),
}

/// Static route-key -> topic mapping with a not-found fallback.
#[derive(Debug)]
pub struct Registry {
    topics: FxHashMap<RouteKey, Topic>,
    /// Page order as authored (map iteration order is arbitrary).
    order: Vec<RouteKey>,
    /// Rendered for every unmatched key, and as `404.html` in builds.
    fallback: Topic,
}

impl Registry {
    /// Build a registry from a topic list and a fallback topic.
    ///
    /// Fails if two topics share a route, or the fallback's route shadows a
    /// registered topic.
    pub fn new(topics: Vec<Topic>, fallback: Topic) -> Result<Self, RegistryError> {
        let mut map = FxHashMap::default();
        let mut order = Vec::with_capacity(topics.len());

        for topic in topics {
            let route = topic.route.clone();
            if map.insert(route.clone(), topic).is_some() {
                return Err(RegistryError::DuplicateRoute(route));
            }
            order.push(route);
        }

        if map.contains_key(&fallback.route) {
            return Err(RegistryError::FallbackCollision(fallback.route));
        }

        Ok(Self {
            topics: map,
            order,
            fallback,
        })
    }

    /// Resolve a route key to a topic.
    ///
    /// Total: an unmatched key yields the fallback topic, the same one on
    /// every miss. Never panics, never blocks.
    pub fn resolve(&self, key: &RouteKey) -> &Topic {
        self.topics.get(key).unwrap_or(&self.fallback)
    }

    /// Look up a route key, `None` when unmatched.
    ///
    /// The server uses this to pick the HTTP status; page selection itself
    /// goes through `resolve`.
    pub fn get(&self, key: &RouteKey) -> Option<&Topic> {
        self.topics.get(key)
    }

    /// The not-found topic.
    pub fn fallback(&self) -> &Topic {
        &self.fallback
    }

    /// Registered topics in authored order (fallback excluded).
    pub fn topics(&self) -> impl Iterator<Item = &Topic> {
        self.order.iter().filter_map(|route| self.topics.get(route))
    }

    /// Number of registered topics (fallback excluded).
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Section, text};

    fn make_topic(route: &str, title: &str) -> Topic {
        Topic::new(route, title, "lead").section(
            Section::new("Overview").paragraph(vec![text("content")]),
        )
    }

    fn make_registry() -> Registry {
        Registry::new(
            vec![
                make_topic("/animations/scroll-effects/", "Scroll Effects"),
                make_topic("/state/lift-state/", "Lifting State"),
            ],
            make_topic("/not-found/", "Page Not Found"),
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_known_routes() {
        let registry = make_registry();

        let topic = registry.resolve(&RouteKey::from_path("/state/lift-state/"));
        assert_eq!(topic.title, "Lifting State");

        let topic = registry.resolve(&RouteKey::from_path("/animations/scroll-effects/"));
        assert_eq!(topic.title, "Scroll Effects");
    }

    #[test]
    fn test_resolve_unknown_route_yields_fallback() {
        let registry = make_registry();
        let topic = registry.resolve(&RouteKey::from_path("/nonexistent/"));
        assert_eq!(topic.title, "Page Not Found");
    }

    #[test]
    fn test_resolve_empty_string_yields_fallback() {
        // "" normalizes to "/" which this registry does not contain
        let registry = make_registry();
        let topic = registry.resolve(&RouteKey::from_path(""));
        assert_eq!(topic.title, "Page Not Found");
    }

    #[test]
    fn test_resolve_is_total_over_junk_keys() {
        let registry = make_registry();
        for junk in ["", "/", "???", "/a//b/", "/%FF/", "no-slashes", "/../.."] {
            let topic = registry.resolve(&RouteKey::from_browser(junk));
            assert!(!topic.title.is_empty());
        }
    }

    #[test]
    fn test_fallback_identity_is_stable() {
        let registry = make_registry();
        let first = registry.resolve(&RouteKey::from_path("/missing-one/"));
        let second = registry.resolve(&RouteKey::from_path("/missing-two/"));
        // Same topic instance on every miss
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(first, registry.fallback()));
    }

    #[test]
    fn test_duplicate_route_rejected() {
        let result = Registry::new(
            vec![
                make_topic("/hooks/", "Hooks"),
                make_topic("/hooks/", "Hooks Again"),
            ],
            make_topic("/not-found/", "Page Not Found"),
        );
        assert!(matches!(result, Err(RegistryError::DuplicateRoute(ref r)) if r == "/hooks/"));
    }

    #[test]
    fn test_duplicate_after_normalization_rejected() {
        // Same route spelled differently still collides
        let result = Registry::new(
            vec![
                make_topic("/hooks/", "Hooks"),
                make_topic("hooks", "Hooks Again"),
            ],
            make_topic("/not-found/", "Page Not Found"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_fallback_collision_rejected() {
        let result = Registry::new(
            vec![make_topic("/hooks/", "Hooks")],
            make_topic("/hooks/", "Shadowing Fallback"),
        );
        assert!(matches!(result, Err(RegistryError::FallbackCollision(_))));
    }

    #[test]
    fn test_topics_iterate_in_authored_order() {
        let registry = make_registry();
        let titles: Vec<_> = registry.topics().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Scroll Effects", "Lifting State"]);
    }

    #[test]
    fn test_get_distinguishes_miss_from_hit() {
        let registry = make_registry();
        assert!(registry.get(&RouteKey::from_path("/state/lift-state/")).is_some());
        assert!(registry.get(&RouteKey::from_path("/nonexistent/")).is_none());
    }
}
