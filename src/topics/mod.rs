//! The compiled-in topic library.
//!
//! One module per subject. Each exposes a zero-input `topic()` constructor
//! returning the same content tree on every call; `site_registry()` wires
//! them all into a registry, with a generated index page at `/` and the
//! not-found page as the fallback.

mod deployment;
mod forms;
mod hooks;
mod lift_state;
mod not_found;
mod routing;
mod scroll_effects;
mod unit_testing;

use crate::content::{Section, Topic, link, text};
use crate::registry::{Registry, RegistryError};

/// All authored topics, in the order they appear on the index page.
pub fn library() -> Vec<Topic> {
    vec![
        hooks::topic(),
        lift_state::topic(),
        routing::topic(),
        forms::topic(),
        scroll_effects::topic(),
        unit_testing::topic(),
        deployment::topic(),
    ]
}

/// The not-found page, rendered for every unmatched route.
pub fn not_found() -> Topic {
    not_found::topic()
}

/// Generated index page listing every authored topic.
fn index(topics: &[Topic]) -> Topic {
    let items = topics
        .iter()
        .map(|t| {
            vec![
                link(t.title.as_str(), t.route.clone()),
                text(format!(" — {}", t.lead)),
            ]
        })
        .collect();

    Topic::new(
        "/",
        "Topics",
        "A working reference for front-end engineering fundamentals.",
    )
    .section(Section::new("All Topics").list(items))
}

/// Build the site registry: index page, authored topics, not-found fallback.
pub fn site_registry() -> Result<Registry, RegistryError> {
    let library = library();
    let mut topics = Vec::with_capacity(library.len() + 1);
    topics.push(index(&library));
    topics.extend(library);
    Registry::new(topics, not_found())
}
