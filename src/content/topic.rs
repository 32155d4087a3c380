//! Topic and section structures.

use serde::Serialize;

use super::node::{CalloutKind, ContentNode, Span};
use crate::core::RouteKey;

/// One documentation page.
///
/// Constructed once by its topic module (a zero-input function returning the
/// same tree on every call) and owned by the registry for the rest of the
/// process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    /// Unique route key (e.g. `/state/lift-state/`).
    pub route: RouteKey,
    /// Display title.
    pub title: String,
    /// One-paragraph summary shown under the title.
    pub lead: String,
    /// Ordered page content.
    pub sections: Vec<Section>,
}

impl Topic {
    pub fn new(
        route: impl Into<RouteKey>,
        title: impl Into<String>,
        lead: impl Into<String>,
    ) -> Self {
        Self {
            route: route.into(),
            title: title.into(),
            lead: lead.into(),
            sections: Vec::new(),
        }
    }

    /// Append a section.
    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Section headings in page order.
    pub fn headings(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.heading.as_str()).collect()
    }
}

/// A titled subdivision of a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Heading text.
    pub heading: String,
    /// Ordered content blocks.
    pub nodes: Vec<ContentNode>,
}

impl Section {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            nodes: Vec::new(),
        }
    }

    /// Append a prose paragraph.
    pub fn paragraph(mut self, spans: Vec<Span>) -> Self {
        self.nodes.push(ContentNode::Paragraph { spans });
        self
    }

    /// Append an unordered list.
    pub fn list(mut self, items: Vec<Vec<Span>>) -> Self {
        self.nodes.push(ContentNode::List { items });
        self
    }

    /// Append a code sample.
    pub fn sample(mut self, lang: &'static str, source: impl Into<String>) -> Self {
        self.nodes.push(ContentNode::Code {
            lang: Some(lang),
            source: source.into(),
        });
        self
    }

    /// Append a callout.
    pub fn callout(mut self, kind: CalloutKind, spans: Vec<Span>) -> Self {
        self.nodes.push(ContentNode::Callout { kind, spans });
        self
    }

    /// Append small print.
    pub fn small(mut self, spans: Vec<Span>) -> Self {
        self.nodes.push(ContentNode::Small { spans });
        self
    }
}
