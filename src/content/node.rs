//! Leaf content units.

use serde::Serialize;

use crate::core::RouteKey;

/// An inline run of content within a paragraph or list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Span {
    /// Plain prose.
    Text(String),
    /// Inline code (identifiers, expressions, file names).
    Code(String),
    /// Internal link to another page.
    Link { label: String, route: RouteKey },
}

/// Shorthand for a prose span.
#[inline]
pub fn text(s: impl Into<String>) -> Span {
    Span::Text(s.into())
}

/// Shorthand for an inline-code span.
#[inline]
pub fn code(s: impl Into<String>) -> Span {
    Span::Code(s.into())
}

/// Shorthand for an internal link span.
#[inline]
pub fn link(label: impl Into<String>, route: impl Into<RouteKey>) -> Span {
    Span::Link {
        label: label.into(),
        route: route.into(),
    }
}

/// Visual flavor of a callout block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutKind {
    Note,
    Tip,
    Warning,
}

impl CalloutKind {
    /// CSS class suffix and display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Tip => "tip",
            Self::Warning => "warning",
        }
    }
}

/// A leaf unit of page content.
///
/// This is a closed set: every block a section can contain is one of these
/// variants, so rendering and tests can match exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum ContentNode {
    /// A prose paragraph.
    Paragraph { spans: Vec<Span> },
    /// An unordered list; each item is a run of inline spans.
    List { items: Vec<Vec<Span>> },
    /// A code sample with an optional language tag.
    Code {
        lang: Option<&'static str>,
        source: String,
    },
    /// A highlighted aside (note, tip, or warning).
    Callout {
        #[serde(rename = "callout_kind")]
        kind: CalloutKind,
        spans: Vec<Span>,
    },
    /// Small print (caveats, footnotes).
    Small { spans: Vec<Span> },
}
