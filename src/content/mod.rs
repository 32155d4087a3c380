//! The content model: topics, sections, and content nodes.
//!
//! A `Topic` is one documentation page. It owns an ordered list of
//! `Section`s, each of which owns an ordered list of `ContentNode`s. All of
//! it is plain immutable data, constructed once at startup and never mutated
//! afterwards.

mod node;
mod topic;

pub use node::{CalloutKind, ContentNode, Span, code, link, text};
pub use topic::{Section, Topic};
