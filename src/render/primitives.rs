//! The primitive vocabulary pages are built from.
//!
//! Each primitive is a pure mapping from content to an HTML fragment pushed
//! onto the output buffer. Primitives never fail: any content renders, and
//! all user-visible text is escaped on the way out.

use crate::content::{CalloutKind, ContentNode, Section, Span, Topic};
use crate::utils::html::{escape, escape_attr};
use crate::utils::slug::slugify;

/// Page: the `<main>` element holding title, lead, and sections.
pub fn page(topic: &Topic) -> String {
    // Sections dominate the output; one kilobyte per section is a
    // comfortable starting size
    let mut out = String::with_capacity(1024 * (topic.sections.len() + 1));

    out.push_str("<main>\n");
    title(&mut out, &topic.title);
    if !topic.lead.is_empty() {
        lead(&mut out, &topic.lead);
    }
    for sec in &topic.sections {
        section(&mut out, sec);
    }
    out.push_str("</main>\n");
    out
}

/// Title: the page `<h1>`.
pub fn title(out: &mut String, text: &str) {
    out.push_str("<h1 class=\"page-title\">");
    out.push_str(&escape(text));
    out.push_str("</h1>\n");
}

/// Lead: the summary paragraph under the title.
pub fn lead(out: &mut String, text: &str) {
    out.push_str("<p class=\"page-lead\">");
    out.push_str(&escape(text));
    out.push_str("</p>\n");
}

/// Section: `<section>` with an anchored heading and its content blocks.
pub fn section(out: &mut String, section: &Section) {
    out.push_str("<section>\n");
    h2(out, &section.heading);
    for node in &section.nodes {
        content_node(out, node);
    }
    out.push_str("</section>\n");
}

/// H2: section heading with a slug anchor id.
pub fn h2(out: &mut String, heading: &str) {
    out.push_str("<h2 id=\"");
    out.push_str(&escape_attr(&slugify(heading)));
    out.push_str("\">");
    out.push_str(&escape(heading));
    out.push_str("</h2>\n");
}

/// Dispatch one content block to its primitive.
fn content_node(out: &mut String, node: &ContentNode) {
    match node {
        ContentNode::Paragraph { spans: s } => paragraph(out, s),
        ContentNode::List { items } => list(out, items),
        ContentNode::Code { lang, source } => pre(out, *lang, source),
        ContentNode::Callout { kind, spans: s } => callout(out, *kind, s),
        ContentNode::Small { spans: s } => small(out, s),
    }
}

/// Paragraph primitive.
pub fn paragraph(out: &mut String, content: &[Span]) {
    out.push_str("<p>");
    spans(out, content);
    out.push_str("</p>\n");
}

/// List primitive: `<ul>` of inline-span items.
pub fn list(out: &mut String, items: &[Vec<Span>]) {
    out.push_str("<ul>\n");
    for item in items {
        out.push_str("<li>");
        spans(out, item);
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n");
}

/// Pre primitive: an escaped code sample.
pub fn pre(out: &mut String, lang: Option<&'static str>, source: &str) {
    match lang {
        Some(lang) => {
            out.push_str("<pre><code class=\"language-");
            out.push_str(&escape_attr(lang));
            out.push_str("\">");
        }
        None => out.push_str("<pre><code>"),
    }
    out.push_str(&escape(source));
    out.push_str("</code></pre>\n");
}

/// Callout primitive: a highlighted aside.
pub fn callout(out: &mut String, kind: CalloutKind, content: &[Span]) {
    out.push_str("<div class=\"callout callout-");
    out.push_str(kind.label());
    out.push_str("\">");
    spans(out, content);
    out.push_str("</div>\n");
}

/// Small primitive: small print.
pub fn small(out: &mut String, content: &[Span]) {
    out.push_str("<p><small>");
    spans(out, content);
    out.push_str("</small></p>\n");
}

/// Inline spans: prose, inline code, and internal links.
fn spans(out: &mut String, content: &[Span]) {
    for span in content {
        match span {
            Span::Text(s) => out.push_str(&escape(s)),
            Span::Code(s) => {
                out.push_str("<code>");
                out.push_str(&escape(s));
                out.push_str("</code>");
            }
            Span::Link { label, route } => {
                out.push_str("<a href=\"");
                out.push_str(&escape_attr(&route.to_encoded()));
                out.push_str("\">");
                out.push_str(&escape(label));
                out.push_str("</a>");
            }
        }
    }
}
