//! Topic-to-HTML rendering.
//!
//! Rendering is a pure function of the topic and the render context: the
//! same inputs always produce the same document, byte for byte. The body is
//! assembled from the fixed primitive vocabulary in `primitives`, then
//! wrapped in the embedded document shell.

mod primitives;

use crate::content::Topic;
use crate::embed::{SHELL, ShellVars};

/// Site-level values every page rendering needs.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Site title for the header and `<title>` suffix.
    pub site_title: &'a str,
    /// Href of the fingerprinted stylesheet.
    pub stylesheet: &'a str,
}

/// Render a topic into a complete HTML document.
pub fn render_topic(topic: &Topic, ctx: &RenderContext<'_>) -> String {
    let body = primitives::page(topic);
    let title = format!("{} · {}", topic.title, ctx.site_title);

    SHELL.render(&ShellVars {
        title: &title,
        site_title: ctx.site_title,
        stylesheet: ctx.stylesheet,
        body: &body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CalloutKind, Section, code, link, text};

    fn ctx() -> RenderContext<'static> {
        RenderContext {
            site_title: "Primer",
            stylesheet: "/styles.test.css",
        }
    }

    fn sample_topic() -> Topic {
        Topic::new("/hooks/", "Hooks", "State and effects in function components.")
            .section(
                Section::new("Key Definitions")
                    .paragraph(vec![text("A "), code("hook"), text(" is a function.")])
                    .list(vec![
                        vec![code("useState"), text(" - local state")],
                        vec![code("useEffect"), text(" - side effects")],
                    ]),
            )
            .section(
                Section::new("Glossary")
                    .sample("js", "const [n, setN] = useState(0);")
                    .callout(CalloutKind::Warning, vec![text("Rules of hooks apply.")])
                    .small(vec![text("Requires 16.8 or later.")]),
            )
    }

    #[test]
    fn test_render_is_deterministic() {
        let topic = sample_topic();
        let first = render_topic(&topic, &ctx());
        let second = render_topic(&topic, &ctx());
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_two_constructions_identical() {
        // A topic constructor called twice yields structurally identical
        // output trees, so their renderings match byte for byte
        let first = render_topic(&sample_topic(), &ctx());
        let second = render_topic(&sample_topic(), &ctx());
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_document_structure() {
        let html = render_topic(&sample_topic(), &ctx());

        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>Hooks · Primer</title>"));
        assert!(html.contains("/styles.test.css"));
        assert!(html.contains(r#"<h1 class="page-title">Hooks</h1>"#));
        assert!(html.contains(r#"<p class="page-lead">State and effects in function components.</p>"#));
    }

    #[test]
    fn test_render_section_order_preserved() {
        let html = render_topic(&sample_topic(), &ctx());
        let first = html.find("Key Definitions").unwrap();
        let second = html.find("Glossary").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_render_headings_get_anchor_ids() {
        let html = render_topic(&sample_topic(), &ctx());
        assert!(html.contains(r##"<h2 id="key-definitions">Key Definitions</h2>"##));
        assert!(html.contains(r##"<h2 id="glossary">Glossary</h2>"##));
    }

    #[test]
    fn test_render_escapes_code_sample() {
        let topic = Topic::new("/t/", "T", "")
            .section(Section::new("S").sample("js", "if (a < b && c > d) {}"));
        let html = render_topic(&topic, &ctx());
        assert!(html.contains("if (a &lt; b &amp;&amp; c &gt; d) {}"));
    }

    #[test]
    fn test_render_escapes_prose() {
        let topic = Topic::new("/t/", "<T>", "a & b")
            .section(Section::new("S").paragraph(vec![text("1 < 2")]));
        let html = render_topic(&topic, &ctx());
        assert!(html.contains("&lt;T&gt;"));
        assert!(html.contains("1 &lt; 2"));
        assert!(!html.contains("<T>"));
    }

    #[test]
    fn test_render_inline_spans() {
        let topic = Topic::new("/t/", "T", "").section(
            Section::new("S").paragraph(vec![
                text("See "),
                link("the hooks page", "/hooks/"),
                text(" and "),
                code("useState"),
                text("."),
            ]),
        );
        let html = render_topic(&topic, &ctx());
        assert!(html.contains(r#"<a href="/hooks/">the hooks page</a>"#));
        assert!(html.contains("<code>useState</code>"));
    }

    #[test]
    fn test_render_callout_kinds() {
        let topic = Topic::new("/t/", "T", "").section(
            Section::new("S")
                .callout(CalloutKind::Note, vec![text("n")])
                .callout(CalloutKind::Tip, vec![text("t")])
                .callout(CalloutKind::Warning, vec![text("w")]),
        );
        let html = render_topic(&topic, &ctx());
        assert!(html.contains(r#"class="callout callout-note""#));
        assert!(html.contains(r#"class="callout callout-tip""#));
        assert!(html.contains(r#"class="callout callout-warning""#));
    }

    #[test]
    fn test_render_code_without_language() {
        let mut topic = Topic::new("/t/", "T", "");
        let mut section = Section::new("S");
        section.nodes.push(crate::content::ContentNode::Code {
            lang: None,
            source: "plain block".to_string(),
        });
        topic.sections.push(section);

        let html = render_topic(&topic, &ctx());
        assert!(html.contains("<pre><code>plain block</code></pre>"));
    }
}
