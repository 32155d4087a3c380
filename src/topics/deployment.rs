//! Deploying front-end applications.

use crate::content::{CalloutKind, Section, Topic, code, text};

pub fn topic() -> Topic {
    Topic::new(
        "/deployment/",
        "Deployment",
        "Getting a built front end onto a host, with caching and rollbacks \
         that work in your favor.",
    )
    .section(
        Section::new("Key Definitions").list(vec![
            vec![text(
                "Production build: the minified, tree-shaken bundle output, as \
                 opposed to the development server.",
            )],
            vec![
                text("Content hashing: embedding a digest in asset filenames, \
                      e.g. "),
                code("app.3f9a1c.js"),
                text(", so caches invalidate exactly when content changes."),
            ],
            vec![text(
                "Atomic deploy: a release becomes visible all at once or not at \
                 all; no visitor sees half of two versions.",
            )],
        ]),
    )
    .section(
        Section::new("When a Static Host Is Enough")
            .paragraph(vec![text(
                "A client-rendered app compiles to files; any static host with a \
                 CDN serves it. You need a server runtime only for server-side \
                 rendering, per-request personalization, or APIs living in the \
                 same deploy.",
            )])
            .callout(
                CalloutKind::Note,
                vec![
                    text("Single-page apps need a rewrite rule sending unknown \
                          paths to "),
                    code("index.html"),
                    text(", or deep links will 404 at the host before the \
                          router ever runs."),
                ],
            ),
    )
    .section(
        Section::new("Cache Headers That Cooperate")
            .sample(
                "text",
                r#"/index.html         Cache-Control: no-cache
/assets/app.3f9a1c.js   Cache-Control: public, max-age=31536000, immutable"#,
            )
            .paragraph(vec![text(
                "The HTML is revalidated on every visit and names the hashed \
                 assets; the assets themselves never need revalidation because \
                 a new build gets new names.",
            )]),
    )
    .section(
        Section::new("Glossary")
            .list(vec![
                vec![text(
                    "Rollback: pointing the host back at the previous release \
                     directory; with atomic deploys this is instant.",
                )],
                vec![text(
                    "Preview deploy: a per-branch deployment with its own URL, \
                     built on every push.",
                )],
                vec![text(
                    "Environment variable baking: build-time substitution of \
                     configuration into the bundle; changing it means rebuilding.",
                )],
            ])
            .small(vec![text(
                "Serve everything over HTTPS; service workers and several \
                 platform APIs refuse to run without it.",
            )]),
    )
}
