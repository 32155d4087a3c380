//! The not-found page, rendered for every unmatched route.

use crate::content::{Section, Topic, link, text};

pub fn topic() -> Topic {
    Topic::new(
        "/not-found/",
        "Page Not Found",
        "There is no page at this address.",
    )
    .section(
        Section::new("Where to Go")
            .paragraph(vec![
                text("The address may have been mistyped, or the page may have \
                      moved. The "),
                link("topic index", "/"),
                text(" lists everything this site covers."),
            ])
            .small(vec![text(
                "If a link on this site brought you here, that link is wrong.",
            )]),
    )
}
