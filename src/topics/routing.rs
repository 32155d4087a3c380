//! Client-side routing.

use crate::content::{CalloutKind, Section, Topic, code, text};

pub fn topic() -> Topic {
    Topic::new(
        "/routing/",
        "Client-Side Routing",
        "Mapping the URL to what renders, so the address bar stays the source \
         of truth for navigation state.",
    )
    .section(
        Section::new("Key Definitions").list(vec![
            vec![text(
                "Route: a pairing of a path pattern with the component tree it \
                 renders.",
            )],
            vec![
                text("Dynamic segment: a named placeholder in a path, e.g. "),
                code("/posts/:id"),
                text(", exposed to the component as a parameter."),
            ],
            vec![text(
                "Nested routes: child routes rendering inside a parent layout \
                 via an outlet.",
            )],
        ]),
    )
    .section(
        Section::new("When URL State Beats Component State")
            .paragraph(vec![text(
                "Anything a user might bookmark, share, or reach with the back \
                 button belongs in the URL: the selected tab, the current page \
                 of results, an active filter. State that dies with the visit \
                 can stay in components.",
            )])
            .callout(
                CalloutKind::Note,
                vec![text(
                    "The back button is a feature contract. If pressing it \
                     surprises the user, some state is in the wrong place.",
                )],
            ),
    )
    .section(
        Section::new("Declaring Routes")
            .sample(
                "jsx",
                r#"<Routes>
  <Route path="/" element={<Layout />}>
    <Route index element={<Home />} />
    <Route path="posts/:id" element={<Post />} />
    <Route path="*" element={<NotFound />} />
  </Route>
</Routes>"#,
            )
            .paragraph(vec![
                text("The "),
                code(r#"path="*""#),
                text(
                    " route is the fallback: every address resolves to something, \
                     so an unknown path renders a not-found page instead of \
                     nothing.",
                ),
            ]),
    )
    .section(
        Section::new("Glossary")
            .list(vec![
                vec![
                    text("Link component: an anchor that intercepts clicks and \
                          navigates via "),
                    code("history.pushState"),
                    text(" instead of a full page load."),
                ],
                vec![text(
                    "Outlet: the slot in a parent layout where the matched child \
                     route renders.",
                )],
                vec![text(
                    "Catch-all route: the pattern that matches when nothing else \
                     does; the router's not-found fallback.",
                )],
            ])
            .small(vec![text(
                "Server rendering changes where matching runs, not the route \
                 table itself.",
            )]),
    )
}
