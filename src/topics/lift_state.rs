//! Lifting state up: sharing state between sibling components.

use crate::content::{CalloutKind, Section, Topic, code, link, text};

pub fn topic() -> Topic {
    Topic::new(
        "/state/lift-state/",
        "Lifting State Up",
        "When two components need the same data, move it to their closest \
         common ancestor and pass it down.",
    )
    .section(
        Section::new("Key Definitions").list(vec![
            vec![text(
                "Source of truth: the single place a piece of state lives; \
                 everything else derives from it.",
            )],
            vec![
                text("Controlled component: a component whose value comes entirely \
                      from props, e.g. "),
                code("<input value={text} onChange={...} />"),
                text("."),
            ],
            vec![text(
                "Prop drilling: threading a value through components that do not \
                 use it themselves.",
            )],
        ]),
    )
    .section(
        Section::new("When to Lift State")
            .paragraph(vec![text(
                "Lift when siblings must agree: a filter input and the list it \
                 filters, two unit fields that convert into each other, a form \
                 and its summary. If only one component reads the value, keep \
                 the state local.",
            )])
            .callout(
                CalloutKind::Tip,
                vec![text(
                    "Lift to the closest common ancestor, not to the root. State \
                     placed too high re-renders more than it needs to.",
                )],
            ),
    )
    .section(
        Section::new("Worked Example")
            .paragraph(vec![
                text("The ancestor owns the state; both children receive it as \
                      props, and the editing child receives the setter:"),
            ])
            .sample(
                "jsx",
                r#"function FilterableList({ items }) {
  const [query, setQuery] = useState("");
  const visible = items.filter(i => i.includes(query));

  return (
    <>
      <SearchBox query={query} onChange={setQuery} />
      <ResultList items={visible} />
    </>
  );
}"#,
            )
            .paragraph(vec![
                code("SearchBox"),
                text(" is now fully controlled: it renders "),
                code("query"),
                text(" and reports keystrokes upward without owning anything."),
            ]),
    )
    .section(
        Section::new("Glossary")
            .list(vec![
                vec![text(
                    "Unidirectional data flow: data moves down through props, \
                     changes move up through callbacks.",
                )],
                vec![text(
                    "Derived state: a value computed from existing state during \
                     render rather than stored separately.",
                )],
            ])
            .small(vec![
                text("If many distant components need the value, see "),
                link("routing", "/routing/"),
                text(" for URL state, or reach for context before a store."),
            ]),
    )
}
