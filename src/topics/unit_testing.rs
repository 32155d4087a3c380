//! Testing components.

use crate::content::{CalloutKind, Section, Topic, code, text};

pub fn topic() -> Topic {
    Topic::new(
        "/testing/components/",
        "Testing Components",
        "Testing what the user sees and does, instead of the component's \
         internal wiring.",
    )
    .section(
        Section::new("Key Definitions").list(vec![
            vec![text(
                "Render test: mount a component with known props and assert on \
                 the produced output.",
            )],
            vec![
                text("Query by role: finding elements the way assistive \
                      technology does, e.g. "),
                code(r#"getByRole("button", { name: "Save" })"#),
                text("."),
            ],
            vec![text(
                "Test double: a stand-in for a dependency, from a stub returning \
                 canned data to a mock asserting its own calls.",
            )],
        ]),
    )
    .section(
        Section::new("What to Test")
            .paragraph(vec![text(
                "Test the contract: given these props and these interactions, \
                 this is what renders. Implementation details, like which hook \
                 holds the value or how many times something re-rendered, \
                 change constantly and should not break tests.",
            )])
            .callout(
                CalloutKind::Tip,
                vec![text(
                    "A good heuristic: if a refactor keeps behavior identical \
                     and a test fails anyway, that test was pinned to the wrong \
                     thing.",
                )],
            ),
    )
    .section(
        Section::new("An Interaction Test")
            .sample(
                "jsx",
                r#"test("increments on click", async () => {
  render(<Counter />);
  const button = screen.getByRole("button");

  await userEvent.click(button);
  await userEvent.click(button);

  expect(button).toHaveTextContent("2");
});"#,
            )
            .paragraph(vec![
                text("Using "),
                code("userEvent"),
                text(" over raw DOM events matters: it fires the full sequence \
                      a real interaction produces, focus and all."),
            ]),
    )
    .section(
        Section::new("Glossary")
            .list(vec![
                vec![text(
                    "Arrange-act-assert: set up the world, perform the \
                     interaction, check the outcome; one behavior per test.",
                )],
                vec![text(
                    "Snapshot test: serializing output and diffing it against a \
                     stored copy; cheap to write, noisy to maintain.",
                )],
                vec![text(
                    "Flaky test: one that passes or fails without a code change, \
                     usually from unawaited async work.",
                )],
            ])
            .small(vec![text(
                "End-to-end suites cover the wiring between pages; keep them few \
                 and fast, and let component tests carry the detail.",
            )]),
    )
}
