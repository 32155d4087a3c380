//! Hooks: state and effects in function components.

use crate::content::{CalloutKind, Section, Topic, code, text};

pub fn topic() -> Topic {
    Topic::new(
        "/hooks/",
        "Hooks",
        "Hooks let function components hold state and participate in the \
         component lifecycle without classes.",
    )
    .section(
        Section::new("Key Definitions")
            .paragraph(vec![
                text("A "),
                code("hook"),
                text(
                    " is a function whose name starts with \"use\" and that may \
                     only be called from a component body or another hook.",
                ),
            ])
            .list(vec![
                vec![
                    code("useState"),
                    text(" — a value that survives re-renders, plus its setter."),
                ],
                vec![
                    code("useEffect"),
                    text(" — a side effect that runs after the render commits."),
                ],
                vec![
                    code("useMemo"),
                    text(" / "),
                    code("useCallback"),
                    text(" — cache a computation or function identity between renders."),
                ],
                vec![
                    code("useRef"),
                    text(" — a mutable box that does not trigger re-renders."),
                ],
            ]),
    )
    .section(
        Section::new("When to Use Hooks")
            .paragraph(vec![text(
                "Reach for local state first. Anything that only one component \
                 cares about — an open flag, an input draft, a fetch result — \
                 belongs in that component, not in a store.",
            )])
            .callout(
                CalloutKind::Warning,
                vec![
                    text("Hooks must be called unconditionally and in the same \
                          order on every render. Never call a hook inside "),
                    code("if"),
                    text(" or a loop."),
                ],
            ),
    )
    .section(
        Section::new("A Counter, Step by Step")
            .paragraph(vec![
                text("The setter form "),
                code("setCount(c => c + 1)"),
                text(
                    " reads the latest value even when several updates are \
                     batched into one render.",
                ),
            ])
            .sample(
                "jsx",
                r#"function Counter() {
  const [count, setCount] = useState(0);

  useEffect(() => {
    document.title = `Clicked ${count} times`;
  }, [count]);

  return (
    <button onClick={() => setCount(c => c + 1)}>
      {count}
    </button>
  );
}"#,
            ),
    )
    .section(
        Section::new("Effect Cleanup")
            .paragraph(vec![
                text("An effect may return a cleanup function. It runs before the \
                      effect fires again and when the component unmounts — the \
                      place to clear timers and unsubscribe."),
            ])
            .sample(
                "jsx",
                r#"useEffect(() => {
  const id = setInterval(tick, 1000);
  return () => clearInterval(id);
}, []);"#,
            ),
    )
    .section(
        Section::new("Glossary")
            .list(vec![
                vec![
                    text("Dependency array — the second argument to "),
                    code("useEffect"),
                    text("; the effect re-runs when any entry changes."),
                ],
                vec![text(
                    "Stale closure — an effect or callback reading a value captured \
                     on an earlier render.",
                )],
                vec![text(
                    "Custom hook — a plain function composed of other hooks, the \
                     unit of reuse for stateful logic.",
                )],
            ])
            .small(vec![text(
                "Hooks shipped in React 16.8; every example here assumes function \
                 components throughout.",
            )]),
    )
}
