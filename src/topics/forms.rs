//! Forms and validation.

use crate::content::{CalloutKind, Section, Topic, code, text};

pub fn topic() -> Topic {
    Topic::new(
        "/forms/validation/",
        "Forms and Validation",
        "Collecting input with controlled components and validating it where \
         the user can act on the result.",
    )
    .section(
        Section::new("Key Definitions").list(vec![
            vec![text(
                "Controlled input: the field's value lives in state; every \
                 keystroke flows through a change handler.",
            )],
            vec![
                text("Uncontrolled input: the DOM owns the value; read it on \
                      submit through a "),
                code("ref"),
                text("."),
            ],
            vec![text(
                "Field-level validation: checking one field as it changes or \
                 blurs, rather than the whole form at once.",
            )],
        ]),
    )
    .section(
        Section::new("When to Validate")
            .paragraph(vec![text(
                "Validate on blur for format errors, on change once a field has \
                 been touched, and always again on submit. Errors shown while \
                 the user is still typing their first attempt read as scolding.",
            )])
            .callout(
                CalloutKind::Warning,
                vec![text(
                    "Client-side validation is a courtesy, not a boundary. The \
                     server must re-check everything.",
                )],
            ),
    )
    .section(
        Section::new("A Controlled Form")
            .sample(
                "jsx",
                r#"function Signup() {
  const [email, setEmail] = useState("");
  const [touched, setTouched] = useState(false);
  const error = touched && !email.includes("@")
    ? "Enter a valid email address"
    : null;

  return (
    <form onSubmit={e => { e.preventDefault(); submit(email); }}>
      <input
        value={email}
        onChange={e => setEmail(e.target.value)}
        onBlur={() => setTouched(true)}
        aria-invalid={Boolean(error)}
      />
      {error && <p role="alert">{error}</p>}
      <button disabled={Boolean(error)}>Sign up</button>
    </form>
  );
}"#,
            )
            .paragraph(vec![
                text("The "),
                code("touched"),
                text(" flag is what keeps the error quiet until the user has \
                      actually left the field."),
            ]),
    )
    .section(
        Section::new("Glossary")
            .list(vec![
                vec![text(
                    "Touched: a field the user has focused and left at least once.",
                )],
                vec![text(
                    "Dirty: a field whose value differs from its initial value.",
                )],
                vec![
                    text("Submit guard: calling "),
                    code("preventDefault"),
                    text(" and routing the submission through your own handler."),
                ],
            ])
            .small(vec![text(
                "Accessible errors need a programmatic association, not just \
                 red text: aria-invalid plus a described-by or alert role.",
            )]),
    )
}
