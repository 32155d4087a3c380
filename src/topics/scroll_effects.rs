//! Scroll effects: scroll-driven animation and reveal patterns.

use crate::content::{CalloutKind, Section, Topic, code, text};

pub fn topic() -> Topic {
    Topic::new(
        "/animations/scroll-effects/",
        "Scroll Effects",
        "Animating content in response to scroll position, from reveal-on-view \
         to parallax, without fighting the main thread.",
    )
    .section(
        Section::new("Key Definitions").list(vec![
            vec![
                text("Reveal on view: content transitions in the first time it \
                      enters the viewport, observed with "),
                code("IntersectionObserver"),
                text("."),
            ],
            vec![text(
                "Parallax: layers translating at different rates relative to \
                 scroll, creating depth.",
            )],
            vec![text(
                "Scroll progress: how far through a container the viewport has \
                 scrolled, normalized to 0..1.",
            )],
        ]),
    )
    .section(
        Section::new("When to Use Scroll Effects")
            .paragraph(vec![text(
                "Use scroll effects to direct attention: revealing sections of a \
                 landing page, pinning a table of contents, or signalling \
                 reading progress. Skip them for dense application UI, where \
                 motion competes with the work.",
            )])
            .callout(
                CalloutKind::Warning,
                vec![
                    text("Respect "),
                    code("prefers-reduced-motion"),
                    text(": render the final state immediately for users who \
                          opted out of animation."),
                ],
            ),
    )
    .section(
        Section::new("Observing Visibility")
            .paragraph(vec![
                text("An "),
                code("IntersectionObserver"),
                text(
                    " fires only when visibility crosses a threshold, so nothing \
                     runs per scroll frame:",
                ),
            ])
            .sample(
                "jsx",
                r#"function useInView(threshold = 0.2) {
  const ref = useRef(null);
  const [inView, setInView] = useState(false);

  useEffect(() => {
    const observer = new IntersectionObserver(
      ([entry]) => setInView(entry.isIntersecting),
      { threshold }
    );
    observer.observe(ref.current);
    return () => observer.disconnect();
  }, [threshold]);

  return [ref, inView];
}"#,
            ),
    )
    .section(
        Section::new("Staying Off the Main Thread")
            .paragraph(vec![
                text("When you must track position continuously, read it inside "),
                code("requestAnimationFrame"),
                text(" and animate only "),
                code("transform"),
                text(" and "),
                code("opacity"),
                text(", which compositors can move without reflow."),
            ])
            .sample(
                "js",
                r#"let ticking = false;
window.addEventListener("scroll", () => {
  if (ticking) return;
  ticking = true;
  requestAnimationFrame(() => {
    hero.style.transform = `translateY(${window.scrollY * 0.3}px)`;
    ticking = false;
  });
}, { passive: true });"#,
            ),
    )
    .section(
        Section::new("Glossary")
            .list(vec![
                vec![text(
                    "Threshold: the fraction of an element that must be visible \
                     before the observer fires.",
                )],
                vec![
                    text("Passive listener: a scroll handler registered with "),
                    code("{ passive: true }"),
                    text(", promising never to call "),
                    code("preventDefault"),
                    text("."),
                ],
                vec![text(
                    "Compositor-only property: a style the browser can animate \
                     without layout or paint.",
                )],
            ])
            .small(vec![text(
                "CSS scroll-driven animations cover many of these patterns \
                 declaratively where browser support allows.",
            )]),
    )
}
