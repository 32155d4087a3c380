//! Anchor slug generation for section headings.
//!
//! Headings become stable `id` attributes so sections can be deep-linked:
//! `"When to Use Scroll Effects"` -> `"when-to-use-scroll-effects"`.

use deunicode::deunicode;

/// Turn heading text into a URL-safe anchor slug.
///
/// Transliterates Unicode to ASCII, lowercases, and collapses any run of
/// non-alphanumeric characters into a single `-`. Leading and trailing
/// separators are trimmed.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_sep = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }

    slug
}
