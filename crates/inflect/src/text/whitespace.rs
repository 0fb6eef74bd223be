//! Whitespace squeezing and pattern removal.

use regex::Regex;

/// Collapse every run of whitespace to a single space and trim both ends.
///
/// Whitespace is the full Unicode `White_Space` set, including no-break,
/// next-line and ideographic spaces.
///
/// ```
/// assert_eq!(inflect::text::squish(" foo\u{a0}\n\t bar\u{3000}"), "foo bar");
/// ```
pub fn squish(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Squish `text` in place and return it for chaining.
pub fn squish_in_place(text: &mut String) -> &mut String {
    *text = squish(text);
    text
}

/// `text` with every match of `pattern` deleted.
///
/// ```
/// use regex::Regex;
///
/// let pattern = Regex::new("Fast ").unwrap();
/// assert_eq!(inflect::text::remove("Fast Summer", &pattern), "Summer");
/// ```
pub fn remove(text: &str, pattern: &Regex) -> String {
    pattern.replace_all(text, "").into_owned()
}

/// Whether `text` does not contain `needle`.
pub fn exclude(text: &str, needle: &str) -> bool {
    !text.contains(needle)
}
