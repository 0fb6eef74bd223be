//! Character-offset accessors.
//!
//! Negative indices count from the end, so `-1` is the last character.

use std::ops::RangeInclusive;

use regex::Regex;

use super::{byte_offset, resolve_index};

/// The character at `index`, or `None` when out of range.
///
/// ```
/// assert_eq!(inflect::text::at("hello", 0), Some("h"));
/// assert_eq!(inflect::text::at("hello", -1), Some("o"));
/// assert_eq!(inflect::text::at("hello", 5), None);
/// ```
pub fn at(text: &str, index: isize) -> Option<&str> {
    let len = text.chars().count();
    let start = resolve_index(index, len).filter(|&start| start < len)?;
    Some(&text[byte_offset(text, start)..byte_offset(text, start + 1)])
}

/// The characters covered by an inclusive range.
///
/// Returns `None` when the range starts outside the text. An end before the
/// start yields `""`; an end past the text is clamped.
///
/// ```
/// assert_eq!(inflect::text::at_range("hello", -2..=-1), Some("lo"));
/// assert_eq!(inflect::text::at_range("hello", 1..=10), Some("ello"));
/// assert_eq!(inflect::text::at_range("hello", 6..=7), None);
/// ```
pub fn at_range(text: &str, range: RangeInclusive<isize>) -> Option<&str> {
    let len = text.chars().count();
    let start = resolve_index(*range.start(), len).filter(|&start| start <= len)?;
    let Some(end) = resolve_index(*range.end(), len) else {
        return Some("");
    };
    let stop = end.saturating_add(1).min(len);
    if stop <= start {
        return Some("");
    }
    Some(&text[byte_offset(text, start)..byte_offset(text, stop)])
}

/// The first match of `pattern`, or `None` when nothing matches.
pub fn at_match<'a>(text: &'a str, pattern: &Regex) -> Option<&'a str> {
    pattern.find(text).map(|m| m.as_str())
}

/// Everything from `index` to the end; `None` when `index` lies outside the
/// text. The position just past the end gives `""`.
///
/// ```
/// assert_eq!(inflect::text::from("hello", 2), Some("llo"));
/// assert_eq!(inflect::text::from("hello", -2), Some("lo"));
/// assert_eq!(inflect::text::from("hello", 10), None);
/// ```
pub fn from(text: &str, index: isize) -> Option<&str> {
    let len = text.chars().count();
    let start = resolve_index(index, len).filter(|&start| start <= len)?;
    Some(&text[byte_offset(text, start)..])
}

/// Everything up to and including `index`. An index before the start gives
/// `""`; one past the end gives the whole text.
///
/// ```
/// assert_eq!(inflect::text::to("hello", 2), "hel");
/// assert_eq!(inflect::text::to("hello", -2), "hell");
/// assert_eq!(inflect::text::to("hello", -10), "");
/// ```
pub fn to(text: &str, index: isize) -> &str {
    let len = text.chars().count();
    match resolve_index(index, len) {
        Some(end) => &text[..byte_offset(text, end.saturating_add(1).min(len))],
        None => "",
    }
}

/// The first `limit` characters, or the whole text when it is shorter.
pub fn first(text: &str, limit: usize) -> &str {
    &text[..byte_offset(text, limit)]
}

/// The last `limit` characters, or the whole text when it is shorter.
pub fn last(text: &str, limit: usize) -> &str {
    let len = text.chars().count();
    match len.checked_sub(limit) {
        Some(start) => &text[byte_offset(text, start)..],
        None => text,
    }
}
