//! Length-limited text with an omission marker.

use bon::Builder;
use regex::Regex;

/// Where [`truncate`] may cut the text.
#[derive(Debug, Clone)]
pub enum Separator {
    /// Cut before the last occurrence of this text.
    Text(String),
    /// Cut before the last match of this pattern.
    Pattern(Regex),
}

impl From<&str> for Separator {
    fn from(text: &str) -> Self {
        Separator::Text(text.to_string())
    }
}

impl From<String> for Separator {
    fn from(text: String) -> Self {
        Separator::Text(text)
    }
}

impl From<Regex> for Separator {
    fn from(pattern: Regex) -> Self {
        Separator::Pattern(pattern)
    }
}

/// Options for [`truncate`].
///
/// ```
/// use inflect::text::{TruncateOptions, truncate};
///
/// let options = TruncateOptions::builder()
///     .omission("[...]")
///     .separator(" ")
///     .build();
/// assert_eq!(truncate("Hello Big World!", 14, &options), "Hello Big[...]");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct TruncateOptions {
    /// Appended to truncated text. Counts toward the length limit.
    #[builder(default = "...".to_string())]
    omission: String,

    /// Cut at a natural break instead of mid-word.
    #[builder(into)]
    separator: Option<Separator>,
}

impl Default for TruncateOptions {
    fn default() -> Self {
        TruncateOptions::builder().build()
    }
}

/// Shorten `text` to at most `length` characters, ending with the omission.
///
/// Text that already fits is returned unchanged. When the omission alone is
/// longer than `length`, the result is the omission cut to `length`.
///
/// ```
/// use inflect::text::{TruncateOptions, truncate};
///
/// let options = TruncateOptions::default();
/// assert_eq!(truncate("Hello World!", 12, &options), "Hello World!");
/// assert_eq!(truncate("Hello World!!", 12, &options), "Hello Wor...");
/// ```
pub fn truncate(text: &str, length: usize, options: &TruncateOptions) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }

    let omission = options.omission.as_str();
    let Some(room) = length.checked_sub(omission.chars().count()) else {
        return omission.chars().take(length).collect();
    };

    let cut = super::byte_offset(text, room);
    let stop = match &options.separator {
        Some(separator) => last_separator_before(text, separator, cut).unwrap_or(cut),
        None => cut,
    };

    let mut result = String::with_capacity(stop + omission.len());
    result.push_str(&text[..stop]);
    result.push_str(omission);
    result
}

/// Byte offset of the last separator occurrence that starts at or before
/// byte offset `limit`.
fn last_separator_before(text: &str, separator: &Separator, limit: usize) -> Option<usize> {
    let starts_here = |offset: usize| match separator {
        Separator::Text(needle) => text[offset..].starts_with(needle.as_str()),
        Separator::Pattern(pattern) => pattern
            .find_at(text, offset)
            .is_some_and(|found| found.start() == offset),
    };
    text.char_indices()
        .map(|(offset, _)| offset)
        .chain([text.len()])
        .take_while(|&offset| offset <= limit)
        .filter(|&offset| starts_here(offset))
        .last()
}
