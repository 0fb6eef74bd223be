//! Text helpers that do not consult the inflection tables.
//!
//! Offsets and lengths are counted in characters (Unicode scalar values),
//! never in bytes, so no helper can split a multibyte character.

mod access;
mod heredoc;
mod truncate;
mod whitespace;

pub use access::{at, at_match, at_range, first, from, last, to};
pub use heredoc::{IndentOptions, indent, indent_in_place, strip_heredoc};
pub use truncate::{Separator, TruncateOptions, truncate};
pub use whitespace::{exclude, remove, squish, squish_in_place};

/// Byte offset of the character at `index`, or `text.len()` past the end.
fn byte_offset(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map_or(text.len(), |(offset, _)| offset)
}

/// Resolve a possibly negative character index against `len` characters.
///
/// Negative indices count from the end. Returns `None` when the index lies
/// before the start.
fn resolve_index(index: isize, len: usize) -> Option<usize> {
    if index >= 0 {
        Some(index.unsigned_abs())
    } else {
        len.checked_sub(index.unsigned_abs())
    }
}
