//! URL slugs and ASCII transliteration.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Replacement for characters with no ASCII approximation.
const REPLACEMENT: char = '?';

/// Runs of characters that cannot appear in a slug.
static UNSAFE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\-_]+").expect("slug pattern should compile"));

/// Letters that do not decompose into an ASCII base plus combining marks.
const SPECIAL_LETTERS: &[(char, &str)] = &[
    ('ß', "ss"),
    ('ẞ', "SS"),
    ('æ', "ae"),
    ('Æ', "AE"),
    ('ø', "o"),
    ('Ø', "O"),
    ('œ', "oe"),
    ('Œ', "OE"),
    ('đ', "d"),
    ('Đ', "D"),
    ('ð', "d"),
    ('Ð', "D"),
    ('ł', "l"),
    ('Ł', "L"),
    ('þ', "th"),
    ('Þ', "Th"),
    ('ı', "i"),
];

/// Approximate `text` with ASCII characters.
///
/// Accented letters lose their accents, a few special letters are spelled
/// out and everything else outside ASCII becomes `?`.
///
/// ```
/// assert_eq!(inflect::transliterate("Ærøskøbing"), "AEroskobing");
/// assert_eq!(inflect::transliterate("crème brûlée"), "creme brulee");
/// assert_eq!(inflect::transliterate("日本"), "??");
/// ```
pub fn transliterate(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.nfd().filter(|&c| !is_combining_mark(c)) {
        if c.is_ascii() {
            result.push(c);
        } else if let Some((_, spelled)) = SPECIAL_LETTERS.iter().find(|(letter, _)| *letter == c) {
            result.push_str(spelled);
        } else {
            result.push(REPLACEMENT);
        }
    }
    result
}

/// Turn `text` into a lowercase URL slug joined by `separator`.
///
/// Runs of characters other than ASCII letters, digits, `-` and `_` become a
/// single separator; repeated separators collapse and leading or trailing
/// ones are dropped. An empty separator deletes the runs.
///
/// ```
/// assert_eq!(inflect::parameterize("Donald E. Knuth", "-"), "donald-e-knuth");
/// assert_eq!(inflect::parameterize("Random text with *(bad)* characters", "_"), "random_text_with_bad_characters");
/// assert_eq!(inflect::parameterize("Allow_Under_Scores", ""), "allow_under_scores");
/// ```
pub fn parameterize(text: &str, separator: &str) -> String {
    let ascii = transliterate(text);
    let slug = UNSAFE_RUNS.replace_all(&ascii, NoExpand(separator));
    if separator.is_empty() {
        return slug.to_lowercase();
    }
    let collapsed = collapse_repeats(&slug, separator);
    let trimmed = collapsed.strip_prefix(separator).unwrap_or(&collapsed);
    let trimmed = trimmed.strip_suffix(separator).unwrap_or(trimmed);
    trimmed.to_lowercase()
}

/// Replace each run of back-to-back `separator`s with a single one.
fn collapse_repeats(slug: &str, separator: &str) -> String {
    let mut collapsed = String::with_capacity(slug.len());
    let mut rest = slug;
    while let Some(start) = rest.find(separator) {
        collapsed.push_str(&rest[..start]);
        collapsed.push_str(separator);
        rest = &rest[start + separator.len()..];
        while let Some(tail) = rest.strip_prefix(separator) {
            rest = tail;
        }
    }
    collapsed.push_str(rest);
    collapsed
}
