//! Irregular singular/plural pairs.

/// An explicit singular/plural pair that bypasses the rule lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Irregular {
    pub singular: String,
    pub plural: String,
}

/// Which side of an irregular pair a word is being converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    ToPlural,
    ToSingular,
}

impl Irregular {
    /// Convert `word` if it ends with either side of the pair.
    ///
    /// A word already in the target form is returned unchanged; a word in the
    /// source form has that suffix swapped. The first letter of the swapped
    /// suffix keeps the original letter's case.
    pub(crate) fn convert(&self, word: &str, direction: Direction) -> Option<String> {
        let (source, target) = match direction {
            Direction::ToPlural => (&self.singular, &self.plural),
            Direction::ToSingular => (&self.plural, &self.singular),
        };
        if suffix_start(word, target).is_some() {
            return Some(word.to_string());
        }
        let start = suffix_start(word, source)?;
        let mut result = String::with_capacity(start + target.len());
        result.push_str(&word[..start]);
        let original_first = word[start..].chars().next();
        let mut target_chars = target.chars();
        if let Some(first) = target_chars.next() {
            match original_first {
                Some(c) if c.is_uppercase() => result.extend(first.to_uppercase()),
                Some(c) if c.is_lowercase() => result.extend(first.to_lowercase()),
                _ => result.push(first),
            }
        }
        result.push_str(target_chars.as_str());
        Some(result)
    }
}

/// Byte offset at which `suffix` starts in `word`, comparing case-insensitively.
pub(crate) fn suffix_start(word: &str, suffix: &str) -> Option<usize> {
    if suffix.is_empty() {
        return None;
    }
    let mut start = word.len();
    let mut word_chars = word.char_indices().rev();
    for expected in suffix.chars().rev() {
        let (offset, actual) = word_chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        start = offset;
    }
    Some(start)
}
