//! Case transforms: camelize, underscore, humanize, titleize.
//!
//! Acronyms are honoured in both directions so that `camelize` and
//! `underscore` stay inverse for every registered acronym.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{FirstLetter, Inflector};
use crate::inflections::is_word_char;

/// `_`, `-` or `/` followed by the run it introduces. The slash is captured
/// so that it survives the replacement.
static SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[_-]|(/))([A-Za-z0-9]*)").expect("segment pattern should compile")
});

/// An uppercase run followed by a capitalized word: `HTMLTidy`.
static UPPER_RUN_HUMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z0-9]+)([A-Z][a-z])").expect("hump pattern should compile")
});

/// A lowercase letter or digit followed by an uppercase letter: `fooBar`.
static LOWER_HUMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("hump pattern should compile"));

static ALPHANUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9]+").expect("word pattern should compile"));

impl Inflector {
    /// Convert an underscored path into a camel-cased constant name.
    ///
    /// `/` separates namespaces and becomes `::`.
    ///
    /// ```
    /// use inflect::{FirstLetter, Inflector};
    ///
    /// let inflector = Inflector::english();
    /// assert_eq!(inflector.camelize("active_model/errors", FirstLetter::Upper), "ActiveModel::Errors");
    /// assert_eq!(inflector.camelize("active_model", FirstLetter::Lower), "activeModel");
    /// ```
    pub fn camelize(&self, term: &str, first_letter: FirstLetter) -> String {
        let acronyms = self.inflections().acronyms();
        let mut head = String::with_capacity(term.len());
        let rest = match first_letter {
            FirstLetter::Upper => {
                let run_end = term
                    .find(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
                    .unwrap_or(term.len());
                let run = &term[..run_end];
                match acronyms.get(run) {
                    Some(acronym) => head.push_str(acronym),
                    None => head.push_str(&capitalize(run)),
                }
                &term[run_end..]
            }
            FirstLetter::Lower => {
                let leading = acronyms.match_at(term, 0, |next| {
                    next.is_none_or(|c| !is_word_char(c) || c.is_ascii_uppercase() || c == '_')
                });
                match (leading, term.chars().next()) {
                    (Some(acronym), _) => {
                        head.push_str(&acronym.to_lowercase());
                        &term[acronym.len()..]
                    }
                    (None, Some(first)) if is_word_char(first) => {
                        head.extend(first.to_lowercase());
                        &term[first.len_utf8()..]
                    }
                    (None, _) => term,
                }
            }
        };
        head.push_str(rest);

        let camelized = SEGMENT.replace_all(&head, |caps: &Captures<'_>| {
            let slash = caps.get(1).map_or("", |m| m.as_str());
            let run = &caps[2];
            match acronyms.get(run) {
                Some(acronym) => format!("{slash}{acronym}"),
                None => format!("{slash}{}", capitalize(run)),
            }
        });
        camelized.replace('/', "::")
    }

    /// Convert a camel-cased constant name into an underscored path.
    ///
    /// ```
    /// use inflect::Inflector;
    ///
    /// let inflector = Inflector::english();
    /// assert_eq!(inflector.underscore("ActiveModel::Errors"), "active_model/errors");
    /// assert_eq!(inflector.underscore("SSLError"), "ssl_error");
    /// ```
    pub fn underscore(&self, camel_cased_word: &str) -> String {
        if !camel_cased_word.contains(|c: char| c.is_ascii_uppercase() || c == '-')
            && !camel_cased_word.contains("::")
        {
            return camel_cased_word.to_string();
        }
        let word = camel_cased_word.replace("::", "/");
        let word = self.lowercase_acronyms(&word);
        let word = UPPER_RUN_HUMP.replace_all(&word, "${1}_${2}");
        let word = LOWER_HUMP.replace_all(&word, "${1}_${2}");
        word.replace('-', "_").to_lowercase()
    }

    /// Lowercase every registered acronym that sits on a word or hump
    /// boundary, inserting `_` when it directly follows a letter or digit.
    fn lowercase_acronyms(&self, word: &str) -> String {
        let acronyms = self.inflections().acronyms();
        if !acronyms.appears_in(word) {
            return word.to_string();
        }

        let accept_next = |next: Option<char>| next.is_none_or(|c| !c.is_ascii_lowercase());
        let mut result = String::with_capacity(word.len() + 4);
        let mut prev: Option<char> = None;
        let mut offset = 0;
        while let Some(current) = word[offset..].chars().next() {
            let after_alphanumeric = prev.is_some_and(|p| p.is_ascii_alphanumeric());
            let at_boundary = prev.is_some_and(is_word_char) != is_word_char(current);
            if after_alphanumeric || at_boundary {
                if let Some(acronym) = acronyms.match_at(word, offset, accept_next) {
                    if after_alphanumeric {
                        result.push('_');
                    }
                    result.push_str(&acronym.to_lowercase());
                    prev = acronym.chars().last();
                    offset += acronym.len();
                    continue;
                }
            }
            result.push(current);
            prev = Some(current);
            offset += current.len_utf8();
        }
        result
    }

    /// Turn an attribute name into human-readable text.
    ///
    /// Applies the human rules, drops leading underscores and a trailing
    /// `_id`, turns underscores into spaces and restores acronyms. With
    /// `capitalize`, only the first character is uppercased.
    ///
    /// ```
    /// use inflect::Inflector;
    ///
    /// let inflector = Inflector::english();
    /// assert_eq!(inflector.humanize("employee_salary", true), "Employee salary");
    /// assert_eq!(inflector.humanize("author_id", true), "Author");
    /// assert_eq!(inflector.humanize("author_id", false), "author");
    /// ```
    pub fn humanize(&self, word: &str, capitalize: bool) -> String {
        let inflections = self.inflections();
        let result = inflections
            .humans()
            .apply(word)
            .unwrap_or_else(|| word.to_string());
        let result = result.trim_start_matches('_');
        let result = result.strip_suffix("_id").unwrap_or(result);
        let result = result.replace('_', " ");

        let acronyms = inflections.acronyms();
        let result = ALPHANUMERIC_RUN.replace_all(&result, |caps: &Captures<'_>| {
            let lower = caps[0].to_lowercase();
            match acronyms.get(&lower) {
                Some(acronym) => acronym.to_string(),
                None => lower,
            }
        });

        let mut chars = result.chars();
        match chars.next() {
            Some(first) if capitalize && is_word_char(first) => {
                first.to_uppercase().chain(chars).collect()
            }
            _ => result.into_owned(),
        }
    }

    /// Capitalize every word of the humanized form.
    ///
    /// A letter directly after an apostrophe that follows a word character is
    /// left alone, so contractions stay intact.
    ///
    /// ```
    /// use inflect::Inflector;
    ///
    /// let inflector = Inflector::english();
    /// assert_eq!(inflector.titleize("man from the boondocks"), "Man From The Boondocks");
    /// assert_eq!(inflector.titleize("x-men: the last stand"), "X Men: The Last Stand");
    /// assert_eq!(inflector.titleize("string_ending_with_id"), "String Ending With");
    /// ```
    pub fn titleize(&self, word: &str) -> String {
        let humanized = self.humanize(&self.underscore(word), true);
        let mut result = String::with_capacity(humanized.len());
        let mut before_prev: Option<char> = None;
        let mut prev: Option<char> = None;
        for c in humanized.chars() {
            let at_boundary = !prev.is_some_and(is_word_char);
            let after_contraction =
                prev.is_some_and(is_apostrophe) && before_prev.is_some_and(is_word_char);
            if c.is_ascii_lowercase() && at_boundary && !after_contraction {
                result.push(c.to_ascii_uppercase());
            } else {
                result.push(c);
            }
            before_prev = prev;
            prev = Some(c);
        }
        result
    }
}

/// First character uppercased, the rest lowercased.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '`')
}
