//! The inflection engine.
//!
//! [`Inflector`] owns a frozen copy of the [`Inflections`] tables and applies
//! them. Every transform is a pure function of its input and the tables.

mod case;
mod naming;
mod parameterize;

pub use naming::{dasherize, deconstantize, demodulize};
pub use parameterize::{parameterize, transliterate};

use crate::inflections::{Direction, Inflections, RuleSet};

/// Case of the first letter produced by [`Inflector::camelize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FirstLetter {
    /// `"active_model"` becomes `"ActiveModel"`.
    #[default]
    Upper,
    /// `"active_model"` becomes `"activeModel"`.
    Lower,
}

/// Applies a frozen set of [`Inflections`].
///
/// # Example
///
/// ```
/// use inflect::Inflector;
///
/// let inflector = Inflector::english();
/// assert_eq!(inflector.pluralize("person"), "people");
/// assert_eq!(inflector.singularize("people"), "person");
/// assert_eq!(inflector.tableize("RawScaledScorer"), "raw_scaled_scorers");
/// ```
#[derive(Debug, Clone)]
pub struct Inflector {
    inflections: Inflections,
}

impl Default for Inflector {
    fn default() -> Self {
        Self::english()
    }
}

impl Inflector {
    /// Freeze `inflections` into an engine.
    pub fn new(inflections: Inflections) -> Self {
        Self { inflections }
    }

    /// An engine over the built-in English tables.
    pub fn english() -> Self {
        Self::new(Inflections::english())
    }

    /// The tables this engine reads.
    pub fn inflections(&self) -> &Inflections {
        &self.inflections
    }

    /// Return the plural form of `word`.
    pub fn pluralize(&self, word: &str) -> String {
        self.apply_inflections(word, self.inflections.plurals(), Direction::ToPlural)
    }

    /// Return the plural form of `word` unless `count` is exactly one.
    ///
    /// ```
    /// use inflect::Inflector;
    ///
    /// let inflector = Inflector::english();
    /// assert_eq!(inflector.pluralize_count("post", 1), "post");
    /// assert_eq!(inflector.pluralize_count("post", 0), "posts");
    /// ```
    pub fn pluralize_count(&self, word: &str, count: i64) -> String {
        if count == 1 {
            word.to_string()
        } else {
            self.pluralize(word)
        }
    }

    /// Return the singular form of `word`.
    pub fn singularize(&self, word: &str) -> String {
        self.apply_inflections(word, self.inflections.singulars(), Direction::ToSingular)
    }

    /// Uncountables, then irregular pairs, then rules newest first.
    fn apply_inflections(&self, word: &str, rules: &RuleSet, direction: Direction) -> String {
        if word.is_empty() || self.inflections.is_uncountable(word) {
            return word.to_string();
        }
        if let Some(converted) = self.inflections.convert_irregular(word, direction) {
            return converted;
        }
        rules.apply(word).unwrap_or_else(|| word.to_string())
    }
}
