//! Inflection tables: rules, irregular pairs, uncountable words and acronyms.
//!
//! [`Inflections`] is the configuration object. It is populated once (from
//! the built-in English tables, the registration methods, or a rules file)
//! and then frozen into an [`Inflector`](crate::Inflector), which only ever
//! reads it.

mod acronyms;
mod english;
mod error;
mod irregular;
mod loader;
mod rules;

use std::collections::BTreeSet;

pub use acronyms::AcronymRegistry;
pub use error::{InflectionError, LoadError};
pub use irregular::Irregular;
pub use rules::{Rule, RuleSet};

pub(crate) use irregular::Direction;

/// A group of tables that [`Inflections::clear`] can reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    All,
    Plurals,
    Singulars,
    Humans,
    Irregulars,
    Uncountables,
    Acronyms,
}

/// The complete set of tables consulted by the inflection engine.
///
/// # Example
///
/// ```
/// use inflect::{Inflections, Inflector};
///
/// let mut inflections = Inflections::english();
/// inflections.irregular("octopus", "octopodes").unwrap();
/// inflections.acronym("HTML").unwrap();
///
/// let inflector = Inflector::new(inflections);
/// assert_eq!(inflector.pluralize("octopus"), "octopodes");
/// assert_eq!(inflector.underscore("HTMLTidy"), "html_tidy");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Inflections {
    plurals: RuleSet,
    singulars: RuleSet,
    humans: RuleSet,
    irregulars: Vec<Irregular>,
    uncountables: BTreeSet<String>,
    acronyms: AcronymRegistry,
}

impl Inflections {
    /// Create empty tables. Every word inflects to itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create tables populated with the built-in English rules.
    pub fn english() -> Self {
        let mut inflections = Self::new();
        for (pattern, replacement) in english::PLURALS {
            inflections
                .plural(pattern, *replacement)
                .expect("built-in plural rules should compile");
        }
        for (pattern, replacement) in english::SINGULARS {
            inflections
                .singular(pattern, *replacement)
                .expect("built-in singular rules should compile");
        }
        for (singular, plural) in english::IRREGULARS {
            inflections
                .irregular(singular, plural)
                .expect("built-in irregulars should be non-empty");
        }
        inflections.uncountable(english::UNCOUNTABLES.iter().copied());
        inflections
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Register a pluralization rule with the highest priority.
    pub fn plural(
        &mut self,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<(), InflectionError> {
        self.plurals.push(Rule::new(pattern, replacement)?);
        Ok(())
    }

    /// Register a singularization rule with the highest priority.
    pub fn singular(
        &mut self,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<(), InflectionError> {
        self.singulars.push(Rule::new(pattern, replacement)?);
        Ok(())
    }

    /// Register a rule applied by `humanize` before anything else.
    pub fn human(
        &mut self,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<(), InflectionError> {
        self.humans.push(Rule::new(pattern, replacement)?);
        Ok(())
    }

    /// Register an irregular singular/plural pair.
    ///
    /// Both words stop being uncountable, and an earlier pair with the same
    /// singular is replaced.
    pub fn irregular(&mut self, singular: &str, plural: &str) -> Result<(), InflectionError> {
        if singular.is_empty() || plural.is_empty() {
            return Err(InflectionError::EmptyIrregular {
                singular: singular.to_string(),
                plural: plural.to_string(),
            });
        }
        self.uncountables.remove(&singular.to_lowercase());
        self.uncountables.remove(&plural.to_lowercase());
        self.irregulars
            .retain(|pair| !pair.singular.eq_ignore_ascii_case(singular));
        self.irregulars.push(Irregular {
            singular: singular.to_string(),
            plural: plural.to_string(),
        });
        Ok(())
    }

    /// Mark words as uncountable. Matching is case-insensitive.
    pub fn uncountable<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.uncountables
            .extend(words.into_iter().map(|word| word.as_ref().to_lowercase()));
    }

    /// Register an acronym under its lowercase form, e.g. `"HTML"`.
    pub fn acronym(&mut self, word: &str) -> Result<(), InflectionError> {
        self.acronyms.insert(word.to_lowercase(), word)
    }

    /// Reset one group of tables, or all of them.
    pub fn clear(&mut self, scope: Scope) {
        match scope {
            Scope::All => *self = Self::new(),
            Scope::Plurals => self.plurals.clear(),
            Scope::Singulars => self.singulars.clear(),
            Scope::Humans => self.humans.clear(),
            Scope::Irregulars => self.irregulars.clear(),
            Scope::Uncountables => self.uncountables.clear(),
            Scope::Acronyms => self.acronyms.clear(),
        }
    }

    // =========================================================================
    // Table Access
    // =========================================================================

    pub fn plurals(&self) -> &RuleSet {
        &self.plurals
    }

    pub fn singulars(&self) -> &RuleSet {
        &self.singulars
    }

    pub fn humans(&self) -> &RuleSet {
        &self.humans
    }

    /// Irregular pairs in registration order.
    pub fn irregulars(&self) -> &[Irregular] {
        &self.irregulars
    }

    /// Uncountable words, lowercased and sorted.
    pub fn uncountables(&self) -> impl Iterator<Item = &str> {
        self.uncountables.iter().map(String::as_str)
    }

    pub fn acronyms(&self) -> &AcronymRegistry {
        &self.acronyms
    }

    /// Whether `word`, or its trailing word, is uncountable.
    ///
    /// The trailing word is the run of word characters after the last
    /// non-word character, so `"black sheep"` is uncountable while
    /// `"old_sheep"` is not.
    pub fn is_uncountable(&self, word: &str) -> bool {
        if self.uncountables.is_empty() {
            return false;
        }
        let lower = word.to_lowercase();
        if self.uncountables.contains(&lower) {
            return true;
        }
        let last_word = lower
            .char_indices()
            .rev()
            .find(|&(_, c)| !is_word_char(c))
            .map_or(0, |(offset, c)| offset + c.len_utf8());
        self.uncountables.contains(&lower[last_word..])
    }

    /// Apply the newest irregular pair that covers `word`.
    pub(crate) fn convert_irregular(&self, word: &str, direction: Direction) -> Option<String> {
        self.irregulars
            .iter()
            .rev()
            .find_map(|pair| pair.convert(word, direction))
    }
}

/// Word characters as understood by word-boundary checks.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
