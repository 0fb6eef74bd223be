//! Acronym registry and the matcher used during case segmentation.

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};

use crate::inflections::error::InflectionError;

/// Compiled size limit for the alternation of every acronym.
const ALTERNATION_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Maps lowercase keys to the canonical casing of an acronym.
///
/// Acronyms keep their registration order: when several acronyms could match
/// at the same position, the one registered first is tried first.
///
/// ```
/// use inflect::AcronymRegistry;
///
/// let mut acronyms = AcronymRegistry::new();
/// acronyms.insert("html", "HTML").unwrap();
/// assert_eq!(acronyms.get("html"), Some("HTML"));
/// assert_eq!(acronyms.get("HTML"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AcronymRegistry {
    /// Canonical forms in registration order.
    values: Vec<String>,
    /// Lowercase key -> index into `values`.
    index: HashMap<String, usize>,
    /// Alternation of every canonical form, rebuilt on insert.
    any: Option<Regex>,
}

impl AcronymRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `value` under `key`. Re-registering a key keeps its position.
    ///
    /// On error the registry is left unchanged.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), InflectionError> {
        self.insert_within(key.into(), value.into(), ALTERNATION_SIZE_LIMIT)
    }

    fn insert_within(
        &mut self,
        key: String,
        value: String,
        size_limit: usize,
    ) -> Result<(), InflectionError> {
        if key.is_empty() || value.is_empty() {
            return Err(InflectionError::EmptyAcronym);
        }
        let existing = self.index.get(&key).copied();
        let candidates = self
            .values
            .iter()
            .enumerate()
            .map(|(position, current)| {
                if existing == Some(position) {
                    value.as_str()
                } else {
                    current.as_str()
                }
            })
            .chain(existing.is_none().then_some(value.as_str()));
        let any = compile_alternation(candidates, size_limit)?;

        match existing {
            Some(position) => self.values[position] = value,
            None => {
                self.index.insert(key, self.values.len());
                self.values.push(value);
            }
        }
        self.any = Some(any);
        Ok(())
    }

    /// Look up the canonical form for an exact key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&position| self.values[position].as_str())
    }

    /// Canonical forms in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.index.clear();
        self.any = None;
    }

    /// Whether any registered acronym occurs anywhere in `text`.
    pub fn appears_in(&self, text: &str) -> bool {
        self.any.as_ref().is_some_and(|any| any.is_match(text))
    }

    /// Find the first acronym (in registration order) that starts at byte
    /// offset `at` and whose following character satisfies `accept_next`.
    ///
    /// `accept_next` receives `None` at the end of the text.
    pub fn match_at(
        &self,
        text: &str,
        at: usize,
        accept_next: impl Fn(Option<char>) -> bool,
    ) -> Option<&str> {
        let rest = text.get(at..)?;
        self.values
            .iter()
            .filter(|value| rest.starts_with(value.as_str()))
            .find(|value| accept_next(rest[value.len()..].chars().next()))
            .map(String::as_str)
    }
}

fn compile_alternation<'a>(
    values: impl Iterator<Item = &'a str>,
    size_limit: usize,
) -> Result<Regex, InflectionError> {
    let alternation = values.map(regex::escape).collect::<Vec<_>>().join("|");
    RegexBuilder::new(&alternation)
        .size_limit(size_limit)
        .build()
        .map_err(|source| InflectionError::InvalidPattern {
            pattern: alternation.clone(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(words: &[&str]) -> AcronymRegistry {
        let mut acronyms = AcronymRegistry::new();
        for word in words {
            acronyms.insert(word.to_lowercase(), *word).unwrap();
        }
        acronyms
    }

    #[test]
    fn match_at_respects_registration_order() {
        let acronyms = registry(&["HTTP", "HTTPS"]);
        assert_eq!(acronyms.match_at("HTTPSFoo", 0, |_| true), Some("HTTP"));
    }

    #[test]
    fn match_at_falls_through_on_rejected_boundary() {
        let acronyms = registry(&["HTTP", "HTTPS"]);
        let found = acronyms.match_at("HTTPSFoo", 0, |next| next != Some('S'));
        assert_eq!(found, Some("HTTPS"));
    }

    #[test]
    fn reinsert_keeps_position() {
        let mut acronyms = registry(&["API", "SSL"]);
        acronyms.insert("api", "Api").unwrap();
        assert_eq!(acronyms.iter().collect::<Vec<_>>(), vec!["Api", "SSL"]);
    }

    #[test]
    fn appears_in_uses_all_acronyms() {
        let acronyms = registry(&["W3C", "PhD"]);
        assert!(acronyms.appears_in("IHeartW3C"));
        assert!(!acronyms.appears_in("phd"));
        assert!(!AcronymRegistry::new().appears_in("anything"));
    }

    #[test]
    fn failed_insert_leaves_registry_unchanged() {
        let mut acronyms = registry(&["API"]);
        let err = acronyms
            .insert_within("ssl".to_string(), "SSL".to_string(), 0)
            .unwrap_err();
        assert!(matches!(err, InflectionError::InvalidPattern { .. }));
        assert_eq!(acronyms.len(), 1);
        assert_eq!(acronyms.get("ssl"), None);
        assert!(acronyms.appears_in("MyAPI"));
        assert!(!acronyms.appears_in("SSL"));

        acronyms
            .insert_within("api".to_string(), "Api".to_string(), 0)
            .unwrap_err();
        assert_eq!(acronyms.get("api"), Some("API"));
    }

    #[test]
    fn empty_acronym_is_rejected() {
        let mut acronyms = AcronymRegistry::new();
        assert!(matches!(
            acronyms.insert("", ""),
            Err(InflectionError::EmptyAcronym)
        ));
    }
}
