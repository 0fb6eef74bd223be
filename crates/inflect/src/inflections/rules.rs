//! Ordered pattern/replacement rules.

use regex::{Regex, RegexBuilder};
use tracing::trace;

use crate::inflections::error::InflectionError;

/// A single inflection rule: a case-insensitive pattern and the replacement
/// template applied to its first match.
///
/// Replacement templates use the `regex` crate syntax for group references
/// (`$1`, `${1}`, `$name`). Prefer the braced form when a group reference is
/// followed by letters, since `$1es` names a group called `1es`.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    replacement: String,
}

impl Rule {
    /// Compile a rule. The pattern is always matched case-insensitively.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, InflectionError> {
        let compiled = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| InflectionError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self {
            pattern: compiled,
            replacement: replacement.into(),
        })
    }

    /// The source text of the pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// The replacement template.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Apply the rule, returning `None` when the pattern does not match.
    pub fn apply(&self, word: &str) -> Option<String> {
        if !self.pattern.is_match(word) {
            return None;
        }
        Some(
            self.pattern
                .replace(word, self.replacement.as_str())
                .into_owned(),
        )
    }
}

/// Rules for one direction (plural, singular or human).
///
/// Rules are stored in registration order and tried newest first; the first
/// rule that matches wins.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule with the highest priority.
    pub fn push(&mut self, rule: Rule) {
        trace!(
            pattern = rule.pattern(),
            replacement = rule.replacement(),
            "registered rule"
        );
        self.rules.push(rule);
    }

    /// Apply the highest-priority matching rule.
    pub fn apply(&self, word: &str) -> Option<String> {
        self.rules.iter().rev().find_map(|rule| rule.apply(word))
    }

    /// Iterate rules in priority order (newest first).
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn clear(&mut self) {
        self.rules.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_rule_wins() {
        let mut rules = RuleSet::new();
        rules.push(Rule::new("$", "s").unwrap());
        rules.push(Rule::new("(x)$", "${1}es").unwrap());
        assert_eq!(rules.apply("box").as_deref(), Some("boxes"));
        assert_eq!(rules.apply("cat").as_deref(), Some("cats"));
    }

    #[test]
    fn only_first_occurrence_is_replaced() {
        let rule = Rule::new("a", "o").unwrap();
        assert_eq!(rule.apply("banana").as_deref(), Some("bonana"));
    }

    #[test]
    fn patterns_ignore_case() {
        let rule = Rule::new("(quiz)$", "${1}zes").unwrap();
        assert_eq!(rule.apply("QUIZ").as_deref(), Some("QUIZzes"));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = Rule::new("(unclosed", "x").unwrap_err();
        assert!(matches!(err, InflectionError::InvalidPattern { .. }));
    }
}
