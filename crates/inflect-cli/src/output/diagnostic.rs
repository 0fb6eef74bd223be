//! Miette diagnostic wrapper for rules file errors.

use std::path::Path;

use inflect::ParseError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for rules file errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(inflect::rules))]
pub struct RulesDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,

    line: usize,
    column: usize,
}

impl RulesDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let (line, column) = err.position();
        let (message, help) = match err {
            ParseError::UnknownDirective {
                name, suggestion, ..
            } => (
                format!("unknown directive '{name}'"),
                suggestion.as_ref().map(|s| format!("did you mean '{s}'?")),
            ),
            ParseError::Syntax { .. } | ParseError::UnexpectedEof { .. } => (err.message(), None),
        };
        let mut diagnostic = Self::at(path, content, line, column, message);
        diagnostic.help = help;
        diagnostic
    }

    /// Create a diagnostic pointing at a 1-based line and column.
    pub fn at(path: &Path, content: &str, line: usize, column: usize, message: String) -> Self {
        RulesDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (byte_offset(content, line, column), 1).into(),
            message,
            help: None,
            line,
            column,
        }
    }

    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Byte offset of a 1-based line and character column, clamped to the
/// content so miette never receives an out-of-bounds span.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let rest = content.get(line_start..).unwrap_or_default();
    let within = rest
        .char_indices()
        .take_while(|&(_, c)| c != '\n')
        .nth(column.saturating_sub(1))
        .map_or_else(|| rest.find('\n').unwrap_or(rest.len()), |(offset, _)| offset);
    (line_start + within).min(content.len())
}

#[cfg(test)]
mod tests {
    use inflect::parser::parse_rules;

    use super::*;

    #[test]
    fn offset_counts_characters_within_line() {
        let content = "acronym \"API\";\nplüral /x/;\n";
        assert_eq!(byte_offset(content, 1, 1), 0);
        assert_eq!(byte_offset(content, 2, 1), 15);
        assert_eq!(byte_offset(content, 2, 4), 19);
    }

    #[test]
    fn offset_is_clamped() {
        assert_eq!(byte_offset("abc", 1, 10), 3);
        assert_eq!(byte_offset("abc", 7, 1), 3);
    }

    #[test]
    fn unknown_directive_moves_suggestion_to_help() {
        let content = "plurl /x/ -> \"y\";";
        let err = parse_rules(content).unwrap_err();
        let diagnostic = RulesDiagnostic::from_parse_error(Path::new("rules.inflect"), content, &err);
        assert_eq!(diagnostic.message(), "unknown directive 'plurl'");
        assert_eq!(diagnostic.help.as_deref(), Some("did you mean 'plural'?"));
        assert_eq!(diagnostic.position(), (1, 1));
    }
}
