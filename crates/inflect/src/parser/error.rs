//! Parse error types for rules files.

use thiserror::Error;

/// An error that occurred during parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Unexpected end of input.
    #[error("unexpected end of input at {line}:{column}")]
    UnexpectedEof { line: usize, column: usize },

    /// A directive keyword that is not recognized.
    #[error("unknown directive '{name}' at {line}:{column}{}", suggestion.as_ref().map(|s| format!(", did you mean '{s}'?")).unwrap_or_default())]
    UnknownDirective {
        line: usize,
        column: usize,
        name: String,
        suggestion: Option<String>,
    },
}

impl ParseError {
    /// The 1-based line and column the error points at.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::Syntax { line, column, .. }
            | ParseError::UnexpectedEof { line, column }
            | ParseError::UnknownDirective { line, column, .. } => (*line, *column),
        }
    }

    /// Error text without the location prefix.
    pub fn message(&self) -> String {
        match self {
            ParseError::Syntax { message, .. } => message.clone(),
            ParseError::UnexpectedEof { .. } => "unexpected end of input".to_string(),
            ParseError::UnknownDirective {
                name, suggestion, ..
            } => match suggestion {
                Some(s) => format!("unknown directive '{name}', did you mean '{s}'?"),
                None => format!("unknown directive '{name}'"),
            },
        }
    }
}
