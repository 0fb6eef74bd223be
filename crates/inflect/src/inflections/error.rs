//! Error types for inflection configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// An invalid registration passed to [`Inflections`](crate::Inflections).
#[derive(Debug, Error)]
pub enum InflectionError {
    /// The rule pattern is not a valid regular expression.
    #[error("invalid rule pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// An irregular pair with an empty side.
    #[error("irregular pair '{singular}' -> '{plural}' must not contain an empty word")]
    EmptyIrregular { singular: String, plural: String },

    /// An acronym with no characters.
    #[error("acronym must not be empty")]
    EmptyAcronym,
}

/// Errors that occur while loading a rules file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading the rules file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Syntax error with file location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// A well-formed directive that the tables rejected.
    #[error("{path}:{line}: {source}")]
    InvalidRule {
        path: PathBuf,
        line: usize,
        #[source]
        source: InflectionError,
    },
}
