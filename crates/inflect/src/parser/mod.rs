//! Rules file parser.
//!
//! This module parses rules files into a list of [`Statement`]s. The AST is
//! public so that tooling (checkers, formatters) can work on files without
//! applying them to a set of tables.

pub mod ast;
pub mod error;
mod file;

pub use ast::*;
pub use error::ParseError;
pub use file::parse_rules;
