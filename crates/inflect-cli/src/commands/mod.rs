//! CLI command implementations.

mod apply;
mod check;
mod table;

use std::fs::read_to_string;
use std::path::Path;

use inflect::{Inflections, Inflector, LoadError};
use miette::{miette, Result};
use tracing::debug;

use crate::output::RulesDiagnostic;

pub use apply::{run_apply, ApplyArgs};
pub use check::{run_check, CheckArgs};
pub use table::{run_table, TableArgs};

/// Build an inflector over the English tables plus an optional rules file.
fn load_inflector(rules: Option<&Path>) -> Result<Inflector> {
    let mut inflections = Inflections::english();
    if let Some(path) = rules {
        let content = read_to_string(path)
            .map_err(|e| miette!("Failed to read rules file {}: {}", path.display(), e))?;
        match inflections.load_str(&content) {
            Ok(count) => debug!(path = %path.display(), directives = count, "applied rules file"),
            Err(err) => return Err(load_failure(path, &content, err)),
        }
    }
    Ok(Inflector::new(inflections))
}

/// Turn a load failure into a report pointing into the rules file.
fn load_failure(path: &Path, content: &str, err: LoadError) -> miette::Report {
    match err {
        LoadError::Parse {
            line,
            column,
            message,
            ..
        } => RulesDiagnostic::at(path, content, line, column, message).into(),
        LoadError::InvalidRule { line, source, .. } => {
            RulesDiagnostic::at(path, content, line, 1, source.to_string()).into()
        }
        LoadError::Io { .. } => miette!("{err}"),
    }
}
