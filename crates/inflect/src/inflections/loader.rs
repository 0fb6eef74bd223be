//! Loading rules files into [`Inflections`].

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{InflectionError, Inflections, LoadError};
use crate::parser::{Directive, ParseError, Statement, parse_rules};

impl Inflections {
    /// Apply the directives of a rules file.
    ///
    /// Directives are applied in file order, so later rules take priority over
    /// earlier ones exactly as if the registration methods had been called in
    /// sequence. Loading is all-or-nothing: if any directive fails, the tables
    /// are left as they were.
    ///
    /// Returns the number of directives applied.
    ///
    /// # Example
    ///
    /// ```
    /// use inflect::{Inflections, Inflector};
    ///
    /// let mut inflections = Inflections::english();
    /// inflections
    ///     .load_str(r#"
    ///         irregular "octopus" -> "octopodes";
    ///         acronym "API";
    ///     "#)
    ///     .unwrap();
    ///
    /// let inflector = Inflector::new(inflections);
    /// assert_eq!(inflector.pluralize("octopus"), "octopodes");
    /// assert_eq!(inflector.camelize("api_key", inflect::FirstLetter::Upper), "APIKey");
    /// ```
    pub fn load_str(&mut self, content: &str) -> Result<usize, LoadError> {
        self.load_internal(content, None)
    }

    /// Read and apply a rules file from disk. See [`Inflections::load_str`].
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.load_internal(&content, Some(path))
    }

    fn load_internal(&mut self, content: &str, path: Option<&Path>) -> Result<usize, LoadError> {
        let path_buf = || path.map_or_else(|| PathBuf::from("<string>"), Path::to_path_buf);

        let statements = parse_rules(content).map_err(|e| parse_failure(e, path_buf()))?;

        // Stage into a copy so a failing directive leaves `self` untouched.
        let mut staged = self.clone();
        for statement in &statements {
            staged
                .apply_statement(statement)
                .map_err(|source| LoadError::InvalidRule {
                    path: path_buf(),
                    line: statement.line,
                    source,
                })?;
        }
        *self = staged;

        debug!(
            path = %path_buf().display(),
            directives = statements.len(),
            "loaded inflection rules"
        );
        Ok(statements.len())
    }

    fn apply_statement(&mut self, statement: &Statement) -> Result<(), InflectionError> {
        match &statement.directive {
            Directive::Plural {
                pattern,
                replacement,
            } => self.plural(pattern, replacement.as_str()),
            Directive::Singular {
                pattern,
                replacement,
            } => self.singular(pattern, replacement.as_str()),
            Directive::Human {
                pattern,
                replacement,
            } => self.human(pattern, replacement.as_str()),
            Directive::Irregular { singular, plural } => self.irregular(singular, plural),
            Directive::Uncountable(words) => {
                self.uncountable(words);
                Ok(())
            }
            Directive::Acronym(words) => words.iter().try_for_each(|word| self.acronym(word)),
        }
    }
}

fn parse_failure(error: ParseError, path: PathBuf) -> LoadError {
    let (line, column) = error.position();
    LoadError::Parse {
        path,
        line,
        column,
        message: error.message(),
    }
}
