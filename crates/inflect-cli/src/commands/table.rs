//! Implementation of the `inflect table` command.

use std::path::PathBuf;

use clap::Args;
use inflect::{FirstLetter, Inflector};
use miette::{IntoDiagnostic, Result};

use super::load_inflector;
use crate::output::table::{format_forms_table, WordForms};

/// Arguments for the table command.
#[derive(Debug, Args)]
pub struct TableArgs {
    /// Words to show
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Rules file applied on top of the English tables
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the table command.
pub fn run_table(args: TableArgs) -> Result<i32> {
    let inflector = load_inflector(args.rules.as_deref())?;
    let rows: Vec<WordForms> = args
        .words
        .iter()
        .map(|word| word_forms(&inflector, word))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows).into_diagnostic()?);
    } else {
        println!("{}", format_forms_table(&rows));
    }
    Ok(exitcode::OK)
}

fn word_forms(inflector: &Inflector, word: &str) -> WordForms {
    WordForms {
        word: word.to_string(),
        plural: inflector.pluralize(word),
        singular: inflector.singularize(word),
        camel: inflector.camelize(word, FirstLetter::Upper),
        underscore: inflector.underscore(word),
        human: inflector.humanize(word, true),
        table: inflector.tableize(word),
        foreign_key: inflector.foreign_key(word, true),
    }
}
