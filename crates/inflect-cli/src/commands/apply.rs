//! Implementation of the `inflect apply` command.

use std::path::PathBuf;

use clap::ValueEnum;
use inflect::{
    dasherize, deconstantize, demodulize, parameterize, transliterate, FirstLetter, Inflector,
};
use miette::IntoDiagnostic;
use serde::Serialize;

use super::load_inflector;

/// Transforms the apply command can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transform {
    Pluralize,
    Singularize,
    Camelize,
    Underscore,
    Dasherize,
    Humanize,
    Titleize,
    Tableize,
    Classify,
    ForeignKey,
    Demodulize,
    Deconstantize,
    Parameterize,
    Transliterate,
}

/// Arguments for the apply command.
#[derive(Debug, clap::Args)]
pub struct ApplyArgs {
    /// Transform to apply
    #[arg(value_enum)]
    pub transform: Transform,

    /// Words to transform
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Rules file applied on top of the English tables
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Count for pluralize; a count of 1 leaves words unchanged
    #[arg(long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Camelize with a lowercase first letter
    #[arg(long)]
    pub lower: bool,

    /// Humanize without capitalizing the first word
    #[arg(long)]
    pub no_capitalize: bool,

    /// Foreign key without the underscore before "id"
    #[arg(long)]
    pub no_underscore: bool,

    /// Separator for parameterize
    #[arg(long, default_value = "-")]
    pub separator: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one transformed word.
#[derive(Debug, Serialize)]
pub struct Applied<'a> {
    pub input: &'a str,
    pub output: String,
}

/// Run the apply command.
pub fn run_apply(args: ApplyArgs) -> miette::Result<i32> {
    let inflector = load_inflector(args.rules.as_deref())?;
    let results: Vec<Applied<'_>> = args
        .words
        .iter()
        .map(|word| Applied {
            input: word,
            output: apply(&inflector, &args, word),
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results).into_diagnostic()?);
    } else {
        for result in &results {
            println!("{}", result.output);
        }
    }
    Ok(exitcode::OK)
}

fn apply(inflector: &Inflector, args: &ApplyArgs, word: &str) -> String {
    match args.transform {
        Transform::Pluralize => match args.count {
            Some(count) => inflector.pluralize_count(word, count),
            None => inflector.pluralize(word),
        },
        Transform::Singularize => inflector.singularize(word),
        Transform::Camelize => {
            let first_letter = if args.lower {
                FirstLetter::Lower
            } else {
                FirstLetter::Upper
            };
            inflector.camelize(word, first_letter)
        }
        Transform::Underscore => inflector.underscore(word),
        Transform::Dasherize => dasherize(word),
        Transform::Humanize => inflector.humanize(word, !args.no_capitalize),
        Transform::Titleize => inflector.titleize(word),
        Transform::Tableize => inflector.tableize(word),
        Transform::Classify => inflector.classify(word),
        Transform::ForeignKey => inflector.foreign_key(word, !args.no_underscore),
        Transform::Demodulize => demodulize(word).to_string(),
        Transform::Deconstantize => deconstantize(word).to_string(),
        Transform::Parameterize => parameterize(word, &args.separator),
        Transform::Transliterate => transliterate(word),
    }
}
