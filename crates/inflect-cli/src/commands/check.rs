//! Implementation of the `inflect check` command.

use std::fs::read_to_string;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use inflect::parser::parse_rules;
use inflect::{Inflections, LoadError};
use miette::{IntoDiagnostic, Report};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::debug;

use crate::output::RulesDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Rules files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Outcome of checking one file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    directives: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorReport>,
}

#[derive(Debug, Serialize)]
struct ErrorReport {
    line: usize,
    column: usize,
    message: String,
}

enum Outcome {
    Valid(usize),
    Unreadable(String),
    Invalid(Box<RulesDiagnostic>),
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut reports = Vec::new();
    let mut code = exitcode::OK;

    for path in &args.files {
        let outcome = check_file(path);
        let file = path.display().to_string();
        let report = match outcome {
            Outcome::Valid(directives) => {
                if !args.json {
                    println!(
                        "{} {file}: {directives} directives",
                        "ok".if_supports_color(Stream::Stdout, |text| text.green())
                    );
                }
                FileReport {
                    file,
                    valid: true,
                    directives: Some(directives),
                    error: None,
                }
            }
            Outcome::Unreadable(message) => {
                code = exitcode::NOINPUT;
                if !args.json {
                    eprintln!(
                        "{} {file}: {message}",
                        "error".if_supports_color(Stream::Stderr, |text| text.red())
                    );
                }
                FileReport {
                    file,
                    valid: false,
                    directives: None,
                    error: Some(ErrorReport {
                        line: 0,
                        column: 0,
                        message,
                    }),
                }
            }
            Outcome::Invalid(diagnostic) => {
                if code == exitcode::OK {
                    code = exitcode::DATAERR;
                }
                let (line, column) = diagnostic.position();
                let message = diagnostic.message().to_string();
                if !args.json {
                    eprintln!("{:?}", Report::new(*diagnostic));
                }
                FileReport {
                    file,
                    valid: false,
                    directives: None,
                    error: Some(ErrorReport {
                        line,
                        column,
                        message,
                    }),
                }
            }
        };
        reports.push(report);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports).into_diagnostic()?);
    }
    Ok(code)
}

fn check_file(path: &Path) -> Outcome {
    let content = match read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Outcome::Unreadable("file not found".to_string());
        }
        Err(err) => return Outcome::Unreadable(err.to_string()),
    };

    if let Err(err) = parse_rules(&content) {
        return Outcome::Invalid(Box::new(RulesDiagnostic::from_parse_error(
            path, &content, &err,
        )));
    }

    // Syntax is fine; compiling the rules catches bad patterns.
    match Inflections::new().load_str(&content) {
        Ok(directives) => {
            debug!(path = %path.display(), directives, "rules file is valid");
            Outcome::Valid(directives)
        }
        Err(LoadError::InvalidRule { line, source, .. }) => Outcome::Invalid(Box::new(
            RulesDiagnostic::at(path, &content, line, 1, source.to_string()),
        )),
        Err(err) => Outcome::Unreadable(err.to_string()),
    }
}
