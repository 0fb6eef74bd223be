//! Rules file parser.
//!
//! Parses files of registration directives:
//!
//! ```text
//! // comments run to the end of the line
//! plural      /(quiz)$/      -> "${1}zes";
//! singular    /(quiz)zes$/   -> "${1}";
//! human       /_cnt$/        -> "_count";
//! irregular   "person"       -> "people";
//! uncountable "fish", "sheep";
//! acronym     "HTML", "SSL";
//! ```

use strsim::levenshtein;
use winnow::combinator::{alt, delimited, preceded, repeat, separated};
use winnow::prelude::*;
use winnow::token::{any, none_of, take_while};

use super::ast::{Directive, KEYWORDS, Statement};
use super::error::ParseError;

/// Parse an entire rules file into statements.
pub fn parse_rules(input: &str) -> Result<Vec<Statement>, ParseError> {
    let mut remaining = input;
    let mut statements = Vec::new();
    loop {
        if skip_ws_and_comments(&mut remaining).is_err() {
            return Err(error_at(input, remaining, "file"));
        }
        if remaining.is_empty() {
            return Ok(statements);
        }

        let (line, column) = calculate_position(input, remaining);
        let name = keyword(&mut remaining).map_err(|_| error_at(input, remaining, "file"))?;
        let parsed = match name {
            "plural" => rule_body
                .map(|(pattern, replacement)| Directive::Plural {
                    pattern,
                    replacement,
                })
                .parse_next(&mut remaining),
            "singular" => rule_body
                .map(|(pattern, replacement)| Directive::Singular {
                    pattern,
                    replacement,
                })
                .parse_next(&mut remaining),
            "human" => rule_body
                .map(|(pattern, replacement)| Directive::Human {
                    pattern,
                    replacement,
                })
                .parse_next(&mut remaining),
            "irregular" => pair_body
                .map(|(singular, plural)| Directive::Irregular { singular, plural })
                .parse_next(&mut remaining),
            "uncountable" => list_body.map(Directive::Uncountable).parse_next(&mut remaining),
            "acronym" => list_body.map(Directive::Acronym).parse_next(&mut remaining),
            other => {
                return Err(ParseError::UnknownDirective {
                    line,
                    column,
                    name: other.to_string(),
                    suggestion: suggest_keyword(other),
                });
            }
        };
        let directive = parsed.map_err(|_| error_at(input, remaining, name))?;
        statements.push(Statement {
            directive,
            line,
            column,
        });
    }
}

/// Build the error for a parse failure at the current position.
fn error_at(original: &str, remaining: &str, context: &str) -> ParseError {
    let (line, column) = calculate_position(original, remaining);
    match remaining.chars().next() {
        None => ParseError::UnexpectedEof { line, column },
        Some(found) => ParseError::Syntax {
            line,
            column,
            message: format!("unexpected character '{found}' in {context} directive"),
        },
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed_str[pos + 1..].chars().count() + 1,
        None => consumed_str.chars().count() + 1,
    };
    (line, column)
}

/// Closest directive keyword within a small edit distance.
fn suggest_keyword(name: &str) -> Option<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    KEYWORDS
        .iter()
        .map(|candidate| (levenshtein(name, candidate), *candidate))
        .filter(|&(distance, _)| distance > 0 && distance <= max_distance)
        .min_by_key(|&(distance, _)| distance)
        .map(|(_, candidate)| candidate.to_string())
}

/// Skip whitespace and line comments.
fn skip_ws_and_comments(input: &mut &str) -> ModalResult<()> {
    let _: Vec<()> = repeat(0.., alt((ws_only.void(), line_comment.void()))).parse_next(input)?;
    Ok(())
}

/// Parse whitespace (no comments).
fn ws_only<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_whitespace()).parse_next(input)
}

/// Parse a line comment: // ... newline
fn line_comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded("//", take_while(0.., |c| c != '\n')).parse_next(input)
}

/// Parse a directive keyword.
fn keyword<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)
}

/// Parse `/pattern/ -> "replacement";`
fn rule_body(input: &mut &str) -> ModalResult<(String, String)> {
    skip_ws_and_comments(input)?;
    let pattern = pattern_literal(input)?;
    arrow(input)?;
    let replacement = string_literal(input)?;
    terminator(input)?;
    Ok((pattern, replacement))
}

/// Parse `"singular" -> "plural";`
fn pair_body(input: &mut &str) -> ModalResult<(String, String)> {
    skip_ws_and_comments(input)?;
    let singular = string_literal(input)?;
    arrow(input)?;
    let plural = string_literal(input)?;
    terminator(input)?;
    Ok((singular, plural))
}

/// Parse `"word", "word", ...;`
fn list_body(input: &mut &str) -> ModalResult<Vec<String>> {
    skip_ws_and_comments(input)?;
    let words: Vec<String> = separated(
        1..,
        string_literal,
        (skip_ws_and_comments, ',', skip_ws_and_comments),
    )
    .parse_next(input)?;
    terminator(input)?;
    Ok(words)
}

/// Parse `->` with surrounding whitespace.
fn arrow(input: &mut &str) -> ModalResult<()> {
    (skip_ws_and_comments, "->", skip_ws_and_comments)
        .void()
        .parse_next(input)
}

/// Parse the closing `;`.
fn terminator(input: &mut &str) -> ModalResult<()> {
    (skip_ws_and_comments, ';').void().parse_next(input)
}

/// Parse a pattern: /content/
///
/// `\/` stands for a literal slash; every other escape is kept for the regex.
fn pattern_literal(input: &mut &str) -> ModalResult<String> {
    delimited(
        '/',
        repeat(
            0..,
            alt((
                "\\/".value("/"),
                ('\\', any).take(),
                take_while(1.., |c: char| c != '/' && c != '\\' && c != '\n'),
            )),
        ),
        '/',
    )
    .parse_next(input)
}

/// Parse a string: "content" with `\"` and `\\` escapes.
fn string_literal(input: &mut &str) -> ModalResult<String> {
    delimited(
        '"',
        repeat(
            0..,
            alt((
                "\\\"".value('"'),
                "\\\\".value('\\'),
                none_of(['"', '\\', '\n']),
            )),
        ),
        '"',
    )
    .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_unescapes_slash_only() {
        let mut input = r"/a\/b\d+$/ rest";
        assert_eq!(pattern_literal(&mut input).unwrap(), r"a/b\d+$");
        assert_eq!(input, " rest");
    }

    #[test]
    fn string_escapes() {
        let mut input = r#""say \"hi\" \\ bye""#;
        assert_eq!(string_literal(&mut input).unwrap(), r#"say "hi" \ bye"#);
    }

    #[test]
    fn position_counts_characters() {
        let source = "ab\nçd";
        assert_eq!(calculate_position(source, "d"), (2, 2));
        assert_eq!(calculate_position(source, source), (1, 1));
    }

    #[test]
    fn suggestion_requires_close_match() {
        assert_eq!(suggest_keyword("plurl").as_deref(), Some("plural"));
        assert_eq!(suggest_keyword("acronyms").as_deref(), Some("acronym"));
        assert_eq!(suggest_keyword("xyzzy"), None);
    }
}
