//! Margin stripping and indentation.

use bon::Builder;

/// Remove the common leading margin from every line.
///
/// The margin is the smallest run of leading spaces and tabs among lines that
/// contain something other than whitespace. Relative indentation is kept.
///
/// ```
/// let text = "    foo\n      bar\n    baz\n";
/// assert_eq!(inflect::text::strip_heredoc(text), "foo\n  bar\nbaz\n");
/// ```
pub fn strip_heredoc(text: &str) -> String {
    let margin = text
        .lines()
        .filter_map(|line| {
            let indent = leading_blanks(line);
            line[indent..]
                .chars()
                .next()
                .filter(|c| !c.is_whitespace())
                .map(|_| indent)
        })
        .min()
        .unwrap_or(0);
    if margin == 0 {
        return text.to_string();
    }

    text.split_inclusive('\n')
        .map(|line| {
            if leading_blanks(line) >= margin {
                &line[margin..]
            } else {
                line
            }
        })
        .collect()
}

/// Byte length of the leading run of spaces and tabs.
fn leading_blanks(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

/// Options for [`indent`] and [`indent_in_place`].
#[derive(Debug, Clone, Default, Builder)]
pub struct IndentOptions {
    /// Repeated `amount` times in front of each line. When unset, the first
    /// space or tab that starts a line is used, falling back to a space.
    #[builder(into)]
    indent_string: Option<String>,

    /// Also indent lines that are empty.
    #[builder(default)]
    indent_empty_lines: bool,
}

/// Indent every line of `text` by `amount` copies of the indent string.
///
/// ```
/// use inflect::text::{IndentOptions, indent};
///
/// assert_eq!(indent("foo\n  bar", 4, &IndentOptions::default()), "    foo\n      bar");
///
/// let options = IndentOptions::builder().indent_string("\t").build();
/// assert_eq!(indent("foo\nbar", 1, &options), "\tfoo\n\tbar");
/// ```
pub fn indent(text: &str, amount: usize, options: &IndentOptions) -> String {
    let mut indented = text.to_string();
    indent_in_place(&mut indented, amount, options);
    indented
}

/// Indent `text` in place.
///
/// Returns `None` when nothing changed, as for empty text or text made of
/// newlines only, so callers can detect a no-op without comparing strings.
/// With `indent_empty_lines`, empty text counts as one empty line and becomes
/// the indent itself.
pub fn indent_in_place<'a>(
    text: &'a mut String,
    amount: usize,
    options: &IndentOptions,
) -> Option<&'a mut String> {
    let unit = match &options.indent_string {
        Some(unit) => unit.as_str(),
        None => inferred_indent(text),
    };
    let prefix = unit.repeat(amount);
    if prefix.is_empty() {
        return None;
    }

    if text.is_empty() {
        if !options.indent_empty_lines {
            return None;
        }
        *text = prefix;
        return Some(text);
    }

    let mut changed = false;
    let mut indented = String::with_capacity(text.len() + prefix.len());
    for line in text.split_inclusive('\n') {
        if options.indent_empty_lines || line != "\n" {
            indented.push_str(&prefix);
            changed = true;
        }
        indented.push_str(line);
    }
    if !changed {
        return None;
    }
    *text = indented;
    Some(text)
}

/// The first space or tab that starts a line, or a space.
fn inferred_indent(text: &str) -> &'static str {
    let first_blank = text
        .lines()
        .find_map(|line| line.chars().next().filter(|&c| c == ' ' || c == '\t'));
    match first_blank {
        Some('\t') => "\t",
        _ => " ",
    }
}
