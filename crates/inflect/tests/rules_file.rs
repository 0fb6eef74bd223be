//! Integration tests for the rules file parser.

use inflect::parser::{Directive, KEYWORDS, ParseError, Statement, parse_rules};

fn directives(input: &str) -> Vec<Directive> {
    parse_rules(input)
        .unwrap()
        .into_iter()
        .map(|statement| statement.directive)
        .collect()
}

// =========================================================================
// Directives
// =========================================================================

#[test]
fn parse_empty_file() {
    assert!(parse_rules("").unwrap().is_empty());
    assert!(parse_rules("   \n\n  ").unwrap().is_empty());
    assert!(parse_rules("// only a comment\n").unwrap().is_empty());
}

#[test]
fn parse_rule_directives() {
    let parsed = directives(
        r#"
        plural /(quiz)$/ -> "${1}zes";
        singular /(quiz)zes$/ -> "${1}";
        human /_cnt$/ -> "_count";
        "#,
    );
    assert_eq!(
        parsed,
        vec![
            Directive::Plural {
                pattern: "(quiz)$".to_string(),
                replacement: "${1}zes".to_string(),
            },
            Directive::Singular {
                pattern: "(quiz)zes$".to_string(),
                replacement: "${1}".to_string(),
            },
            Directive::Human {
                pattern: "_cnt$".to_string(),
                replacement: "_count".to_string(),
            },
        ]
    );
}

#[test]
fn parse_irregular() {
    let parsed = directives(r#"irregular "person" -> "people";"#);
    assert_eq!(
        parsed,
        vec![Directive::Irregular {
            singular: "person".to_string(),
            plural: "people".to_string(),
        }]
    );
}

#[test]
fn parse_word_lists() {
    let parsed = directives(
        r#"
        uncountable "fish", "sheep" , "rice";
        acronym "HTML";
        "#,
    );
    assert_eq!(
        parsed,
        vec![
            Directive::Uncountable(vec![
                "fish".to_string(),
                "sheep".to_string(),
                "rice".to_string(),
            ]),
            Directive::Acronym(vec!["HTML".to_string()]),
        ]
    );
}

#[test]
fn parse_list_across_lines_with_comments() {
    let parsed = directives(
        r#"
        uncountable
            "equipment", // gear
            "information";
        "#,
    );
    assert_eq!(
        parsed,
        vec![Directive::Uncountable(vec![
            "equipment".to_string(),
            "information".to_string(),
        ])]
    );
}

#[test]
fn pattern_escapes() {
    let parsed = directives(r#"plural /a\/b\s+$/ -> "c";"#);
    assert_eq!(
        parsed,
        vec![Directive::Plural {
            pattern: r"a/b\s+$".to_string(),
            replacement: "c".to_string(),
        }]
    );
}

#[test]
fn string_escapes() {
    let parsed = directives(r#"acronym "say \"hi\"", "back\\slash";"#);
    assert_eq!(
        parsed,
        vec![Directive::Acronym(vec![
            r#"say "hi""#.to_string(),
            r"back\slash".to_string(),
        ])]
    );
}

#[test]
fn statements_record_positions() {
    let statements = parse_rules("// header\n\n  acronym \"API\";\nirregular \"a\" -> \"b\";").unwrap();
    let positions: Vec<(usize, usize)> = statements
        .iter()
        .map(|statement| (statement.line, statement.column))
        .collect();
    assert_eq!(positions, vec![(3, 3), (4, 1)]);
}

#[test]
fn directive_keyword_round_trips() {
    let statements: Vec<Statement> = parse_rules(
        r#"plural /x/ -> "y"; singular /x/ -> "y"; human /x/ -> "y";
           irregular "x" -> "y"; uncountable "x"; acronym "X";"#,
    )
    .unwrap();
    let keywords: Vec<&str> = statements
        .iter()
        .map(|statement| statement.directive.keyword())
        .collect();
    assert_eq!(keywords, KEYWORDS);
}

// =========================================================================
// Errors
// =========================================================================

#[test]
fn unknown_directive_suggests_keyword() {
    let err = parse_rules("plurl /x/ -> \"y\";").unwrap_err();
    assert!(matches!(
        &err,
        ParseError::UnknownDirective { suggestion: Some(s), .. } if s == "plural"
    ));
    insta::assert_snapshot!(err.to_string(), @"unknown directive 'plurl' at 1:1, did you mean 'plural'?");
}

#[test]
fn unknown_directive_without_suggestion() {
    let err = parse_rules("\n  frobnicate \"x\";").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"unknown directive 'frobnicate' at 2:3");
}

#[test]
fn missing_semicolon() {
    let err = parse_rules("acronym \"API\"\nacronym \"SSL\";").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"syntax error at 2:1: unexpected character 'a' in acronym directive");
}

#[test]
fn missing_arrow() {
    let err = parse_rules("irregular \"person\" \"people\";").unwrap_err();
    assert_eq!(err.position(), (1, 20));
    insta::assert_snapshot!(err.message(), @"unexpected character '\"' in irregular directive");
}

#[test]
fn unterminated_pattern_hits_end_of_input() {
    let err = parse_rules("plural /(quiz$").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEof { line: 1, .. }));
}

#[test]
fn empty_word_list_is_rejected() {
    let err = parse_rules("uncountable ;").unwrap_err();
    assert_eq!(err.position(), (1, 13));
}

#[test]
fn stray_character_at_top_level() {
    let err = parse_rules("acronym \"API\";\n;").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"syntax error at 2:1: unexpected character ';' in file directive");
}
