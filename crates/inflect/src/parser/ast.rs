//! Public AST types for rules files.
//!
//! These types are public to enable external tooling (linters, formatters, etc.).

/// One directive of a rules file together with where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub directive: Directive,
    /// 1-based line of the directive keyword.
    pub line: usize,
    /// 1-based column of the directive keyword.
    pub column: usize,
}

/// A registration request parsed from a rules file.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// `plural /pattern/ -> "replacement";`
    Plural { pattern: String, replacement: String },
    /// `singular /pattern/ -> "replacement";`
    Singular { pattern: String, replacement: String },
    /// `human /pattern/ -> "replacement";`
    Human { pattern: String, replacement: String },
    /// `irregular "singular" -> "plural";`
    Irregular { singular: String, plural: String },
    /// `uncountable "word", "word";`
    Uncountable(Vec<String>),
    /// `acronym "HTML", "SSL";`
    Acronym(Vec<String>),
}

impl Directive {
    /// The keyword that introduces this directive.
    pub fn keyword(&self) -> &'static str {
        match self {
            Directive::Plural { .. } => "plural",
            Directive::Singular { .. } => "singular",
            Directive::Human { .. } => "human",
            Directive::Irregular { .. } => "irregular",
            Directive::Uncountable(_) => "uncountable",
            Directive::Acronym(_) => "acronym",
        }
    }
}

/// Every directive keyword, in documentation order.
pub const KEYWORDS: &[&str] = &[
    "plural",
    "singular",
    "human",
    "irregular",
    "uncountable",
    "acronym",
];
