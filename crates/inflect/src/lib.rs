//! Rule-based inflections for identifiers and words, plus character-safe
//! text helpers.
//!
//! ```
//! use inflect::{FirstLetter, Inflections, Inflector};
//!
//! let mut inflections = Inflections::english();
//! inflections.acronym("HTML").unwrap();
//! let inflector = Inflector::new(inflections);
//!
//! assert_eq!(inflector.pluralize("person"), "people");
//! assert_eq!(inflector.underscore("HTMLTidy"), "html_tidy");
//! assert_eq!(inflector.camelize("html_tidy", FirstLetter::Upper), "HTMLTidy");
//! ```

mod engine;
#[cfg(feature = "global")]
mod global;
pub mod inflections;
pub mod parser;
pub mod text;

pub use engine::{
    FirstLetter, Inflector, dasherize, deconstantize, demodulize, parameterize, transliterate,
};
#[cfg(feature = "global")]
pub use global::{
    camelize, classify, configure, foreign_key, humanize, inflector, pluralize, pluralize_count,
    reset, singularize, tableize, titleize, underscore, with_inflector,
};
pub use inflections::{
    AcronymRegistry, InflectionError, Inflections, Irregular, LoadError, Rule, RuleSet, Scope,
};
pub use parser::ParseError;
