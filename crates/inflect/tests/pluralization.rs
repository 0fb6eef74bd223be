//! Integration tests for pluralize and singularize.

use inflect::{Inflections, Inflector, Scope};

const SINGULAR_TO_PLURAL: &[(&str, &str)] = &[
    ("search", "searches"),
    ("switch", "switches"),
    ("fix", "fixes"),
    ("box", "boxes"),
    ("process", "processes"),
    ("address", "addresses"),
    ("case", "cases"),
    ("stack", "stacks"),
    ("wish", "wishes"),
    ("fish", "fish"),
    ("jeans", "jeans"),
    ("funky jeans", "funky jeans"),
    ("my money", "my money"),
    ("category", "categories"),
    ("query", "queries"),
    ("ability", "abilities"),
    ("agency", "agencies"),
    ("movie", "movies"),
    ("archive", "archives"),
    ("index", "indices"),
    ("wife", "wives"),
    ("safe", "saves"),
    ("half", "halves"),
    ("move", "moves"),
    ("salesperson", "salespeople"),
    ("person", "people"),
    ("spokesman", "spokesmen"),
    ("primary_spokesman", "primary_spokesmen"),
    ("man", "men"),
    ("woman", "women"),
    ("basis", "bases"),
    ("diagnosis", "diagnoses"),
    ("diagnosis_a", "diagnosis_as"),
    ("datum", "data"),
    ("medium", "media"),
    ("stadium", "stadia"),
    ("analysis", "analyses"),
    ("node_child", "node_children"),
    ("child", "children"),
    ("experience", "experiences"),
    ("day", "days"),
    ("comment", "comments"),
    ("foobar", "foobars"),
    ("newsletter", "newsletters"),
    ("old_news", "old_news"),
    ("news", "news"),
    ("series", "series"),
    ("species", "species"),
    ("quiz", "quizzes"),
    ("perspective", "perspectives"),
    ("ox", "oxen"),
    ("photo", "photos"),
    ("buffalo", "buffaloes"),
    ("tomato", "tomatoes"),
    ("dwarf", "dwarves"),
    ("elf", "elves"),
    ("information", "information"),
    ("equipment", "equipment"),
    ("bus", "buses"),
    ("mouse", "mice"),
    ("louse", "lice"),
    ("house", "houses"),
    ("octopus", "octopi"),
    ("virus", "viri"),
    ("alias", "aliases"),
    ("portfolio", "portfolios"),
    ("vertex", "vertices"),
    ("matrix", "matrices"),
    ("matrix_fu", "matrix_fus"),
    ("axis", "axes"),
    ("taxi", "taxis"),
    ("testis", "testes"),
    ("crisis", "crises"),
    ("rice", "rice"),
    ("shoe", "shoes"),
    ("horse", "horses"),
    ("prize", "prizes"),
    ("edge", "edges"),
    ("database", "databases"),
    ("|ice", "|ices"),
    ("|ouse", "|ouses"),
    ("slice", "slices"),
    ("police", "police"),
    ("status", "statuses"),
    ("sex", "sexes"),
    ("zombie", "zombies"),
];

// =========================================================================
// Built-in English Tables
// =========================================================================

#[test]
fn pluralize_english_words() {
    let inflector = Inflector::english();
    for (singular, plural) in SINGULAR_TO_PLURAL {
        assert_eq!(inflector.pluralize(singular), *plural, "pluralize({singular})");
    }
}

#[test]
fn singularize_english_words() {
    let inflector = Inflector::english();
    for (singular, plural) in SINGULAR_TO_PLURAL {
        assert_eq!(inflector.singularize(plural), *singular, "singularize({plural})");
    }
}

#[test]
fn pluralize_plural_is_identity() {
    let inflector = Inflector::english();
    for plural in ["people", "oxen", "mice", "octopi", "indices", "children"] {
        assert_eq!(inflector.pluralize(plural), plural);
    }
}

#[test]
fn singularize_singular_is_identity() {
    let inflector = Inflector::english();
    for singular in ["person", "child", "move", "sex"] {
        assert_eq!(inflector.singularize(singular), singular);
    }
}

#[test]
fn pluralize_keeps_first_letter_case() {
    let inflector = Inflector::english();
    assert_eq!(inflector.pluralize("Person"), "People");
    assert_eq!(inflector.pluralize("SalesPerson"), "SalesPeople");
    assert_eq!(inflector.singularize("Children"), "Child");
    assert_eq!(inflector.pluralize("Search"), "Searches");
}

#[test]
fn uncountable_ignores_case() {
    let inflector = Inflector::english();
    assert_eq!(inflector.pluralize("Fish"), "Fish");
    assert_eq!(inflector.singularize("SHEEP"), "SHEEP");
}

#[test]
fn empty_word_is_unchanged() {
    let inflector = Inflector::english();
    assert_eq!(inflector.pluralize(""), "");
    assert_eq!(inflector.singularize(""), "");
}

#[test]
fn pluralize_count_of_one_is_identity() {
    let inflector = Inflector::english();
    assert_eq!(inflector.pluralize_count("dog", 1), "dog");
    assert_eq!(inflector.pluralize_count("dogs", 1), "dogs");
    assert_eq!(inflector.pluralize_count("dog", 2), "dogs");
    assert_eq!(inflector.pluralize_count("dog", 0), "dogs");
    assert_eq!(inflector.pluralize_count("dog", -1), "dogs");
}

// =========================================================================
// Custom Registration
// =========================================================================

#[test]
fn newest_rule_has_priority() {
    let mut inflections = Inflections::english();
    inflections.plural("(cact)us$", "${1}i").unwrap();
    inflections.singular("(cact)i$", "${1}us").unwrap();
    let inflector = Inflector::new(inflections);
    assert_eq!(inflector.pluralize("cactus"), "cacti");
    assert_eq!(inflector.singularize("cacti"), "cactus");
}

#[test]
fn irregular_overrides_rules() {
    let mut inflections = Inflections::english();
    inflections.irregular("octopus", "octopodes").unwrap();
    let inflector = Inflector::new(inflections);
    assert_eq!(inflector.pluralize("octopus"), "octopodes");
    assert_eq!(inflector.singularize("octopodes"), "octopus");
}

#[test]
fn irregular_makes_uncountable_countable() {
    let mut inflections = Inflections::english();
    inflections.irregular("police", "polices").unwrap();
    let inflector = Inflector::new(inflections);
    assert_eq!(inflector.pluralize("police"), "polices");
}

#[test]
fn uncountable_registration() {
    let mut inflections = Inflections::english();
    inflections.uncountable(["Luggage", "homework"]);
    let inflector = Inflector::new(inflections);
    assert_eq!(inflector.pluralize("luggage"), "luggage");
    assert_eq!(inflector.pluralize("homework"), "homework");
    assert_eq!(inflector.singularize("my luggage"), "my luggage");
}

#[test]
fn unmatched_word_is_unchanged() {
    let inflector = Inflector::new(Inflections::new());
    assert_eq!(inflector.pluralize("word"), "word");
    assert_eq!(inflector.singularize("words"), "words");
}

#[test]
fn clear_plurals_keeps_other_tables() {
    let mut inflections = Inflections::english();
    inflections.clear(Scope::Plurals);
    let inflector = Inflector::new(inflections);
    assert_eq!(inflector.pluralize("dog"), "dog");
    assert_eq!(inflector.pluralize("person"), "people");
    assert_eq!(inflector.singularize("dogs"), "dog");
}

#[test]
fn invalid_pattern_is_rejected_at_registration() {
    let mut inflections = Inflections::english();
    let err = inflections.plural("(unclosed$", "x").unwrap_err();
    assert!(err.to_string().starts_with("invalid rule pattern '(unclosed$'"));
}

#[test]
fn empty_irregular_is_rejected() {
    let mut inflections = Inflections::english();
    let err = inflections.irregular("", "things").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"irregular pair '' -> 'things' must not contain an empty word");
}
