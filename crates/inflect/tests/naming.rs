//! Integration tests for class, table and key naming.

use inflect::{Inflector, deconstantize, demodulize};

// =========================================================================
// Tableize / Classify
// =========================================================================

#[test]
fn tableize_class_names() {
    let inflector = Inflector::english();
    assert_eq!(inflector.tableize("PrimarySpokesman"), "primary_spokesmen");
    assert_eq!(inflector.tableize("NodeChild"), "node_children");
    assert_eq!(inflector.tableize("Person"), "people");
    assert_eq!(inflector.tableize("Admin::Category"), "admin/categories");
}

#[test]
fn classify_table_names() {
    let inflector = Inflector::english();
    assert_eq!(inflector.classify("primary_spokesmen"), "PrimarySpokesman");
    assert_eq!(inflector.classify("node_children"), "NodeChild");
    assert_eq!(inflector.classify("people"), "Person");
}

#[test]
fn classify_drops_schema_prefix() {
    let inflector = Inflector::english();
    assert_eq!(inflector.classify("table_prefix.class_names"), "ClassName");
    assert_eq!(inflector.classify("a.b.posts"), "Post");
}

#[test]
fn classify_leaves_singular_names() {
    let inflector = Inflector::english();
    assert_eq!(inflector.classify("calculus"), "Calculu");
    assert_eq!(inflector.classify("fish"), "Fish");
}

// =========================================================================
// Foreign Keys
// =========================================================================

#[test]
fn foreign_key_with_underscore() {
    let inflector = Inflector::english();
    assert_eq!(inflector.foreign_key("Person", true), "person_id");
    assert_eq!(
        inflector.foreign_key("MyApplication::Billing::Account", true),
        "account_id"
    );
}

#[test]
fn foreign_key_without_underscore() {
    let inflector = Inflector::english();
    assert_eq!(inflector.foreign_key("Person", false), "personid");
    assert_eq!(
        inflector.foreign_key("MyApplication::Billing::Account", false),
        "accountid"
    );
}

#[test]
fn foreign_key_of_camel_class() {
    let inflector = Inflector::english();
    assert_eq!(inflector.foreign_key("BillingAccount", true), "billing_account_id");
}

// =========================================================================
// Demodulize / Deconstantize
// =========================================================================

#[test]
fn demodulize_keeps_last_segment() {
    assert_eq!(demodulize("MyApplication::Billing::Account"), "Account");
    assert_eq!(demodulize("Account"), "Account");
    assert_eq!(demodulize("::Account"), "Account");
    assert_eq!(demodulize("admin/users"), "users");
    assert_eq!(demodulize(""), "");
}

#[test]
fn deconstantize_drops_last_segment() {
    assert_eq!(
        deconstantize("MyApplication::Billing::Account"),
        "MyApplication::Billing"
    );
    assert_eq!(
        deconstantize("::MyApplication::Billing::Account"),
        "::MyApplication::Billing"
    );
    assert_eq!(deconstantize("MyApplication::Billing"), "MyApplication");
    assert_eq!(deconstantize("::MyApplication::Billing"), "::MyApplication");
    assert_eq!(deconstantize("Account"), "");
    assert_eq!(deconstantize("::Account"), "");
    assert_eq!(deconstantize("admin/users"), "admin");
    assert_eq!(deconstantize(""), "");
}
