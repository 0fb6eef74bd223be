//! Process-wide inflector for the `global` feature.
//!
//! Readers take a cheap snapshot (`Arc<Inflector>`) and never hold the lock
//! while transforming. Writers build a new set of tables from a copy of the
//! current one and publish it in a single swap, so a transform never sees a
//! half-applied change.

use std::sync::{Arc, LazyLock, RwLock};

use tracing::debug;

use crate::{FirstLetter, Inflections, Inflector};

static GLOBAL_INFLECTOR: LazyLock<RwLock<Arc<Inflector>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Inflector::english())));

/// The current global inflector.
pub fn inflector() -> Arc<Inflector> {
    let guard = GLOBAL_INFLECTOR.read().expect("global inflector lock poisoned");
    Arc::clone(&guard)
}

/// Provides read access to the current global inflector.
pub fn with_inflector<T>(f: impl FnOnce(&Inflector) -> T) -> T {
    f(&inflector())
}

/// Change the global tables.
///
/// `f` edits a copy of the current tables. The copy is published only when
/// `f` succeeds; on error the global inflector is left untouched. Concurrent
/// calls are serialized.
///
/// ```
/// inflect::configure(|inflections| inflections.acronym("RESTful")).unwrap();
/// assert_eq!(inflect::underscore("RESTfulController"), "restful_controller");
/// # inflect::reset();
/// ```
pub fn configure<T, E>(f: impl FnOnce(&mut Inflections) -> Result<T, E>) -> Result<T, E> {
    let mut guard = GLOBAL_INFLECTOR.write().expect("global inflector lock poisoned");
    let mut inflections = guard.inflections().clone();
    let value = f(&mut inflections)?;
    *guard = Arc::new(Inflector::new(inflections));
    debug!("published new global inflections");
    Ok(value)
}

/// Restore the built-in English tables.
pub fn reset() {
    let mut guard = GLOBAL_INFLECTOR.write().expect("global inflector lock poisoned");
    *guard = Arc::new(Inflector::english());
    debug!("reset global inflections to English defaults");
}

/// See [`Inflector::pluralize`].
pub fn pluralize(word: &str) -> String {
    inflector().pluralize(word)
}

/// See [`Inflector::pluralize_count`].
pub fn pluralize_count(word: &str, count: i64) -> String {
    inflector().pluralize_count(word, count)
}

/// See [`Inflector::singularize`].
pub fn singularize(word: &str) -> String {
    inflector().singularize(word)
}

/// See [`Inflector::camelize`].
pub fn camelize(term: &str, first_letter: FirstLetter) -> String {
    inflector().camelize(term, first_letter)
}

/// See [`Inflector::underscore`].
pub fn underscore(camel_cased_word: &str) -> String {
    inflector().underscore(camel_cased_word)
}

/// See [`Inflector::humanize`].
pub fn humanize(word: &str, capitalize: bool) -> String {
    inflector().humanize(word, capitalize)
}

/// See [`Inflector::titleize`].
pub fn titleize(word: &str) -> String {
    inflector().titleize(word)
}

/// See [`Inflector::tableize`].
pub fn tableize(class_name: &str) -> String {
    inflector().tableize(class_name)
}

/// See [`Inflector::classify`].
pub fn classify(table_name: &str) -> String {
    inflector().classify(table_name)
}

/// See [`Inflector::foreign_key`].
pub fn foreign_key(class_name: &str, separate_with_underscore: bool) -> String {
    inflector().foreign_key(class_name, separate_with_underscore)
}
