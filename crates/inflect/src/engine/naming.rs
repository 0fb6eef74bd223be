//! Naming conventions derived from class and table names.

use super::{FirstLetter, Inflector};

impl Inflector {
    /// Table name for a class name: underscored and pluralized.
    ///
    /// ```
    /// use inflect::Inflector;
    ///
    /// let inflector = Inflector::english();
    /// assert_eq!(inflector.tableize("RawScaledScorer"), "raw_scaled_scorers");
    /// assert_eq!(inflector.tableize("fancyCategory"), "fancy_categories");
    /// ```
    pub fn tableize(&self, class_name: &str) -> String {
        self.pluralize(&self.underscore(class_name))
    }

    /// Class name for a table name: schema prefix dropped, singularized and
    /// camelized.
    ///
    /// ```
    /// use inflect::Inflector;
    ///
    /// let inflector = Inflector::english();
    /// assert_eq!(inflector.classify("ham_and_eggs"), "HamAndEgg");
    /// assert_eq!(inflector.classify("schema.posts"), "Post");
    /// ```
    pub fn classify(&self, table_name: &str) -> String {
        let table = table_name
            .rfind('.')
            .map_or(table_name, |dot| &table_name[dot + 1..]);
        self.camelize(&self.singularize(table), FirstLetter::Upper)
    }

    /// Foreign key column for a class name.
    ///
    /// ```
    /// use inflect::Inflector;
    ///
    /// let inflector = Inflector::english();
    /// assert_eq!(inflector.foreign_key("Admin::Post", true), "post_id");
    /// assert_eq!(inflector.foreign_key("Message", false), "messageid");
    /// ```
    pub fn foreign_key(&self, class_name: &str, separate_with_underscore: bool) -> String {
        let mut key = self.underscore(demodulize(class_name));
        key.push_str(if separate_with_underscore { "_id" } else { "id" });
        key
    }
}

/// Replace underscores with dashes.
pub fn dasherize(word: &str) -> String {
    word.replace('_', "-")
}

/// The last segment of a `::` or `/` delimited path.
///
/// ```
/// assert_eq!(inflect::demodulize("ActiveSupport::Inflector::Inflections"), "Inflections");
/// assert_eq!(inflect::demodulize("admin/posts"), "posts");
/// assert_eq!(inflect::demodulize("Inflections"), "Inflections");
/// ```
pub fn demodulize(path: &str) -> &str {
    match last_separator(path) {
        Some((_, end)) => &path[end..],
        None => path,
    }
}

/// Everything before the last `::` or `/`; empty when there is no separator.
///
/// ```
/// assert_eq!(inflect::deconstantize("Net::HTTP::Get"), "Net::HTTP");
/// assert_eq!(inflect::deconstantize("String"), "");
/// ```
pub fn deconstantize(path: &str) -> &str {
    match last_separator(path) {
        Some((start, _)) => &path[..start],
        None => "",
    }
}

/// Byte range of the last namespace separator in `path`.
fn last_separator(path: &str) -> Option<(usize, usize)> {
    let colons = path.rfind("::").map(|start| (start, start + 2));
    let slash = path.rfind('/').map(|start| (start, start + 1));
    match (colons, slash) {
        (Some(a), Some(b)) => Some(if a.0 > b.0 { a } else { b }),
        (a, b) => a.or(b),
    }
}
