//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use serde::Serialize;

/// Derived forms of a single word.
#[derive(Debug, Serialize)]
pub struct WordForms {
    pub word: String,
    pub plural: String,
    pub singular: String,
    pub camel: String,
    pub underscore: String,
    pub human: String,
    pub table: String,
    pub foreign_key: String,
}

/// Format word forms as a table, one row per word.
pub fn format_forms_table(rows: &[WordForms]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Word",
        "Plural",
        "Singular",
        "Camelized",
        "Underscored",
        "Humanized",
        "Table",
        "Foreign key",
    ]);

    for row in rows {
        table.add_row(vec![
            row.word.as_str(),
            row.plural.as_str(),
            row.singular.as_str(),
            row.camel.as_str(),
            row.underscore.as_str(),
            row.human.as_str(),
            row.table.as_str(),
            row.foreign_key.as_str(),
        ]);
    }

    table
}
