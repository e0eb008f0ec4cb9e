//! Table rendering for the `countries` command.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use postal_model::RuleTable;

/// Shown for a missing example or pattern.
const NONE: &str = "-";

/// One country as listed by `countries`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRow {
    pub code: String,
    pub example: String,
    pub pattern: String,
}

/// Rows for every country in the table, sorted by code.
pub fn country_rows(rules: &RuleTable) -> Vec<CountryRow> {
    rules
        .iter()
        .map(|(code, rule)| CountryRow {
            code: code.to_string(),
            example: rule.example.clone().unwrap_or_else(|| NONE.to_string()),
            pattern: rule.pattern.clone().unwrap_or_else(|| NONE.to_string()),
        })
        .collect()
}

pub fn countries_table(rules: &RuleTable) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Country", "Example", "Pattern"]);
    apply_table_style(&mut table);
    for row in country_rows(rules) {
        table.add_row(vec![row.code, row.example, row.pattern]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}
