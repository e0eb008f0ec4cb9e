//! Rule table file loaders.
//!
//! Two on-disk formats are accepted, chosen by file extension:
//!
//! - `.json`: mapping of country code to `null` or `{ "pattern", "example" }`
//! - `.csv`: header row with `Country`, `Pattern` and `Example` columns;
//!   a blank cell means the field is absent

use std::path::Path;

use postal_model::{PostalRule, RuleTable};
use tracing::info;

use crate::error::{Result, StandardsError};

const COUNTRY_COLUMN: &str = "Country";
const PATTERN_COLUMN: &str = "Pattern";
const EXAMPLE_COLUMN: &str = "Example";

/// Load a rule table from a JSON or CSV file.
pub fn load_rule_table(path: &Path) -> Result<RuleTable> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let table = match extension.as_deref() {
        Some("json") => load_json(path)?,
        Some("csv") => load_csv(path)?,
        _ => {
            return Err(StandardsError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };

    info!(
        path = %path.display(),
        countries = table.len(),
        "loaded postal code rule table"
    );
    Ok(table)
}

fn load_json(path: &Path) -> Result<RuleTable> {
    let contents = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| StandardsError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

fn load_csv(path: &Path) -> Result<RuleTable> {
    let csv_error = |source: csv::Error| StandardsError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(csv_error)?;
    let headers = reader.headers().map_err(csv_error)?.clone();

    let country_idx = find_column(path, &headers, COUNTRY_COLUMN)?;
    let pattern_idx = find_column(path, &headers, PATTERN_COLUMN)?;
    let example_idx = find_column(path, &headers, EXAMPLE_COLUMN)?;

    let mut table = RuleTable::new();
    for result in reader.records() {
        let record = result.map_err(csv_error)?;

        let country = record.get(country_idx).unwrap_or("").trim();
        if country.is_empty() {
            continue;
        }

        let rule = PostalRule::new(
            non_empty(record.get(pattern_idx)),
            non_empty(record.get(example_idx)),
        );
        table.insert(country, rule);
    }

    Ok(table)
}

fn find_column(path: &Path, headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| StandardsError::MissingColumn {
            path: path.to_path_buf(),
            column: name.to_string(),
        })
}

/// Return Some(value) if non-empty, None otherwise.
fn non_empty(cell: Option<&str>) -> Option<String> {
    let trimmed = cell.unwrap_or("").trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
