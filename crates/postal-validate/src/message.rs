//! Error message templating.
//!
//! Templates contain literal placeholder tokens that are replaced with
//! comma-separated lists built from the attempted countries:
//!
//! - `:countries` - country codes that were tried
//! - `:examples` - example postal codes for those countries
//! - `:fields` - referenced field names (referential rules only)
//! - `:attribute` - the field under validation

use serde::{Deserialize, Serialize};

pub const ATTRIBUTE: &str = ":attribute";
pub const COUNTRIES: &str = ":countries";
pub const EXAMPLES: &str = ":examples";
pub const FIELDS: &str = ":fields";

const DEFAULT_MESSAGE: &str =
    "The :attribute field must be a valid :countries postal code (e.g. :examples).";

/// Replace placeholders in `template`.
///
/// Replacements are applied one after another in the given order, each to
/// the output of the previous one. Placeholders missing from the template
/// are ignored.
pub fn substitute(template: &str, replacements: &[(&str, &str)]) -> String {
    replacements
        .iter()
        .fold(template.to_string(), |message, &(placeholder, value)| {
            message.replace(placeholder, value)
        })
}

/// Join values with `", "`, keeping only the first occurrence of each.
pub(crate) fn join_unique<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: Vec<S> = Vec::new();
    for value in values {
        if !seen.iter().any(|s| s.as_ref() == value.as_ref()) {
            seen.push(value);
        }
    }
    seen.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(", ")
}

/// Message templates per rule, loadable from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageTemplates {
    /// Template for `postal_code` rules.
    pub postal_code: String,
    /// Template for `postal_code_for` rules.
    pub postal_code_for: String,
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            postal_code: DEFAULT_MESSAGE.to_string(),
            postal_code_for: DEFAULT_MESSAGE.to_string(),
        }
    }
}
