//! Per-country postal code rules.
//!
//! ## Asset Structure
//!
//! A rule table is a mapping of country code to either `null` or a record
//! with an optional `pattern` and an optional `example`:
//!
//! ```text
//! {
//!   "FR": { "pattern": "/^\\d{5}$/", "example": "75007" },
//!   "AE": null
//! }
//! ```
//!
//! A `null` entry and an entry without a pattern both mean the country is
//! supported but accepts any postal code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::country::{CountryCode, normalize_country_code};

/// Validation rule for a single country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalRule {
    /// Delimited regular expression (e.g. `/^\d{5}$/`), `None` accepts anything.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Illustrative postal code used in error messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl PostalRule {
    /// Create a rule from its parts.
    pub fn new(pattern: Option<String>, example: Option<String>) -> Self {
        Self { pattern, example }
    }

    /// A rule that accepts every postal code and has no example.
    pub fn accept_all() -> Self {
        Self::default()
    }
}

/// Immutable lookup of country code to [`PostalRule`].
///
/// Keys are stored in canonical uppercase form; all lookups are
/// case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Option<PostalRule>>",
    into = "BTreeMap<String, Option<PostalRule>>"
)]
pub struct RuleTable {
    rules: BTreeMap<CountryCode, PostalRule>,
}

impl RuleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Insert a rule. A later insert for the same country replaces the earlier one.
    pub fn insert(&mut self, code: impl Into<CountryCode>, rule: PostalRule) {
        self.rules.insert(code.into(), rule);
    }

    /// Get the rule for a country (case-insensitive).
    pub fn get(&self, code: &str) -> Option<&PostalRule> {
        self.rules.get(normalize_country_code(code).as_str())
    }

    /// Check if the table has an entry for a country (case-insensitive).
    pub fn contains(&self, code: &str) -> bool {
        self.rules.contains_key(normalize_country_code(code).as_str())
    }

    /// Number of countries in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over all entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&CountryCode, &PostalRule)> {
        self.rules.iter()
    }
}

impl<C: Into<CountryCode>> FromIterator<(C, PostalRule)> for RuleTable {
    fn from_iter<I: IntoIterator<Item = (C, PostalRule)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (code, rule) in iter {
            table.insert(code, rule);
        }
        table
    }
}

impl From<BTreeMap<String, Option<PostalRule>>> for RuleTable {
    fn from(raw: BTreeMap<String, Option<PostalRule>>) -> Self {
        raw.into_iter()
            .map(|(code, rule)| (code, rule.unwrap_or_default()))
            .collect()
    }
}

impl From<RuleTable> for BTreeMap<String, Option<PostalRule>> {
    fn from(table: RuleTable) -> Self {
        table
            .rules
            .into_iter()
            .map(|(code, rule)| {
                let rule = if rule == PostalRule::default() {
                    None
                } else {
                    Some(rule)
                };
                (code.into_inner(), rule)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut table = RuleTable::new();
        table.insert(
            "nl",
            PostalRule::new(Some("/^\\d{4} ?[A-Z]{2}$/".into()), Some("1012 AB".into())),
        );

        assert!(table.contains("NL"));
        assert!(table.contains("nl"));
        assert!(table.contains("Nl"));
        assert_eq!(
            table.get("nL").and_then(|r| r.example.as_deref()),
            Some("1012 AB")
        );
        assert!(!table.contains("BE"));
    }

    #[test]
    fn test_later_insert_wins() {
        let table: RuleTable = [
            ("fr", PostalRule::new(None, Some("first".into()))),
            ("FR", PostalRule::new(None, Some("second".into()))),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get("FR").and_then(|r| r.example.as_deref()),
            Some("second")
        );
    }
}
