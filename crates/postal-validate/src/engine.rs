//! Country rule lookup and single-country matching.

use std::collections::BTreeMap;

use postal_model::{CountryCode, RuleTable, normalize_country_code};
use regex::Regex;
use tracing::trace;

use crate::error::{Result, ValidationError};
use crate::pattern::compile_pattern;

/// Country rule queries used by the matchers.
///
/// [`PostalCodeValidator`] is the production implementation; the trait lets
/// the matchers run against any lookup that follows the same contract.
pub trait CountryLookup {
    /// Whether the rule table has an entry for `code` (case-insensitive).
    /// Never fails.
    fn supports(&self, code: &str) -> bool;

    /// Example postal code for `code`, if one is recorded.
    ///
    /// Fails with [`ValidationError::UnsupportedCountry`] for unknown codes.
    fn example(&self, code: &str) -> Result<Option<&str>>;

    /// Whether `postal_code` is valid for `code`. A missing value is tested
    /// as the empty string.
    ///
    /// Fails with [`ValidationError::UnsupportedCountry`] for unknown codes.
    fn validate(&self, code: &str, postal_code: Option<&str>) -> Result<bool>;
}

/// Validates postal codes against an immutable [`RuleTable`].
///
/// All patterns are compiled once in [`PostalCodeValidator::new`]; lookups
/// afterwards are read-only, so one validator can be shared by any number
/// of validation attempts.
#[derive(Debug, Clone)]
pub struct PostalCodeValidator {
    rules: RuleTable,
    compiled: BTreeMap<CountryCode, Regex>,
}

impl PostalCodeValidator {
    /// Build a validator, compiling every stored pattern.
    pub fn new(rules: RuleTable) -> Result<Self> {
        let mut compiled = BTreeMap::new();
        for (code, rule) in rules.iter() {
            let Some(pattern) = rule.pattern.as_deref() else {
                continue;
            };
            let regex = compile_pattern(pattern).map_err(|e| ValidationError::InvalidPattern {
                country: code.to_string(),
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
            compiled.insert(code.clone(), regex);
        }

        Ok(Self { rules, compiled })
    }

    /// The underlying rule table.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Whether the rule table has an entry for `code` (case-insensitive).
    ///
    /// An entry without a pattern still counts as supported.
    pub fn supports(&self, code: &str) -> bool {
        self.rules.contains(code)
    }

    /// The stored pattern for `code`, exactly as written in the rule table.
    pub fn pattern(&self, code: &str) -> Result<Option<&str>> {
        let rule = self
            .rules
            .get(code)
            .ok_or_else(|| ValidationError::unsupported_country(code))?;
        Ok(rule.pattern.as_deref())
    }

    /// The example postal code for `code`, if one is recorded.
    pub fn example(&self, code: &str) -> Result<Option<&str>> {
        let rule = self
            .rules
            .get(code)
            .ok_or_else(|| ValidationError::unsupported_country(code))?;
        Ok(rule.example.as_deref())
    }

    /// Check `postal_code` against the pattern for `code`.
    ///
    /// Countries without a pattern accept every value, including a missing
    /// one. Otherwise the value (empty string when missing) must match the
    /// stored pattern, which carries its own anchors.
    pub fn validate(&self, code: &str, postal_code: Option<&str>) -> Result<bool> {
        if !self.supports(code) {
            return Err(ValidationError::unsupported_country(code));
        }

        let Some(regex) = self.compiled.get(normalize_country_code(code).as_str()) else {
            trace!(country = code, "no pattern recorded, accepting");
            return Ok(true);
        };

        let matched = regex.is_match(postal_code.unwrap_or(""));
        trace!(country = code, matched, "checked postal code");
        Ok(matched)
    }
}

impl CountryLookup for PostalCodeValidator {
    fn supports(&self, code: &str) -> bool {
        PostalCodeValidator::supports(self, code)
    }

    fn example(&self, code: &str) -> Result<Option<&str>> {
        PostalCodeValidator::example(self, code)
    }

    fn validate(&self, code: &str, postal_code: Option<&str>) -> Result<bool> {
        PostalCodeValidator::validate(self, code, postal_code)
    }
}
