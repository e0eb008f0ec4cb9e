//! One-shot rule evaluation with message rendering.

use crate::dataset::DatasetSource;
use crate::direct::PostalCode;
use crate::engine::CountryLookup;
use crate::error::Result;
use crate::message::{ATTRIBUTE, MessageTemplates, substitute};
use crate::referential::PostalCodeFor;
use crate::rule::PostalCodeRule;

/// Result of checking one attribute against one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub passed: bool,
    /// Rendered error message, set only when the check failed.
    pub message: Option<String>,
}

impl Verdict {
    fn pass() -> Self {
        Self {
            passed: true,
            message: None,
        }
    }

    fn fail(message: String) -> Self {
        Self {
            passed: false,
            message: Some(message),
        }
    }
}

/// Validate `value` for `attribute` under `rule` and render the error message
/// on failure.
///
/// `source` supplies the other submitted fields; explicit country rules
/// never read it.
pub fn check<E, D>(
    engine: &E,
    rule: &PostalCodeRule,
    attribute: &str,
    value: Option<&str>,
    source: &D,
    templates: &MessageTemplates,
) -> Result<Verdict>
where
    E: CountryLookup + ?Sized,
    D: DatasetSource + ?Sized,
{
    match rule {
        PostalCodeRule::ForCountry(countries) => {
            let matcher = PostalCode::new(engine);
            if matcher.validate(attribute, value, countries)? {
                return Ok(Verdict::pass());
            }
            let message = substitute(&templates.postal_code, &[(ATTRIBUTE, attribute)]);
            Ok(Verdict::fail(matcher.replace(&message, countries)))
        }
        PostalCodeRule::ForInput(fields) => {
            let matcher = PostalCodeFor::new(engine);
            let resolution = matcher.validate(attribute, value, fields, source)?;
            if resolution.passed() {
                return Ok(Verdict::pass());
            }
            let message = substitute(&templates.postal_code_for, &[(ATTRIBUTE, attribute)]);
            Ok(Verdict::fail(
                matcher.replace(&message, attribute, fields, &resolution),
            ))
        }
    }
}
