//! `postal_code` rule: validation against an explicit list of countries.

use tracing::trace;

use crate::engine::CountryLookup;
use crate::error::{Result, ValidationError};
use crate::message::{COUNTRIES, EXAMPLES, join_unique, substitute};

/// Rule name used in identifiers and error messages.
pub const RULE_NAME: &str = "postal_code";

/// Matches a postal code against caller-supplied country codes.
#[derive(Debug)]
pub struct PostalCode<'e, E: ?Sized> {
    engine: &'e E,
}

impl<'e, E: CountryLookup + ?Sized> PostalCode<'e, E> {
    pub fn new(engine: &'e E) -> Self {
        Self { engine }
    }

    /// Validate `value` against each country in order, passing on the first match.
    ///
    /// A missing or empty value fails without consulting the rule table.
    /// Country codes are not pre-filtered: an unknown code that is reached
    /// before a match fails with [`ValidationError::UnsupportedCountry`].
    pub fn validate<S: AsRef<str>>(
        &self,
        attribute: &str,
        value: Option<&str>,
        country_codes: &[S],
    ) -> Result<bool> {
        if country_codes.is_empty() {
            return Err(ValidationError::InvalidArgument { rule: RULE_NAME });
        }

        let Some(value) = value.filter(|v| !v.is_empty()) else {
            trace!(attribute, "empty postal code");
            return Ok(false);
        };

        for code in country_codes {
            if self.engine.validate(code.as_ref(), Some(value))? {
                trace!(attribute, country = code.as_ref(), "postal code matched");
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Fill `:countries` and `:examples` from the supported country codes.
    ///
    /// Unsupported codes are skipped. Codes are shown as given and both
    /// lists keep only the first occurrence of each entry, so `FOO` and
    /// `foo` are both listed; countries without an example add nothing to
    /// `:examples`.
    pub fn replace<S: AsRef<str>>(&self, message: &str, country_codes: &[S]) -> String {
        let supported: Vec<&str> = country_codes
            .iter()
            .map(AsRef::as_ref)
            .filter(|code| self.engine.supports(code))
            .collect();

        let countries = join_unique(supported.iter().copied());
        let examples = join_unique(
            supported
                .iter()
                .filter_map(|code| self.engine.example(code).ok().flatten())
                .filter(|example| !example.is_empty()),
        );

        substitute(
            message,
            &[(COUNTRIES, countries.as_str()), (EXAMPLES, examples.as_str())],
        )
    }
}

#[cfg(test)]
mod tests {
    use postal_model::{PostalRule, RuleTable};

    use super::*;
    use crate::engine::PostalCodeValidator;

    fn validator() -> PostalCodeValidator {
        let table: RuleTable = [
            ("FR", PostalRule::new(Some(r"/^\d{5}$/".into()), Some("75007".into()))),
            ("BE", PostalRule::new(Some(r"/^\d{4}$/".into()), Some("1000".into()))),
            ("XX", PostalRule::new(Some(r"/^X$/".into()), None)),
        ]
        .into_iter()
        .collect();
        PostalCodeValidator::new(table).expect("build validator")
    }

    #[test]
    fn test_empty_country_list_fails() {
        let engine = validator();
        let rule = PostalCode::new(&engine);
        let err = rule.validate::<&str>("postcode", Some("75007"), &[]).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidArgument { rule: "postal_code" }));
        assert_eq!(
            err.to_string(),
            "validation rule 'postal_code' requires at least 1 parameter"
        );
    }

    #[test]
    fn test_missing_or_empty_value_fails() {
        let engine = validator();
        let rule = PostalCode::new(&engine);
        assert!(!rule.validate("postcode", None, &["FR"]).expect("validate"));
        assert!(!rule.validate("postcode", Some(""), &["FR"]).expect("validate"));
    }

    #[test]
    fn test_any_country_may_match() {
        let engine = validator();
        let rule = PostalCode::new(&engine);
        assert!(rule.validate("postcode", Some("75007"), &["XX", "FR"]).expect("validate"));
        assert!(rule.validate("postcode", Some("1000"), &["fr", "be"]).expect("validate"));
        assert!(!rule.validate("postcode", Some("100"), &["FR", "BE"]).expect("validate"));
    }

    #[test]
    fn test_unsupported_country_is_an_error() {
        let engine = validator();
        let rule = PostalCode::new(&engine);
        let err = rule.validate("postcode", Some("75007"), &["ZZ", "FR"]).unwrap_err();
        assert!(matches!(err, ValidationError::UnsupportedCountry { .. }));

        // A match before the unknown code is reached still passes.
        assert!(rule.validate("postcode", Some("75007"), &["FR", "ZZ"]).expect("validate"));
    }

    #[test]
    fn test_replace_deduplicates_and_skips_unsupported() {
        let engine = validator();
        let rule = PostalCode::new(&engine);
        let message = rule.replace("c=:countries e=:examples", &["FR", "fr", "ZZ", "BE", "FR"]);
        assert_eq!(message, "c=FR, fr, BE e=75007, 1000");
    }

    #[test]
    fn test_replace_without_supported_countries() {
        let engine = validator();
        let rule = PostalCode::new(&engine);
        assert_eq!(rule.replace("c=:countries e=:examples", &["ZZ"]), "c= e=");
    }
}
