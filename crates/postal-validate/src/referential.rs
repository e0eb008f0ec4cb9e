//! `postal_code_for` rule: validation against countries named by other fields.
//!
//! Each referenced field of the submission holds a country code. The postal
//! code passes if it is valid for any of those countries. Referenced fields
//! that are missing or blank impose no constraint, and a field holding an
//! unknown country is skipped rather than treated as an error.
//!
//! Validation returns a [`Resolution`] recording the country code each field
//! held, as submitted, for the countries that did not match. The same `Resolution`
//! is passed to [`PostalCodeFor::replace`] to build the error message, so
//! message building only ever sees the attempts of its own validation.

use tracing::debug;

use crate::dataset::{DatasetSource, country_code_text};
use crate::engine::CountryLookup;
use crate::error::{Result, ValidationError};
use crate::message::{COUNTRIES, EXAMPLES, FIELDS, join_unique, substitute};

/// Rule name used in identifiers and error messages.
pub const RULE_NAME: &str = "postal_code_for";

/// Outcome of one referential validation attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    attribute: String,
    passed: bool,
    attempts: Vec<(String, String)>,
}

impl Resolution {
    fn new(attribute: &str) -> Self {
        Self {
            attribute: attribute.to_string(),
            passed: false,
            attempts: Vec::new(),
        }
    }

    fn pass(mut self) -> Self {
        self.passed = true;
        self
    }

    /// Record that `field` held `code` and did not match.
    /// A repeated field keeps its position and takes the latest code.
    fn record(&mut self, field: &str, code: String) {
        match self.attempts.iter_mut().find(|(f, _)| f == field) {
            Some(entry) => entry.1 = code,
            None => self.attempts.push((field.to_string(), code)),
        }
    }

    /// Whether the postal code matched one of the referenced countries.
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// The attribute this resolution was produced for.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Field to country pairs tried without a match, in the order tried.
    pub fn attempts(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attempts
            .iter()
            .map(|(field, code)| (field.as_str(), code.as_str()))
    }

    /// The country code a field held, if it was tried without a match.
    pub fn country_for(&self, field: &str) -> Option<&str> {
        self.attempts
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, code)| code.as_str())
    }
}

/// Matches a postal code against countries read from other submitted fields.
#[derive(Debug)]
pub struct PostalCodeFor<'e, E: ?Sized> {
    engine: &'e E,
}

impl<'e, E: CountryLookup + ?Sized> PostalCodeFor<'e, E> {
    pub fn new(engine: &'e E) -> Self {
        Self { engine }
    }

    /// Validate `value` against the countries held by `field_names`.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::InvalidArgument`] if `field_names` is empty
    /// - [`ValidationError::UnsupportedDatasetSource`] if `source` has no
    ///   field view
    pub fn validate<S, D>(
        &self,
        attribute: &str,
        value: Option<&str>,
        field_names: &[S],
        source: &D,
    ) -> Result<Resolution>
    where
        S: AsRef<str>,
        D: DatasetSource + ?Sized,
    {
        if field_names.is_empty() {
            return Err(ValidationError::InvalidArgument { rule: RULE_NAME });
        }

        let dataset = source
            .dataset()
            .ok_or(ValidationError::UnsupportedDatasetSource)?;

        let present: Vec<&str> = field_names
            .iter()
            .map(AsRef::as_ref)
            .filter(|field| dataset.is_filled(field))
            .collect();

        let mut resolution = Resolution::new(attribute);
        if present.is_empty() {
            debug!(attribute, "no referenced country fields filled, passing");
            return Ok(resolution.pass());
        }

        for field in present {
            let Some(code) = dataset.get(field).and_then(country_code_text) else {
                debug!(attribute, field, "referenced field does not hold a country code");
                continue;
            };

            if !self.engine.supports(&code) {
                debug!(attribute, field, country = %code, "skipping unsupported country");
                continue;
            }

            if self.engine.validate(&code, value)? {
                debug!(attribute, field, country = %code, "postal code matched");
                return Ok(resolution.pass());
            }

            resolution.record(field, code.into_owned());
        }

        Ok(resolution)
    }

    /// Fill `:countries`, `:examples` and `:fields` for a failed validation.
    ///
    /// Only attempts recorded for `attribute` whose field is among
    /// `field_names` contribute countries and examples. Country codes are
    /// shown as submitted. `:fields` lists `field_names` as given.
    pub fn replace<S: AsRef<str>>(
        &self,
        message: &str,
        attribute: &str,
        field_names: &[S],
        resolution: &Resolution,
    ) -> String {
        let requested: Vec<&str> = field_names.iter().map(AsRef::as_ref).collect();

        let found: Vec<&str> = if resolution.attribute() == attribute {
            resolution
                .attempts()
                .filter(|(field, _)| requested.contains(field))
                .map(|(_, code)| code)
                .collect()
        } else {
            Vec::new()
        };

        let countries = join_unique(found.iter().copied());
        let examples = join_unique(
            found
                .iter()
                .filter_map(|code| self.engine.example(code).ok().flatten())
                .filter(|example| !example.is_empty()),
        );
        let fields = requested.join(", ");

        substitute(
            message,
            &[
                (COUNTRIES, countries.as_str()),
                (EXAMPLES, examples.as_str()),
                (FIELDS, fields.as_str()),
            ],
        )
    }
}
