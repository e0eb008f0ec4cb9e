//! Error types for postal code validation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ValidationError>;

#[derive(Debug, Error)]
pub enum ValidationError {
    /// The rule table has no entry for the requested country.
    #[error("unsupported country code '{code}'")]
    UnsupportedCountry { code: String },

    /// A rule was invoked without any country codes or field names.
    #[error("validation rule '{rule}' requires at least 1 parameter")]
    InvalidArgument { rule: &'static str },

    /// The submission data cannot be viewed as a flat field map.
    #[error("unsupported dataset source, cannot retrieve submission data")]
    UnsupportedDatasetSource,

    /// A stored pattern could not be compiled.
    #[error("invalid pattern {pattern:?} for country '{country}': {reason}")]
    InvalidPattern {
        country: String,
        pattern: String,
        reason: String,
    },

    /// A rule identifier names an unknown rule.
    #[error("unknown postal code rule '{name}'")]
    UnknownRule { name: String },
}

impl ValidationError {
    pub(crate) fn unsupported_country(code: &str) -> Self {
        Self::UnsupportedCountry {
            code: code.to_string(),
        }
    }
}
