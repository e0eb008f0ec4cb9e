//! Rule identifiers.
//!
//! Rules are written as `<name>:<comma-separated parameters>`:
//!
//! ```text
//! postal_code:NL,BE          explicit countries
//! postal_code_for:country    countries read from other fields
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::{direct, referential};

/// A postal code rule and its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostalCodeRule {
    /// Validate against the listed country codes.
    ForCountry(Vec<String>),
    /// Validate against the countries held by the listed fields.
    ForInput(Vec<String>),
}

impl PostalCodeRule {
    /// Rule for explicit country codes.
    pub fn for_country<I, S>(countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::ForCountry(countries.into_iter().map(Into::into).collect())
    }

    /// Rule for countries read from other submitted fields.
    pub fn for_input<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::ForInput(fields.into_iter().map(Into::into).collect())
    }

    /// Add another country code or field name.
    #[must_use]
    pub fn or(mut self, parameter: impl Into<String>) -> Self {
        match &mut self {
            Self::ForCountry(params) | Self::ForInput(params) => params.push(parameter.into()),
        }
        self
    }

    /// Rule name (`postal_code` or `postal_code_for`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::ForCountry(_) => direct::RULE_NAME,
            Self::ForInput(_) => referential::RULE_NAME,
        }
    }

    /// Country codes or field names, in order.
    pub fn parameters(&self) -> &[String] {
        match self {
            Self::ForCountry(params) | Self::ForInput(params) => params,
        }
    }
}

impl fmt::Display for PostalCodeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name(), self.parameters().join(","))
    }
}

impl FromStr for PostalCodeRule {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, params) = s.trim().split_once(':').unwrap_or((s.trim(), ""));
        let params = params
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty());

        match name {
            direct::RULE_NAME => Ok(Self::for_country(params)),
            referential::RULE_NAME => Ok(Self::for_input(params)),
            other => Err(ValidationError::UnknownRule {
                name: other.to_string(),
            }),
        }
    }
}
