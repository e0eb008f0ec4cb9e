//! Country code canonicalization.
//!
//! Rule tables are keyed by uppercase country code. Every lookup and every
//! insert goes through [`normalize_country_code`], so `"fr"`, `"Fr"` and
//! `"FR"` always address the same entry.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonicalize a raw country code for table lookup.
///
/// Only ASCII letters are folded; any other character is kept as-is.
pub fn normalize_country_code(raw: &str) -> String {
    raw.to_ascii_uppercase()
}

/// A country code in canonical (uppercase) form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a canonical country code from any casing.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(normalize_country_code(raw.as_ref()))
    }

    /// The canonical code.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the code and return the canonical string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for CountryCode {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for CountryCode {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CountryCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
