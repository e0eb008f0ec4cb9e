//! Postal code data model.
//!
//! - [`CountryCode`]: case-insensitive country token, canonical form uppercase
//! - [`PostalRule`]: optional pattern and optional example for one country
//! - [`RuleTable`]: immutable lookup from country code to rule

pub mod country;
pub mod rule;

pub use country::{CountryCode, normalize_country_code};
pub use rule::{PostalRule, RuleTable};
