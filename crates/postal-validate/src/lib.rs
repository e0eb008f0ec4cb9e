//! Postal code validation against per-country rule tables.
//!
//! This crate provides:
//!
//! - **Lookup engine** ([`PostalCodeValidator`]): support queries, examples
//!   and single-country matching over a [`RuleTable`]
//! - **Explicit countries** ([`PostalCode`]): the `postal_code` rule, passing
//!   if the value is valid for any listed country
//! - **Referenced countries** ([`PostalCodeFor`]): the `postal_code_for`
//!   rule, reading country codes from other fields of the submission
//! - **Messages**: `:countries`, `:examples` and `:fields` placeholders
//!
//! # Example
//!
//! ```ignore
//! use postal_validate::{PostalCodeRule, PostalCodeValidator, MessageTemplates, check};
//!
//! let engine = PostalCodeValidator::new(rule_table)?;
//! let rule: PostalCodeRule = "postal_code_for:country".parse()?;
//! let submission = serde_json::json!({ "country": "NL", "postcode": "1012 AB" });
//!
//! let verdict = check(&engine, &rule, "postcode", Some("1012 AB"), &submission,
//!     &MessageTemplates::default())?;
//! assert!(verdict.passed);
//! ```

mod check;
pub mod dataset;
pub mod direct;
pub mod engine;
pub mod error;
pub mod message;
pub mod pattern;
pub mod referential;
pub mod rule;

pub use check::{Verdict, check};
pub use dataset::{Dataset, DatasetSource};
pub use direct::PostalCode;
pub use engine::{CountryLookup, PostalCodeValidator};
pub use error::{Result, ValidationError};
pub use message::{MessageTemplates, substitute};
pub use postal_model::{CountryCode, PostalRule, RuleTable};
pub use referential::{PostalCodeFor, Resolution};
pub use rule::PostalCodeRule;
