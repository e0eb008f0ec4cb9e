//! Call-recording country lookup for matcher tests.

#![allow(dead_code)]

use std::cell::RefCell;

use postal_validate::{CountryLookup, Result, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Supports(String),
    Example(String),
    Validate(String, Option<String>),
}

/// A country known to the fake engine.
pub struct FakeCountry {
    pub code: &'static str,
    pub matches: bool,
    pub example: Option<&'static str>,
}

pub fn country(code: &'static str, matches: bool, example: Option<&'static str>) -> FakeCountry {
    FakeCountry {
        code,
        matches,
        example,
    }
}

/// Answers from a fixed list and records every call it receives.
pub struct RecordingEngine {
    countries: Vec<FakeCountry>,
    calls: RefCell<Vec<Call>>,
}

impl RecordingEngine {
    pub fn new(countries: Vec<FakeCountry>) -> Self {
        Self {
            countries,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn validate_calls(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Validate(code, _) => Some(code.clone()),
                _ => None,
            })
            .collect()
    }

    fn find(&self, code: &str) -> Option<&FakeCountry> {
        self.countries
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }
}

impl CountryLookup for RecordingEngine {
    fn supports(&self, code: &str) -> bool {
        self.calls.borrow_mut().push(Call::Supports(code.to_string()));
        self.find(code).is_some()
    }

    fn example(&self, code: &str) -> Result<Option<&str>> {
        self.calls.borrow_mut().push(Call::Example(code.to_string()));
        self.find(code)
            .map(|c| c.example)
            .ok_or_else(|| ValidationError::UnsupportedCountry {
                code: code.to_string(),
            })
    }

    fn validate(&self, code: &str, postal_code: Option<&str>) -> Result<bool> {
        self.calls
            .borrow_mut()
            .push(Call::Validate(code.to_string(), postal_code.map(String::from)));
        self.find(code)
            .map(|c| c.matches)
            .ok_or_else(|| ValidationError::UnsupportedCountry {
                code: code.to_string(),
            })
    }
}
