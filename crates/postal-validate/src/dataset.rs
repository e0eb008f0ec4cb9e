//! Read-only access to the submitted fields of a validation attempt.
//!
//! Referential rules resolve country codes from other fields of the same
//! submission. The submission is viewed as a JSON object; nested objects
//! and arrays are reachable with dot notation (`address.country`,
//! `lines.0.country`).

use std::borrow::Cow;

use serde_json::{Map, Value};

/// Flat view of a submission, keyed by field name.
#[derive(Debug, Clone, Copy)]
pub struct Dataset<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> Dataset<'a> {
    /// Wrap a JSON object.
    pub fn new(fields: &'a Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Look up a field.
    ///
    /// An exact key wins over nested traversal, so a field literally named
    /// `a.b` is found before `{"a": {"b": ..}}`.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        if let Some(value) = self.fields.get(key) {
            return Some(value);
        }
        if !key.contains('.') {
            return None;
        }

        let mut segments = key.split('.');
        let mut current = self.fields.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Whether a field is present and filled.
    ///
    /// Missing fields, `null` and blank strings count as not filled; every
    /// other value (numbers, booleans, arrays, objects) is filled.
    pub fn is_filled(&self, key: &str) -> bool {
        match self.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        }
    }
}

/// Something that can hand out a [`Dataset`] view of a submission.
///
/// Returning `None` means the source is not of a kind that exposes
/// submission data; referential validation then fails with
/// [`crate::ValidationError::UnsupportedDatasetSource`].
pub trait DatasetSource {
    fn dataset(&self) -> Option<Dataset<'_>>;
}

impl DatasetSource for Value {
    fn dataset(&self) -> Option<Dataset<'_>> {
        match self {
            Value::Object(map) => Some(Dataset::new(map)),
            _ => None,
        }
    }
}

impl DatasetSource for Map<String, Value> {
    fn dataset(&self) -> Option<Dataset<'_>> {
        Some(Dataset::new(self))
    }
}

impl DatasetSource for Dataset<'_> {
    fn dataset(&self) -> Option<Dataset<'_>> {
        Some(*self)
    }
}

/// Text of a field value used as a country code.
///
/// Arrays and objects cannot name a country.
pub(crate) fn country_code_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
