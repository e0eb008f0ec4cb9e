//! Loading of CLI inputs: rule tables, message templates and records.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use postal_standards::{load_rule_table_from, resolve_standards_root};
use postal_validate::{DatasetSource, MessageTemplates, PostalCodeValidator};
use serde_json::Value;
use tracing::info;

/// Load the rule table from `standards_dir` (or the default location) and
/// compile it.
pub fn load_engine(standards_dir: Option<&Path>) -> Result<PostalCodeValidator> {
    let dir = resolve_standards_root(standards_dir);
    let rules = load_rule_table_from(&dir)
        .with_context(|| format!("load standards from {}", dir.display()))?;
    let engine = PostalCodeValidator::new(rules).context("compile postal code patterns")?;
    info!(
        dir = %dir.display(),
        countries = engine.rules().len(),
        "rule table ready"
    );
    Ok(engine)
}

/// Message templates from an optional TOML file; defaults otherwise.
pub fn load_message_templates(path: Option<&Path>) -> Result<MessageTemplates> {
    let Some(path) = path else {
        return Ok(MessageTemplates::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("read message templates {}", path.display()))?;
    parse_message_templates(&text)
        .with_context(|| format!("parse message templates {}", path.display()))
}

/// Parse message templates; keys left out keep their default.
///
/// ```toml
/// postal_code = "The :attribute field must be a valid :countries postal code."
/// postal_code_for = "Postal code does not match :fields (e.g. :examples)."
/// ```
pub fn parse_message_templates(text: &str) -> Result<MessageTemplates> {
    Ok(toml::from_str(text)?)
}

/// Read a submitted record from a JSON file.
pub fn load_record(path: &Path) -> Result<Value> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read record {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse record {}", path.display()))
}

/// The value of `attribute` in `record`, as text.
///
/// Missing and `null` fields yield `None`; arrays and objects are rejected.
pub fn record_value(record: &Value, attribute: &str) -> Result<Option<String>> {
    let Some(dataset) = record.dataset() else {
        bail!("record must be a JSON object");
    };
    match dataset.get(attribute) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(value @ (Value::Number(_) | Value::Bool(_))) => Ok(Some(value.to_string())),
        Some(Value::Array(_) | Value::Object(_)) => {
            bail!("field `{attribute}` does not hold a postal code")
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_partial_templates_keep_defaults() {
        let templates =
            parse_message_templates("postal_code = \"bad :attribute\"\n").expect("parse");
        assert_eq!(templates.postal_code, "bad :attribute");
        assert_eq!(
            templates.postal_code_for,
            MessageTemplates::default().postal_code_for
        );
    }

    #[test]
    fn test_invalid_templates_rejected() {
        assert!(parse_message_templates("postal_code = 3").is_err());
    }

    #[test]
    fn test_record_value() {
        let record = json!({
            "postcode": "1012 AB",
            "numeric": 75007,
            "empty": null,
            "address": { "postcode": "1000" },
            "lines": ["a"]
        });

        assert_eq!(
            record_value(&record, "postcode").expect("value").as_deref(),
            Some("1012 AB")
        );
        assert_eq!(
            record_value(&record, "numeric").expect("value").as_deref(),
            Some("75007")
        );
        assert_eq!(
            record_value(&record, "address.postcode")
                .expect("value")
                .as_deref(),
            Some("1000")
        );
        assert_eq!(record_value(&record, "empty").expect("value"), None);
        assert_eq!(record_value(&record, "missing").expect("value"), None);
        assert!(record_value(&record, "lines").is_err());
        assert!(record_value(&json!(["x"]), "postcode").is_err());
    }
}
