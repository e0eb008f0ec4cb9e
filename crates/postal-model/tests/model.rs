//! Rule table deserialization and lookup tests.

use postal_model::{CountryCode, PostalRule, RuleTable};
use proptest::prelude::*;

#[test]
fn test_deserialize_asset_mapping() {
    let table: RuleTable = serde_json::from_str(
        r#"{
            "FR": { "pattern": "/^\\d{5}$/", "example": "75007" },
            "ie": { "example": "D02 X285" },
            "AE": null
        }"#,
    )
    .expect("parse rule table");

    assert_eq!(table.len(), 3);
    assert_eq!(
        table.get("fr"),
        Some(&PostalRule::new(
            Some("/^\\d{5}$/".to_string()),
            Some("75007".to_string())
        ))
    );
    assert_eq!(
        table.get("IE"),
        Some(&PostalRule::new(None, Some("D02 X285".to_string())))
    );
    assert_eq!(table.get("ae"), Some(&PostalRule::accept_all()));
    assert!(table.get("US").is_none());
}

#[test]
fn test_serialize_writes_null_for_accept_all() {
    let table: RuleTable = [
        ("ae", PostalRule::accept_all()),
        ("be", PostalRule::new(Some("/^\\d{4}$/".into()), Some("1000".into()))),
    ]
    .into_iter()
    .collect();

    let json = serde_json::to_value(&table).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "AE": null,
            "BE": { "pattern": "/^\\d{4}$/", "example": "1000" }
        })
    );
}

#[test]
fn test_iter_is_sorted_by_code() {
    let table: RuleTable = ["se", "at", "nl"]
        .into_iter()
        .map(|code| (code, PostalRule::accept_all()))
        .collect();

    let codes: Vec<&CountryCode> = table.iter().map(|(code, _)| code).collect();
    assert_eq!(
        codes,
        vec![
            &CountryCode::new("AT"),
            &CountryCode::new("NL"),
            &CountryCode::new("SE")
        ]
    );
}

proptest! {
    #[test]
    fn prop_lookup_ignores_ascii_case(code in "[a-zA-Z]{2,3}") {
        let table: RuleTable = [(code.as_str(), PostalRule::accept_all())]
            .into_iter()
            .collect();

        prop_assert!(table.contains(&code.to_ascii_lowercase()));
        prop_assert!(table.contains(&code.to_ascii_uppercase()));
        prop_assert!(table.contains(&code));
    }
}
