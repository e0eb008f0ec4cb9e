//! Rendering of the `countries` listing.

use postal_cli::table::{countries_table, country_rows};
use postal_model::{PostalRule, RuleTable};

fn rules() -> RuleTable {
    [
        ("nl", PostalRule::new(Some(r"/^\d{4} ?[A-Z]{2}$/i".into()), Some("1012 AB".into()))),
        ("AE", PostalRule::accept_all()),
        ("FR", PostalRule::new(Some(r"/^\d{2} ?\d{3}$/".into()), Some("75007".into()))),
    ]
    .into_iter()
    .collect()
}

#[test]
fn country_rows_snapshot() {
    insta::assert_debug_snapshot!(country_rows(&rules()), @r#"
    [
        CountryRow {
            code: "AE",
            example: "-",
            pattern: "-",
        },
        CountryRow {
            code: "FR",
            example: "75007",
            pattern: "/^\\d{2} ?\\d{3}$/",
        },
        CountryRow {
            code: "NL",
            example: "1012 AB",
            pattern: "/^\\d{4} ?[A-Z]{2}$/i",
        },
    ]
    "#);
}

#[test]
fn countries_table_lists_one_line_per_country() {
    let rendered = countries_table(&rules()).to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    // top border, header, header separator, rows, bottom border
    assert_eq!(lines.len(), 3 + 4);
    assert!(lines[1].contains("Country"));
    assert!(lines[3].contains("AE"));
    assert!(lines[4].contains("FR") && lines[4].contains("75007"));
    assert!(lines[5].contains("NL") && lines[5].contains("1012 AB"));
}

#[test]
fn bundled_table_lists_every_country() {
    let rules = postal_standards::load_default_rule_table().expect("load bundled rule table");
    let rows = country_rows(&rules);

    assert_eq!(rows.len(), rules.len());
    assert!(rows.windows(2).all(|pair| pair[0].code < pair[1].code));
    assert!(rows.iter().any(|row| row.code == "NL" && row.example == "1012 AB"));
}
