use anyhow::{Context, Result};
use postal_cli::config::{load_record, record_value};
use postal_cli::logging::redact_value;
use postal_cli::table::countries_table;
use postal_validate::{MessageTemplates, PostalCodeRule, PostalCodeValidator, Verdict, check};
use serde_json::{Map, Value};
use tracing::{info, trace};

use crate::cli::{CheckArgs, CheckForArgs};

pub fn run_countries(engine: &PostalCodeValidator) -> Result<()> {
    println!("{}", countries_table(engine.rules()));
    Ok(())
}

pub fn run_check(
    args: &CheckArgs,
    engine: &PostalCodeValidator,
    templates: &MessageTemplates,
) -> Result<Verdict> {
    let countries = args.countries.iter().map(String::as_str).map(str::trim);
    let rule = PostalCodeRule::for_country(countries);
    trace!(
        value = redact_value(&args.value),
        rule = %rule,
        "checking postal code"
    );
    let verdict = check(
        engine,
        &rule,
        &args.attribute,
        Some(args.value.as_str()),
        &Map::new(),
        templates,
    )
    .with_context(|| format!("evaluate {rule}"))?;
    info!(rule = %rule, passed = verdict.passed, "check finished");
    Ok(verdict)
}

pub fn run_check_for(
    args: &CheckForArgs,
    engine: &PostalCodeValidator,
    templates: &MessageTemplates,
) -> Result<Verdict> {
    let record: Value = load_record(&args.data)?;
    let value = record_value(&record, &args.attribute)?;
    let fields = args.fields.iter().map(String::as_str).map(str::trim);
    let rule = PostalCodeRule::for_input(fields);
    trace!(
        attribute = %args.attribute,
        value = redact_value(value.as_deref().unwrap_or_default()),
        rule = %rule,
        "checking record"
    );
    let verdict = check(
        engine,
        &rule,
        &args.attribute,
        value.as_deref(),
        &record,
        templates,
    )
    .with_context(|| format!("evaluate {rule} for {}", args.data.display()))?;
    info!(rule = %rule, passed = verdict.passed, "check finished");
    Ok(verdict)
}

/// Print the verdict and map it to an exit code.
pub fn report(verdict: &Verdict) -> i32 {
    if verdict.passed {
        println!("valid");
        return 0;
    }
    if let Some(message) = &verdict.message {
        println!("{message}");
    }
    1
}
