//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "postal-code",
    version,
    about = "Validate postal codes against per-country formats",
    long_about = "Validate postal codes against per-country formats.\n\n\
                  Countries are given explicitly (check) or read from other\n\
                  fields of a JSON record (check-for)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow postal codes and record contents in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Directory holding manifest.toml and the rule table.
    ///
    /// Defaults to $POSTAL_STANDARDS_DIR, then the bundled standards.
    #[arg(long = "standards-dir", value_name = "DIR", global = true)]
    pub standards_dir: Option<PathBuf>,

    /// TOML file overriding the error message templates.
    #[arg(long = "messages", value_name = "PATH", global = true)]
    pub messages: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a postal code against explicit countries.
    Check(CheckArgs),

    /// Validate a record's postal code against countries held by its other fields.
    CheckFor(CheckForArgs),

    /// List all supported countries.
    Countries,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Postal code to validate.
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Country code to accept (repeatable or comma-separated).
    #[arg(
        long = "country",
        short = 'c',
        value_name = "CODE",
        value_delimiter = ',',
        required = true
    )]
    pub countries: Vec<String>,

    /// Name of the field in error messages.
    #[arg(long = "attribute", default_value = "postal code")]
    pub attribute: String,
}

#[derive(Parser)]
pub struct CheckForArgs {
    /// JSON file holding the submitted record.
    #[arg(long = "data", value_name = "PATH")]
    pub data: PathBuf,

    /// Field holding the postal code (dot notation for nested fields).
    #[arg(long = "attribute", value_name = "FIELD")]
    pub attribute: String,

    /// Field holding a country code (repeatable or comma-separated).
    #[arg(
        long = "field",
        short = 'f',
        value_name = "FIELD",
        value_delimiter = ',',
        required = true
    )]
    pub fields: Vec<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
