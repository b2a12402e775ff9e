//! Command line configuration.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub log_format: LogFormat,
}

#[derive(Debug, Parser)]
#[command(
    name = "promotion-rules",
    about = "Validate promotion campaigns",
    long_about = None
)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub logging: LoggingConfig,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print the ordered rule catalogue
    Rules,

    /// Validate every campaign of a fixture set
    Validate(ValidateArgs),

    /// Map a form body onto a campaign and validate it
    CheckForm(CheckFormArgs),
}

#[derive(Debug, Args)]
pub(crate) struct ValidateArgs {
    /// Fixture directory
    #[arg(long, env = "PROMOTION_RULES_FIXTURES", default_value = "./fixtures")]
    pub fixtures: PathBuf,

    /// Campaign fixture set
    #[arg(long, default_value = "default")]
    pub set: String,

    /// Settings fixture set; defaults to the campaign set
    #[arg(long)]
    pub settings: Option<String>,

    /// Report every broken rule instead of the first
    #[arg(long)]
    pub all: bool,
}

#[derive(Debug, Args)]
pub(crate) struct CheckFormArgs {
    /// Fixture directory
    #[arg(long, env = "PROMOTION_RULES_FIXTURES", default_value = "./fixtures")]
    pub fixtures: PathBuf,

    /// Settings fixture set
    #[arg(long, default_value = "default")]
    pub settings: String,

    /// Urlencoded form body
    #[arg(long)]
    pub body: String,

    /// User recorded as the campaign's author
    #[arg(long, env = "PROMOTION_RULES_USER", default_value = "cli")]
    pub user: String,
}
