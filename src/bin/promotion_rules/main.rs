//! Promotion Rules CLI

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use jiff::Timestamp;
use promotion_rules::{
    fixtures::{Fixture, FixtureError},
    forms::CampaignForm,
    responses::{ErrorBody, ResponseEnvelope},
    rules::write_catalogue,
    storage::{AuditStamp, CampaignOutput, StoredCampaign},
    validator::{ReportingMode, RuleValidator, ValidatorSettings, Verdict},
};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::config::{CheckFormArgs, Cli, Command, ValidateArgs};

mod config;
mod logging;

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to initialise logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// One output line of `validate`.
#[derive(Debug, Serialize)]
struct CampaignReport<'a> {
    campaign: &'a str,

    #[serde(flatten)]
    envelope: ResponseEnvelope<CampaignOutput>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    violations: Vec<ErrorBody>,
}

#[expect(clippy::print_stderr, reason = "last-resort error reporting")]
fn main() -> ExitCode {
    _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    logging::init_subscriber(&cli.logging)?;

    let mut out = io::stdout().lock();

    match cli.command {
        Command::Rules => write_catalogue(&mut out)?,
        Command::Validate(args) => validate(&args, &mut out)?,
        Command::CheckForm(args) => check_form(&args, &mut out)?,
    }

    out.flush()?;

    Ok(())
}

fn validate(args: &ValidateArgs, out: &mut impl Write) -> Result<(), CliError> {
    let mut fixture = Fixture::with_base_path(&args.fixtures);

    fixture
        .load_campaigns(&args.set)?
        .load_settings(args.settings.as_deref().unwrap_or(&args.set))?;

    let reporting = if args.all {
        ReportingMode::AllViolations
    } else {
        ReportingMode::FirstViolation
    };

    let validator = RuleValidator::with_settings(
        fixture.settings(),
        ValidatorSettings::default().with_reporting(reporting),
    );

    let campaigns = fixture.campaigns();

    info!(set = %args.set, campaigns = campaigns.len(), "validating fixture set");

    for (key, record) in campaigns {
        let report = match validator.report(record) {
            Ok(violations) => CampaignReport {
                campaign: key,
                envelope: violations.first().map_or_else(
                    || ResponseEnvelope::ok(vec![CampaignOutput::from_record(record)]),
                    |violation| ResponseEnvelope::from(*violation),
                ),
                violations: if args.all {
                    violations.into_iter().map(ErrorBody::from).collect()
                } else {
                    Vec::new()
                },
            },
            Err(error) => CampaignReport {
                campaign: key,
                envelope: ResponseEnvelope::from(&error),
                violations: Vec::new(),
            },
        };

        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;
    }

    Ok(())
}

fn check_form(args: &CheckFormArgs, out: &mut impl Write) -> Result<(), CliError> {
    let mut fixture = Fixture::with_base_path(&args.fixtures);

    fixture.load_settings(&args.settings)?;

    let validator = RuleValidator::new(fixture.settings());

    let envelope: ResponseEnvelope<CampaignOutput> =
        match CampaignForm::parse(&args.body).and_then(CampaignForm::into_record) {
            Err(error) => ResponseEnvelope::from(&error),
            Ok(record) => match validator.validate(&record) {
                Ok(Verdict::Valid) => {
                    let stamp = AuditStamp::new(Timestamp::now(), args.user.as_str());
                    let stored = StoredCampaign::from_record(&record, stamp);

                    ResponseEnvelope::ok(vec![CampaignOutput::from(&stored)])
                }
                Ok(Verdict::Invalid(violation)) => ResponseEnvelope::from(violation),
                Err(error) => ResponseEnvelope::from(&error),
            },
        };

    serde_json::to_writer(&mut *out, &envelope)?;
    writeln!(out)?;

    Ok(())
}
