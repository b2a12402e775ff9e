//! Rule Validator
//!
//! Runs the [`Rule`] catalogue over a campaign record. The tenant's feature
//! tokens are read once per call, before any rule is evaluated; a failed read
//! aborts validation with a [`ValidatorError`].

use jiff::Timestamp;
use tracing::{Span, debug};

use crate::{
    campaigns::CampaignRecord,
    rules::{Rule, RuleContext, Violation},
    tenants::{SettingsLookup, TenantFeatures, VERTICAL_SETTING},
};

mod errors;
mod settings;

pub use errors::ValidatorError;
pub use settings::{ReportingMode, ValidatorSettings};

/// Outcome of validating a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every rule holds.
    Valid,

    /// The first broken rule.
    Invalid(Violation),
}

impl Verdict {
    /// Whether the record passed.
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The reported violation, if any.
    pub const fn violation(&self) -> Option<Violation> {
        match self {
            Self::Valid => None,
            Self::Invalid(violation) => Some(*violation),
        }
    }

    /// Error code of the reported violation.
    pub fn error_code(&self) -> Option<&'static str> {
        self.violation().map(|violation| violation.code())
    }

    /// Field blamed by the reported violation.
    pub fn error_field(&self) -> Option<&'static str> {
        self.violation().and_then(|violation| violation.field())
    }

    /// Convert into a `Result`, failing with the violation.
    ///
    /// # Errors
    ///
    /// Returns the violation when the record is invalid.
    pub fn into_result(self) -> Result<(), Violation> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(violation) => Err(violation),
        }
    }
}

impl From<Option<Violation>> for Verdict {
    fn from(violation: Option<Violation>) -> Self {
        violation.map_or(Self::Valid, Self::Invalid)
    }
}

/// Checks campaign records against the ordered rule catalogue.
///
/// The validator holds no per-call state; one instance may serve concurrent
/// callers when its lookup is shareable.
#[derive(Debug, Clone)]
pub struct RuleValidator<L> {
    lookup: L,
    settings: ValidatorSettings,
}

impl<L: SettingsLookup> RuleValidator<L> {
    /// Create a validator with default settings.
    pub fn new(lookup: L) -> Self {
        Self::with_settings(lookup, ValidatorSettings::default())
    }

    /// Create a validator with explicit settings.
    pub fn with_settings(lookup: L, settings: ValidatorSettings) -> Self {
        Self { lookup, settings }
    }

    /// The validator's settings.
    pub fn settings(&self) -> &ValidatorSettings {
        &self.settings
    }

    /// Validate against the current clock, stopping at the first broken rule.
    ///
    /// # Errors
    ///
    /// Returns an error when the tenant configuration cannot be read.
    pub fn validate(&self, record: &CampaignRecord) -> Result<Verdict, ValidatorError> {
        self.validate_at(record, Timestamp::now())
    }

    /// Validate as of `now`, stopping at the first broken rule.
    ///
    /// # Errors
    ///
    /// Returns an error when the tenant configuration cannot be read.
    #[tracing::instrument(
        name = "campaigns.validator.validate",
        skip(self, record),
        fields(
            campaign_id = ?record.campaign_id,
            error_code = tracing::field::Empty
        ),
        err
    )]
    pub fn validate_at(
        &self,
        record: &CampaignRecord,
        now: Timestamp,
    ) -> Result<Verdict, ValidatorError> {
        let ctx = self.context(record, now)?;

        let verdict = Verdict::from(
            Rule::ALL
                .into_iter()
                .find(|rule| !rule.holds(&ctx))
                .map(Violation::new),
        );

        if let Some(code) = verdict.error_code() {
            Span::current().record("error_code", code);

            debug!(error_code = code, "campaign rejected");
        }

        Ok(verdict)
    }

    /// Every broken rule against the current clock, in evaluation order.
    ///
    /// # Errors
    ///
    /// Returns an error when the tenant configuration cannot be read.
    pub fn collect_violations(
        &self,
        record: &CampaignRecord,
    ) -> Result<Vec<Violation>, ValidatorError> {
        self.collect_violations_at(record, Timestamp::now())
    }

    /// Every broken rule as of `now`, in evaluation order.
    ///
    /// # Errors
    ///
    /// Returns an error when the tenant configuration cannot be read.
    #[tracing::instrument(
        name = "campaigns.validator.collect_violations",
        skip(self, record),
        fields(
            campaign_id = ?record.campaign_id,
            violation_count = tracing::field::Empty
        ),
        err
    )]
    pub fn collect_violations_at(
        &self,
        record: &CampaignRecord,
        now: Timestamp,
    ) -> Result<Vec<Violation>, ValidatorError> {
        let ctx = self.context(record, now)?;

        let violations: Vec<Violation> = Rule::ALL
            .into_iter()
            .filter(|rule| !rule.holds(&ctx))
            .map(Violation::new)
            .collect();

        Span::current().record("violation_count", violations.len());

        Ok(violations)
    }

    /// Violations against the current clock, per the configured reporting mode.
    ///
    /// # Errors
    ///
    /// Returns an error when the tenant configuration cannot be read.
    pub fn report(&self, record: &CampaignRecord) -> Result<Vec<Violation>, ValidatorError> {
        self.report_at(record, Timestamp::now())
    }

    /// Violations as of `now`, per the configured reporting mode.
    ///
    /// First-violation mode yields at most one entry.
    ///
    /// # Errors
    ///
    /// Returns an error when the tenant configuration cannot be read.
    pub fn report_at(
        &self,
        record: &CampaignRecord,
        now: Timestamp,
    ) -> Result<Vec<Violation>, ValidatorError> {
        match self.settings.reporting {
            ReportingMode::FirstViolation => Ok(self
                .validate_at(record, now)?
                .violation()
                .into_iter()
                .collect()),
            ReportingMode::AllViolations => self.collect_violations_at(record, now),
        }
    }

    fn context<'a>(
        &self,
        record: &'a CampaignRecord,
        now: Timestamp,
    ) -> Result<RuleContext<'a>, ValidatorError> {
        let setting = self.lookup.setting(VERTICAL_SETTING)?;

        Ok(RuleContext {
            record,
            features: TenantFeatures::from_setting(setting.as_ref()),
            earliest_start: now
                .checked_sub(self.settings.start_date_grace)
                .unwrap_or(Timestamp::MIN),
        })
    }
}
