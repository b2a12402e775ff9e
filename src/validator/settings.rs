//! Validator Settings

use jiff::SignedDuration;
use serde::{Deserialize, Serialize};

/// How many violations a report contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportingMode {
    /// Stop at the first broken rule.
    #[default]
    FirstViolation,

    /// Check every rule and report each broken one, in evaluation order.
    AllViolations,
}

/// Tunables for [`RuleValidator`](crate::validator::RuleValidator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorSettings {
    /// How far in the past a start date may lie.
    pub start_date_grace: SignedDuration,

    /// Reporting mode used by `report` and `report_at`.
    pub reporting: ReportingMode,
}

impl ValidatorSettings {
    /// Default start date grace window.
    pub const DEFAULT_START_DATE_GRACE: SignedDuration = SignedDuration::from_hours(1);

    /// Settings with the given reporting mode.
    #[must_use]
    pub fn with_reporting(mut self, reporting: ReportingMode) -> Self {
        self.reporting = reporting;
        self
    }
}

impl Default for ValidatorSettings {
    fn default() -> Self {
        Self {
            start_date_grace: Self::DEFAULT_START_DATE_GRACE,
            reporting: ReportingMode::default(),
        }
    }
}
