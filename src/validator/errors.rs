//! Validator errors.

use thiserror::Error;

use crate::tenants::SettingsLookupError;

/// Validation could not run to completion.
///
/// Rule violations are not errors; they are reported through
/// [`Verdict`](crate::validator::Verdict).
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// The tenant configuration could not be read.
    #[error("configuration lookup failed")]
    SettingsLookup(#[from] SettingsLookupError),
}

impl ValidatorError {
    /// Stable error code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::SettingsLookup(_) => "configuration-lookup-failed",
        }
    }

    /// Numeric error code of the public promotion API.
    pub const fn legacy_code(&self) -> u16 {
        match self {
            Self::SettingsLookup(_) => 1006,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn lookup_failures_keep_their_source() {
        let error = ValidatorError::from(SettingsLookupError::Unavailable("timeout".to_string()));

        assert_eq!(error.code(), "configuration-lookup-failed");
        assert_eq!(error.legacy_code(), 1006);
        assert_eq!(
            error.source().map(ToString::to_string).as_deref(),
            Some("settings store unavailable: timeout")
        );
    }
}
