//! Response Envelopes
//!
//! The JSON shapes handed back to API clients after validation.

use serde::Serialize;

use crate::{forms::FormError, rules::Violation, validator::ValidatorError};

/// Error details of a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Numeric error code of the public promotion API.
    pub error_code: u16,

    /// Stable error name.
    pub error_name: &'static str,

    /// Field blamed for the error.
    pub error_field: Option<&'static str>,
}

impl From<Violation> for ErrorBody {
    fn from(violation: Violation) -> Self {
        Self {
            error_code: violation.legacy_code(),
            error_name: violation.code(),
            error_field: violation.field(),
        }
    }
}

/// Envelope wrapping every response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResponseEnvelope<T> {
    /// The request succeeded.
    Ok {
        /// Returned records.
        data: Vec<T>,
    },

    /// The request failed.
    Error(ErrorBody),
}

impl<T> ResponseEnvelope<T> {
    /// Successful response carrying `data`.
    pub fn ok(data: Vec<T>) -> Self {
        Self::Ok { data }
    }

    /// Failed response.
    pub fn error(
        error_code: u16,
        error_name: &'static str,
        error_field: Option<&'static str>,
    ) -> Self {
        Self::Error(ErrorBody {
            error_code,
            error_name,
            error_field,
        })
    }

    /// Whether the envelope reports success.
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }
}

impl<T> From<Violation> for ResponseEnvelope<T> {
    fn from(violation: Violation) -> Self {
        Self::Error(ErrorBody::from(violation))
    }
}

impl<T> From<&ValidatorError> for ResponseEnvelope<T> {
    fn from(error: &ValidatorError) -> Self {
        Self::error(error.legacy_code(), error.code(), None)
    }
}

impl<T> From<&FormError> for ResponseEnvelope<T> {
    fn from(error: &FormError) -> Self {
        Self::error(error.legacy_code(), error.code(), error.field())
    }
}
