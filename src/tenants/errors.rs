//! Settings lookup errors.

use thiserror::Error;

/// Failure to answer a settings lookup.
///
/// "Not found" is not an error; lookups report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum SettingsLookupError {
    /// The backing store could not be reached.
    #[error("settings store unavailable: {0}")]
    Unavailable(String),

    /// The stored row could not be decoded into a setting.
    #[error("setting {name} is malformed: {reason}")]
    Malformed {
        /// Requested setting name.
        name: String,

        /// What was wrong with the row.
        reason: String,
    },
}
