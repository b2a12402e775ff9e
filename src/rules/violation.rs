//! Rule Violations

use thiserror::Error;

use crate::rules::Rule;

/// A campaign record broke a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("campaign violates {rule}")]
pub struct Violation {
    rule: Rule,
}

impl Violation {
    /// Violation of `rule`.
    pub const fn new(rule: Rule) -> Self {
        Self { rule }
    }

    /// The broken rule.
    pub const fn rule(&self) -> Rule {
        self.rule
    }

    /// Stable error code of the broken rule.
    pub const fn code(&self) -> &'static str {
        self.rule.code()
    }

    /// Numeric error code of the broken rule.
    pub const fn legacy_code(&self) -> u16 {
        self.rule.legacy_code()
    }

    /// Field blamed for the violation, if any.
    pub const fn field(&self) -> Option<&'static str> {
        self.rule.field()
    }
}

impl From<Rule> for Violation {
    fn from(rule: Rule) -> Self {
        Self::new(rule)
    }
}
