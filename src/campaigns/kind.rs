//! Campaign Type

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How a promotion is applied at the till.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CampaignType {
    /// Applied automatically whenever the requirements are met.
    Auto,

    /// Applied by the cashier.
    Manual,

    /// Applied when a coupon is presented.
    Coupon,

    /// Any other submitted value, kept verbatim so it can be reported.
    Unrecognised(String),
}

impl CampaignType {
    /// Wire name of the type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Auto => "auto",
            Self::Manual => "manual",
            Self::Coupon => "coupon",
            Self::Unrecognised(raw) => raw,
        }
    }

    /// Whether the value is one of the three supported types.
    pub const fn is_recognised(&self) -> bool {
        !matches!(self, Self::Unrecognised(_))
    }

    /// Whether the promotion is applied without cashier involvement.
    ///
    /// Automatic and coupon promotions cannot require a manager override.
    pub const fn is_unattended(&self) -> bool {
        matches!(self, Self::Auto | Self::Coupon)
    }
}

impl FromStr for CampaignType {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(value))
    }
}

impl From<&str> for CampaignType {
    fn from(value: &str) -> Self {
        match value {
            "auto" => Self::Auto,
            "manual" => Self::Manual,
            "coupon" => Self::Coupon,
            other => Self::Unrecognised(other.to_string()),
        }
    }
}

impl From<String> for CampaignType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "auto" => Self::Auto,
            "manual" => Self::Manual,
            "coupon" => Self::Coupon,
            _ => Self::Unrecognised(value),
        }
    }
}

impl From<CampaignType> for String {
    fn from(value: CampaignType) -> Self {
        match value {
            CampaignType::Unrecognised(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CampaignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
