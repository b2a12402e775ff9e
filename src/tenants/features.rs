//! Tenant Features
//!
//! Optional targeting capabilities are switched on by tokens embedded in the
//! `vertical` setting value, e.g. `retail,store_regions,promotion_regions`.

use crate::tenants::TenantSetting;

/// Token enabling store-region targeting.
pub const STORE_REGIONS_TOKEN: &str = "store_regions";

/// Token enabling customer-group targeting.
pub const PROMOTION_REGIONS_TOKEN: &str = "promotion_regions";

/// Targeting features enabled for a tenant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TenantFeatures {
    /// Promotions may be limited to store regions.
    pub store_regions: bool,

    /// Promotions may be limited to customer groups.
    pub promotion_regions: bool,
}

impl TenantFeatures {
    /// No optional targeting enabled.
    pub const fn disabled() -> Self {
        Self {
            store_regions: false,
            promotion_regions: false,
        }
    }

    /// Detect feature tokens by substring presence in a setting value.
    pub fn from_value(value: &str) -> Self {
        Self {
            store_regions: value.contains(STORE_REGIONS_TOKEN),
            promotion_regions: value.contains(PROMOTION_REGIONS_TOKEN),
        }
    }

    /// Features of an optional setting; a missing setting enables nothing.
    pub fn from_setting(setting: Option<&TenantSetting>) -> Self {
        setting.map_or_else(Self::disabled, |setting| Self::from_value(&setting.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_tokens_anywhere_in_value() {
        let features = TenantFeatures::from_value("retail;promotion_regions;store_regions");

        assert!(features.store_regions);
        assert!(features.promotion_regions);
    }

    #[test]
    fn tokens_are_independent() {
        let features = TenantFeatures::from_value("store_regions");

        assert!(features.store_regions);
        assert!(!features.promotion_regions);
    }

    #[test]
    fn missing_setting_disables_everything() {
        assert_eq!(TenantFeatures::from_setting(None), TenantFeatures::disabled());
        assert_eq!(
            TenantFeatures::from_setting(Some(&TenantSetting::new("vertical", ""))),
            TenantFeatures::disabled()
        );
    }
}
