//! Tenant Setting Fixtures

use serde::Deserialize;

use crate::tenants::TenantSetting;

/// Wrapper for tenant settings in YAML
#[derive(Debug, Deserialize)]
pub struct SettingsFixture {
    /// Settings, later entries replacing earlier ones of the same name
    pub settings: Vec<TenantSetting>,
}
