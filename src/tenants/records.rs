//! Tenant Setting Records

use serde::{Deserialize, Serialize};

/// Named tenant setting as stored by the configuration backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenantSetting {
    /// Row identifier.
    pub id: u32,

    /// Setting name, unique per tenant.
    pub name: String,

    /// Free-form description.
    #[serde(rename = "desc")]
    pub description: String,

    /// Setting value.
    pub value: String,

    /// Creation time, seconds since the Unix epoch.
    pub added: i64,

    /// Who created the setting.
    #[serde(rename = "addedby")]
    pub added_by: String,

    /// Last change time, seconds since the Unix epoch.
    pub changed: i64,

    /// Who last changed the setting.
    #[serde(rename = "changedby")]
    pub changed_by: String,
}

impl TenantSetting {
    /// Create a setting with just a name and value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }
}
