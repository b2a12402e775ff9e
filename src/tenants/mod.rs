//! Tenants
//!
//! Per-deployment settings the validator reads through [`SettingsLookup`].

pub mod errors;
pub mod features;
pub mod lookup;
pub mod records;

pub use errors::SettingsLookupError;
pub use features::TenantFeatures;
pub use lookup::*;
pub use records::TenantSetting;

/// Name of the setting that carries the tenant's feature tokens.
pub const VERTICAL_SETTING: &str = "vertical";
