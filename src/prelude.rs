//! Promotion Rules prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    campaigns::{CampaignRecord, CampaignType},
    fixtures::{Fixture, FixtureError},
    forms::{CampaignForm, FormError},
    responses::{ErrorBody, ResponseEnvelope},
    rules::{Rule, RuleContext, Violation},
    storage::{AttributeValue, AuditStamp, CampaignAttribute, CampaignOutput, StoredCampaign},
    tenants::{
        InMemorySettings, SettingsLookup, SettingsLookupError, TenantFeatures, TenantSetting,
        VERTICAL_SETTING,
    },
    validator::{ReportingMode, RuleValidator, ValidatorError, ValidatorSettings, Verdict},
};
