//! Shared helpers for rule tests.

use jiff::Timestamp;

use crate::{
    campaigns::{CampaignRecord, CampaignType},
    rules::RuleContext,
    tenants::TenantFeatures,
};

/// Instant used as "now minus grace" by rule tests.
pub(crate) const EARLIEST_START: Timestamp = Timestamp::constant(1_893_456_000, 0);

/// A record that passes every rule when checked against [`EARLIEST_START`].
pub(crate) fn minimal_record() -> CampaignRecord {
    CampaignRecord {
        campaign_type: Some(CampaignType::Auto),
        start_date: Some(Timestamp::constant(1_893_459_600, 0)),
        end_date: Some(Timestamp::constant(1_893_463_200, 0)),
        warehouse_id: Some(1),
        purchased_products: vec!["milk".to_string(), "cookie".to_string()],
        purchased_amount: Some(2),
        ..CampaignRecord::default()
    }
}

/// Context over `record` with no tenant features.
pub(crate) fn context(record: &CampaignRecord) -> RuleContext<'_> {
    RuleContext {
        record,
        features: TenantFeatures::disabled(),
        earliest_start: EARLIEST_START,
    }
}
