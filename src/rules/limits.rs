//! Reason code and redemption limit rules.

use crate::campaigns::{
    CampaignRecord,
    presence::{Magnitude, Presence},
};

// TODO: check the reason code's purpose is PROMOTION once reason codes are
// exposed through a lookup alongside tenant settings.
pub(super) fn reason_code_is_valid(_record: &CampaignRecord) -> bool {
    true
}

pub(super) fn redemption_limit_is_compatible(record: &CampaignRecord) -> bool {
    !record.redemption_limit.is_set()
        || !(record.percentage_off_entire_purchase.is_set() || record.reward_points.is_set())
}

pub(super) fn redemption_limit_has_max_items(record: &CampaignRecord) -> bool {
    !record.redemption_limit.is_set() || record.max_items_with_special_unit_price.is_positive()
}
