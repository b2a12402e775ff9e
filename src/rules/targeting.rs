//! Targeting and scope rules.

use crate::{
    campaigns::{CampaignRecord, presence::Presence},
    rules::count_set,
    tenants::TenantFeatures,
};

pub(super) fn regions_enabled(record: &CampaignRecord, features: TenantFeatures) -> bool {
    !record.store_region_ids.is_set() || features.store_regions
}

pub(super) fn customer_groups_enabled(record: &CampaignRecord, features: TenantFeatures) -> bool {
    !record.customer_group_ids.is_set() || features.promotion_regions
}

pub(super) fn single_scope(record: &CampaignRecord) -> bool {
    count_set(&[
        record.store_group.is_set(),
        record.warehouse_id.is_set(),
        record.store_region_ids.is_set(),
    ]) <= 1
}
