//! Type and schedule rules.

use jiff::Timestamp;

use crate::campaigns::{CampaignRecord, presence::Presence};

pub(super) fn type_is_recognised(record: &CampaignRecord) -> bool {
    record
        .campaign_type
        .as_ref()
        .is_some_and(|kind| kind.is_recognised())
}

pub(super) fn start_date_is_current(record: &CampaignRecord, earliest_start: Timestamp) -> bool {
    record.start_date.is_set() && record.start_date.is_some_and(|start| start > earliest_start)
}

pub(super) fn end_date_follows_start(record: &CampaignRecord) -> bool {
    let Some(end) = record.end_date else {
        return false;
    };

    record.end_date.is_set() && record.start_date.is_none_or(|start| end > start)
}

pub(super) fn manager_override_is_attended(record: &CampaignRecord) -> bool {
    !(record.requires_manager_override
        && record
            .campaign_type
            .as_ref()
            .is_some_and(|kind| kind.is_unattended()))
}
