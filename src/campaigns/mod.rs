//! Campaigns
//!
//! The candidate promotion configuration submitted for creation or update.

mod kind;
pub(crate) mod presence;
mod record;

pub use kind::CampaignType;
pub use record::CampaignRecord;
