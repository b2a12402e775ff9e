//! Storage
//!
//! Explicit mappings between [`CampaignRecord`](crate::campaigns::CampaignRecord)
//! and its persisted and returned shapes.

mod output;
mod records;

pub use output::CampaignOutput;
pub use records::{AttributeValue, AuditStamp, CampaignAttribute, CampaignRow, StoredCampaign};
