//! Campaign Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::campaigns::CampaignRecord;

/// Wrapper for campaigns in YAML
#[derive(Debug, Deserialize)]
pub struct CampaignsFixture {
    /// Map of campaign key -> campaign record
    pub campaigns: FxHashMap<String, CampaignRecord>,
}
