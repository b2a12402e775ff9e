//! Fixtures
//!
//! Named sets of campaign records and tenant settings loaded from YAML files
//! laid out as `<base>/campaigns/<name>.yml` and `<base>/settings/<name>.yml`.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    campaigns::CampaignRecord,
    fixtures::{campaigns::CampaignsFixture, settings::SettingsFixture},
    tenants::InMemorySettings,
};

pub mod campaigns;
pub mod settings;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Campaign not found
    #[error("Campaign not found: {0}")]
    CampaignNotFound(String),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Campaign records by fixture key
    campaigns: FxHashMap<String, CampaignRecord>,

    /// Tenant settings
    settings: InMemorySettings,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            campaigns: FxHashMap::default(),
            settings: InMemorySettings::new(),
        }
    }

    /// Load campaign records from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_campaigns(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("campaigns").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: CampaignsFixture = serde_norway::from_str(&contents)?;

        self.campaigns.extend(fixture.campaigns);

        Ok(self)
    }

    /// Load tenant settings from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_settings(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("settings").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: SettingsFixture = serde_norway::from_str(&contents)?;

        for setting in fixture.settings {
            self.settings.insert(setting);
        }

        Ok(self)
    }

    /// Load campaigns and settings sharing the same set name
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read or parsed.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_campaigns(name)?.load_settings(name)?;

        Ok(fixture)
    }

    /// Get a campaign by its fixture key
    ///
    /// # Errors
    ///
    /// Returns an error if the campaign is not found.
    pub fn campaign(&self, key: &str) -> Result<&CampaignRecord, FixtureError> {
        self.campaigns
            .get(key)
            .ok_or_else(|| FixtureError::CampaignNotFound(key.to_string()))
    }

    /// All campaigns, sorted by fixture key
    pub fn campaigns(&self) -> Vec<(&str, &CampaignRecord)> {
        let mut campaigns: Vec<(&str, &CampaignRecord)> = self
            .campaigns
            .iter()
            .map(|(key, record)| (key.as_str(), record))
            .collect();

        campaigns.sort_unstable_by_key(|(key, _)| *key);

        campaigns
    }

    /// Loaded tenant settings
    pub fn settings(&self) -> &InMemorySettings {
        &self.settings
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use testresult::TestResult;

    use crate::{
        campaigns::CampaignType,
        tenants::{SettingsLookup, VERTICAL_SETTING},
    };

    use super::*;

    fn write_fixture(base: &Path, category: &str, name: &str, contents: &str) -> TestResult {
        let dir = base.join(category);

        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("{name}.yml")), contents)?;

        Ok(())
    }

    #[test]
    fn fixture_from_set_loads_campaigns_and_settings() -> TestResult {
        let fixture = Fixture::from_set("default")?;

        let minimal = fixture.campaign("minimal")?;

        assert_eq!(minimal.campaign_type, Some(CampaignType::Auto));
        assert!(fixture.campaigns().len() > 1);
        assert!(fixture.settings().setting(VERTICAL_SETTING)?.is_some());

        Ok(())
    }

    #[test]
    fn fixture_campaigns_are_sorted_by_key() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_fixture(
            dir.path(),
            "campaigns",
            "sorted",
            "campaigns:\n  zulu: {name: Z}\n  alpha: {name: A}\n  mike: {name: M}\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());
        fixture.load_campaigns("sorted")?;

        let keys: Vec<&str> = fixture.campaigns().into_iter().map(|(key, _)| key).collect();

        assert_eq!(keys, vec!["alpha", "mike", "zulu"]);

        Ok(())
    }

    #[test]
    fn fixture_later_settings_replace_earlier_ones() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_fixture(
            dir.path(),
            "settings",
            "tenant",
            "settings:\n  - {name: vertical, value: retail}\n  - {name: vertical, value: \"retail,store_regions\"}\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());
        fixture.load_settings("tenant")?;

        let value = fixture.settings().setting(VERTICAL_SETTING)?.map(|s| s.value);

        assert_eq!(value.as_deref(), Some("retail,store_regions"));

        Ok(())
    }

    #[test]
    fn fixture_campaign_not_found_returns_error() {
        let fixture = Fixture::new();
        let result = fixture.campaign("nonexistent");

        assert!(matches!(result, Err(FixtureError::CampaignNotFound(_))));
    }

    #[test]
    fn fixture_missing_file_returns_io_error() {
        let mut fixture = Fixture::with_base_path("./does-not-exist");
        let result = fixture.load_campaigns("default");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }

    #[test]
    fn fixture_invalid_yaml_returns_error() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_fixture(dir.path(), "campaigns", "broken", "campaigns: [not, a, map]\n")?;

        let mut fixture = Fixture::with_base_path(dir.path());
        let result = fixture.load_campaigns("broken");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));

        Ok(())
    }
}
