//! Settings lookup.

use mockall::automock;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::tenants::{SettingsLookupError, TenantSetting};

#[automock]
/// Synchronous lookup of tenant settings by name.
pub trait SettingsLookup: Send + Sync {
    /// Fetch a setting; `Ok(None)` when no setting has that name.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot answer.
    fn setting(&self, name: &str) -> Result<Option<TenantSetting>, SettingsLookupError>;
}

impl<T: SettingsLookup + ?Sized> SettingsLookup for &T {
    fn setting(&self, name: &str) -> Result<Option<TenantSetting>, SettingsLookupError> {
        (**self).setting(name)
    }
}

/// Settings held in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettings {
    settings: FxHashMap<String, TenantSetting>,
}

impl InMemorySettings {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a setting, keyed by its name.
    pub fn insert(&mut self, setting: TenantSetting) -> &mut Self {
        self.settings.insert(setting.name.clone(), setting);
        self
    }

    /// Number of stored settings.
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    /// Whether the store holds no settings.
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}

impl FromIterator<TenantSetting> for InMemorySettings {
    fn from_iter<I: IntoIterator<Item = TenantSetting>>(iter: I) -> Self {
        let mut store = Self::new();

        for setting in iter {
            store.insert(setting);
        }

        store
    }
}

impl SettingsLookup for InMemorySettings {
    fn setting(&self, name: &str) -> Result<Option<TenantSetting>, SettingsLookupError> {
        let setting = self.settings.get(name).cloned();

        if setting.is_none() {
            debug!(setting = name, "setting not found");
        }

        Ok(setting)
    }
}
