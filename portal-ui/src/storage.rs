use dioxus_logger::tracing;
use portal_core::{MemoryStore, Result, ThemeStore, UiError};
use web_sys::Storage;

use crate::dom::js_error;

/// `window.localStorage` under a single key.
///
/// Storage is looked up on every access. Private browsing modes and
/// disabled cookies make it throw or return null; the controller treats
/// either as "no persisted preference".
#[derive(Debug, Clone)]
pub struct LocalStorage {
    key: String,
}

impl LocalStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Succeeds when the browser hands out a storage object at all.
    pub fn check(&self) -> Result<()> {
        self.storage().map(|_| ())
    }

    fn storage(&self) -> Result<Storage> {
        let window =
            web_sys::window().ok_or_else(|| UiError::StorageUnavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(|e| UiError::StorageUnavailable(js_error(&e)))?
            .ok_or_else(|| UiError::StorageUnavailable("localStorage disabled".into()))
    }
}

impl ThemeStore for LocalStorage {
    fn load(&self) -> Result<Option<String>> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|e| UiError::Storage(js_error(&e)))
    }

    fn save(&self, value: &str) -> Result<()> {
        self.storage()?
            .set_item(&self.key, value)
            .map_err(|e| UiError::Storage(js_error(&e)))
    }
}

/// Backing store picked once at mount.
#[derive(Debug)]
pub enum PreferenceStore {
    Local(LocalStorage),
    /// Storage was blocked at mount; the preference lives for this page only.
    Session(MemoryStore),
}

impl PreferenceStore {
    pub fn for_key(key: &str) -> Self {
        let local = LocalStorage::new(key);
        match local.check() {
            Ok(()) => PreferenceStore::Local(local),
            Err(e) => {
                tracing::debug!("{e}, theme preference kept in memory");
                PreferenceStore::Session(MemoryStore::new())
            }
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, PreferenceStore::Local(_))
    }
}

impl ThemeStore for PreferenceStore {
    fn load(&self) -> Result<Option<String>> {
        match self {
            PreferenceStore::Local(store) => store.load(),
            PreferenceStore::Session(store) => store.load(),
        }
    }

    fn save(&self, value: &str) -> Result<()> {
        match self {
            PreferenceStore::Local(store) => store.save(value),
            PreferenceStore::Session(store) => store.save(value),
        }
    }
}
