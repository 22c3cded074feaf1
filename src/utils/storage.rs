use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use crate::error::PreferenceError;

/// A user setting that round-trips through a string in local storage.
pub trait Preference: Copy + Default + Display + FromStr {
    const STORAGE_KEY: &'static str;
}

pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Result<web_sys::Storage, PreferenceError> {
        web_sys::window()
            .ok_or(PreferenceError::Unavailable)?
            .local_storage()?
            .ok_or(PreferenceError::Unavailable)
    }
}

impl PreferenceStore for BrowserStore {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(Self::storage()?.get_item(key)?)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        Ok(Self::storage()?.set_item(key, value)?)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.items.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn load_preference<P: Preference>(store: &dyn PreferenceStore) -> P {
    match store.read(P::STORAGE_KEY) {
        Ok(Some(raw)) =>
            raw.parse().unwrap_or_else(|_| {
                log::debug!("Ignoring unknown value {:?} for {}", raw, P::STORAGE_KEY);
                P::default()
            }),
        Ok(None) => P::default(),
        Err(e) => {
            log::warn!("Failed to read {}: {}", P::STORAGE_KEY, e);
            P::default()
        }
    }
}

pub fn save_preference<P: Preference>(store: &dyn PreferenceStore, value: P) {
    if let Err(e) = store.write(P::STORAGE_KEY, &value.to_string()) {
        log::warn!("Failed to persist {}={}: {}", P::STORAGE_KEY, value, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{ Language, Theme };

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn read(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
            Err(PreferenceError::Unavailable)
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
            Err(PreferenceError::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_missing_value_falls_back_to_default() {
        let store = MemoryStore::new();
        assert_eq!(load_preference::<Theme>(&store), Theme::Default);
        assert_eq!(load_preference::<Language>(&store), Language::Ru);
    }

    #[test]
    fn test_malformed_value_falls_back_to_default() {
        let store = MemoryStore::with_item("selectedTheme", "neon");
        assert_eq!(load_preference::<Theme>(&store), Theme::Default);

        let store = MemoryStore::with_item("selectedLanguage", "EN ");
        assert_eq!(load_preference::<Language>(&store), Language::Ru);
    }

    #[test]
    fn test_saved_value_is_read_back() {
        let store = MemoryStore::new();
        save_preference(&store, Theme::Underwater);
        save_preference(&store, Language::En);

        assert_eq!(store.get("selectedTheme").as_deref(), Some("underwater"));
        assert_eq!(store.get("selectedLanguage").as_deref(), Some("en"));
        assert_eq!(load_preference::<Theme>(&store), Theme::Underwater);
        assert_eq!(load_preference::<Language>(&store), Language::En);
    }

    #[test]
    fn test_store_failures_are_swallowed() {
        assert_eq!(load_preference::<Theme>(&BrokenStore), Theme::Default);
        save_preference(&BrokenStore, Language::En);
    }
}
