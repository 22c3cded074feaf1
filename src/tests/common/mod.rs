pub mod mocks;

use crate::utils::{ MemoryStore, PreferenceStore };

pub fn setup() {
    std::env::set_var("RUST_LOG", "debug");
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A store as a returning visitor's browser would have it.
pub fn returning_visitor(theme: &str, language: &str) -> MemoryStore {
    let store = MemoryStore::with_item("selectedTheme", theme);
    store.write("selectedLanguage", language).ok();
    store
}
