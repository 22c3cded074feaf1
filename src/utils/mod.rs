pub mod device;
pub mod dom;
mod language_state;
mod page;
mod palette;
mod storage;
mod theme_state;

pub use language_state::{ apply_language, Language, LanguageState };
pub use page::{ BrowserPage, PageEffects };
pub use palette::Palette;
pub use storage::{ load_preference, save_preference, BrowserStore, MemoryStore, Preference, PreferenceStore };
pub use theme_state::{ apply_theme, sync_body_theme, Theme, ThemeState, THEME_CHANGE_MS };
