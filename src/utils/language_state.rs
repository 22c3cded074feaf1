use std::fmt::{ Display, Formatter };
use std::str::FromStr;

use dioxus::prelude::*;

use crate::error::PreferenceError;
use crate::i18n::{ translate, Text };
use crate::utils::page::PageEffects;
use crate::utils::storage::{ save_preference, Preference, PreferenceStore };

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Ru, Language::En];

    pub fn id(self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Ru => Language::En,
            Language::En => Language::Ru,
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Language {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.id() == s)
            .ok_or_else(|| PreferenceError::Invalid(s.to_string()))
    }
}

impl Preference for Language {
    const STORAGE_KEY: &'static str = "selectedLanguage";
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LanguageState {
    pub language: Language,
}

impl LanguageState {
    pub fn t(&self, key: Text) -> &'static str {
        translate(self.language, key)
    }
}

pub fn apply_language(
    mut state: Signal<LanguageState>,
    store: &dyn PreferenceStore,
    page: &impl PageEffects,
    language: Language
) {
    log::info!("Switching language to {}", language);
    state.set(LanguageState { language });
    save_preference(store, language);
    page.set_document_lang(language.id());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_between_two() {
        assert_eq!(Language::Ru.toggled(), Language::En);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_state_translates_with_active_language() {
        let state = LanguageState { language: Language::En };
        assert_eq!(state.t(Text::PhotosTitle), "Photos");
        assert_eq!(LanguageState::default().t(Text::PhotosTitle), "Фотографии");
    }
}
