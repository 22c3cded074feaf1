use std::fmt::{ Display, Formatter };
use std::str::FromStr;

use dioxus::prelude::*;

use crate::error::PreferenceError;
use crate::i18n::Text;
use crate::utils::page::PageEffects;
use crate::utils::storage::{ save_preference, Preference, PreferenceStore };

/// How long the `changing-theme` body class stays on while effects swap.
pub const THEME_CHANGE_MS: u32 = 150;

const CHANGING_CLASS: &str = "changing-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Default,
    Cosmos,
    Underwater,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Default, Theme::Cosmos, Theme::Underwater];

    pub fn id(self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Cosmos => "cosmos",
            Theme::Underwater => "underwater",
        }
    }

    pub fn css_class(self) -> String {
        format!("theme-{}", self.id())
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Default => "🔢",
            Theme::Cosmos => "🌌",
            Theme::Underwater => "🌊",
        }
    }

    pub fn label(self) -> Text {
        match self {
            Theme::Default => Text::ThemeMatrix,
            Theme::Cosmos => Text::ThemeCosmos,
            Theme::Underwater => Text::ThemeOcean,
        }
    }

    /// The themes offered in the dropdown while `self` is active.
    pub fn others(self) -> impl Iterator<Item = Theme> {
        Self::ALL.into_iter().filter(move |t| *t != self)
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Theme {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| PreferenceError::Invalid(s.to_string()))
    }
}

impl Preference for Theme {
    const STORAGE_KEY: &'static str = "selectedTheme";
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ThemeState {
    pub theme: Theme,
    pub is_changing: bool,
}

impl ThemeState {
    pub fn new(theme: Theme) -> Self {
        Self { theme, is_changing: false }
    }

    pub fn is(&self, theme: Theme) -> bool {
        self.theme == theme
    }
}

/// Switches theme, persists it and blanks the effects for a short moment.
pub fn apply_theme<P: PageEffects>(
    mut state: Signal<ThemeState>,
    store: &dyn PreferenceStore,
    page: P,
    theme: Theme
) {
    if state.peek().theme == theme {
        return;
    }
    log::info!("Switching theme to {}", theme);

    state.set(ThemeState { theme, is_changing: true });
    save_preference(store, theme);
    page.add_body_class(CHANGING_CLASS);
    sync_body_theme(&page, theme);

    spawn(async move {
        page.sleep(THEME_CHANGE_MS).await;
        state.write().is_changing = false;
        page.remove_body_class(CHANGING_CLASS);
    });
}

/// Keeps exactly one `theme-*` class on `<body>`.
pub fn sync_body_theme(page: &impl PageEffects, theme: Theme) {
    for other in Theme::ALL {
        page.remove_body_class(&other.css_class());
    }
    page.add_body_class(&theme.css_class());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_ids_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
        assert_eq!(Theme::Underwater.css_class(), "theme-underwater");
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        assert_eq!("Cosmos".parse::<Theme>(), Err(PreferenceError::Invalid("Cosmos".to_string())));
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn test_dropdown_lists_the_other_two() {
        let others: Vec<_> = Theme::Cosmos.others().collect();
        assert_eq!(others, vec![Theme::Default, Theme::Underwater]);
    }

    #[test]
    fn test_default_state() {
        let state = ThemeState::default();
        assert!(state.is(Theme::Default));
        assert!(!state.is_changing);
    }
}
