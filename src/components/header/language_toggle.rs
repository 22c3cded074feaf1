use dioxus::prelude::*;

use crate::utils::{ apply_language, BrowserPage, BrowserStore, Language, LanguageState, ThemeState };

/// Pill switch between Russian and English.
#[component]
pub fn LanguageToggle() -> Element {
    let theme_state = use_context::<Signal<ThemeState>>();
    let language = use_context::<Signal<LanguageState>>();

    let palette = theme_state().theme.palette();
    let current = language().language;
    let is_ru = current == Language::Ru;

    let label_style = |active: bool| {
        if active {
            format!("color: {}; text-shadow: {};", palette.accent, palette.accent_glow(6, 0.6))
        } else {
            format!("color: {}; text-shadow: none;", palette.accent_alpha(0.4))
        }
    };
    let track_style = format!(
        "background: {}; border: 1px solid {};",
        palette.accent_alpha(0.05),
        palette.accent_alpha(0.3)
    );
    let thumb_style = format!(
        "left: {}; background: {}; border: 1.6px solid {}; box-shadow: 0 0 10px {}, inset 0 0 10px {};",
        if is_ru { "3px" } else { "calc(100% - 37px)" },
        palette.accent_alpha(0.2),
        palette.accent_alpha(0.3),
        palette.accent_alpha(0.4),
        palette.accent_alpha(0.2)
    );

    rsx! {
        button {
            class: "language-toggle",
            style: track_style,
            onclick: move |_| apply_language(language, &BrowserStore, &BrowserPage, current.toggled()),
            span { class: "language-label language-label-ru", style: label_style(is_ru), "РУ" }
            span { class: "language-label language-label-en", style: label_style(!is_ru), "EN" }
            div { class: "toggle-thumb", style: thumb_style }
        }
    }
}
