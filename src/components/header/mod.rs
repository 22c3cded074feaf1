use dioxus::prelude::*;

mod language_toggle;
mod theme_toggle;

pub use language_toggle::LanguageToggle;
pub use theme_toggle::ThemeToggle;

#[component]
pub fn Header(visible: bool) -> Element {
    rsx! {
        header {
            class: if visible { "site-header" } else { "site-header site-header-hidden" },
            div {
                class: "header-container",
                ThemeToggle {}
                LanguageToggle {}
            }
        }
    }
}
