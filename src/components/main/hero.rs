use dioxus::prelude::*;

use crate::i18n::Text;
use crate::utils::{ LanguageState, ThemeState };

#[component]
pub fn HeroSection() -> Element {
    let theme_state = use_context::<Signal<ThemeState>>();
    let language = use_context::<Signal<LanguageState>>();
    let palette = theme_state().theme.palette();
    let t = language();

    rsx! {
        div {
            class: "hero-section",
            h1 {
                class: "name",
                style: format!("color: {}; text-shadow: {};", palette.heading, palette.glow(15, 0.4)),
                {t.t(Text::Name)}
            }
            p {
                class: "subtitle",
                style: format!("color: {};", palette.subtitle),
                {t.t(Text::Subtitle)}
            }
        }
    }
}
