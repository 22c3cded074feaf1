use dioxus::prelude::*;

use crate::i18n::Text;
use crate::utils::{ LanguageState, ThemeState };

const LINE_BREAK: &str = "<br/>";

pub fn hint_lines(text: &str) -> Vec<&str> {
    text.split(LINE_BREAK).map(str::trim).collect()
}

#[component]
pub fn HintText() -> Element {
    let theme_state = use_context::<Signal<ThemeState>>();
    let language = use_context::<Signal<LanguageState>>();
    let palette = theme_state().theme.palette();
    let lines = hint_lines(language().t(Text::Hint));
    let last = lines.len().saturating_sub(1);

    rsx! {
        p {
            class: "hint",
            style: format!("color: {};", palette.hint),
            for (i, line) in lines.into_iter().enumerate() {
                "{line}"
                if i < last {
                    br {}
                }
            }
        }
    }
}
