use dioxus::prelude::*;

use crate::configs::site;
use crate::i18n::Text;
use crate::utils::LanguageState;

#[component]
pub fn Footer() -> Element {
    let language = use_context::<Signal<LanguageState>>();
    let t = language();

    rsx! {
        footer {
            class: "site-footer",
            p { class: "footer-text", {t.t(Text::FooterLine1)} }
            p { class: "footer-text", {t.t(Text::FooterLine2)} }
            p {
                class: "footer-text footer-github",
                {t.t(Text::FooterGithub)}
                " "
                a {
                    href: site().links.github.clone(),
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "GitHub"
                }
            }
        }
    }
}
