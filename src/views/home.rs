use dioxus::prelude::*;

use crate::components::{
    CustomCursor,
    Footer,
    Header,
    HeroSection,
    HintText,
    PhotosSection,
    ScrollToTop,
    SocialButtons,
    TerminalPreloader,
    ThemeBackground,
};

/// The single profile page: preloader first, then the content fades in.
#[component]
pub fn Home() -> Element {
    let mut show_content = use_signal(|| false);
    let shown = show_content();

    rsx! {
        if !shown {
            TerminalPreloader {
                on_complete: move |_| {
                    log::info!("Preloader finished");
                    show_content.set(true);
                },
            }
        }
        CustomCursor {}
        ThemeBackground {}
        Header { visible: shown }
        main {
            class: if shown { "main-container" } else { "main-container main-container-hidden" },
            div {
                class: "container",
                HeroSection {}
                SocialButtons {}
                HintText {}
            }
            PhotosSection {}
        }
        Footer {}
        ScrollToTop {}
    }
}
