use dioxus::prelude::*;
use core_profile::i18n::Text;
use core_profile::utils::{
    load_preference,
    sync_body_theme,
    BrowserPage,
    BrowserStore,
    Language,
    LanguageState,
    PageEffects,
    Theme,
    ThemeState,
};
use core_profile::Route;

const FAVICON: Asset = asset!("/assets/icons/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const FONT_AWESOME: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.2/css/all.min.css";

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logging: {}", e).into());
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let theme = use_signal(|| ThemeState::new(load_preference::<Theme>(&BrowserStore)));
    let language = use_signal(|| LanguageState { language: load_preference::<Language>(&BrowserStore) });
    use_context_provider(|| theme);
    use_context_provider(|| language);

    use_effect(move || sync_body_theme(&BrowserPage, theme().theme));
    use_effect(move || BrowserPage.set_document_lang(language().language.id()));

    let title = language().t(Text::Name);

    rsx! {
        document::Title { "{title}" }
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: FONT_AWESOME, crossorigin: "anonymous" }
        Router::<Route> {}
    }
}
