use dioxus::prelude::*;
use futures_util::StreamExt;
use wasm_bindgen::JsCast;
use web_sys::{ KeyboardEvent, Node };

use crate::utils::dom::{ self, use_event_listener, ListenOn };
use crate::utils::{ apply_theme, BrowserPage, BrowserStore, LanguageState, Theme, ThemeState };

const CONTAINER_ID: &str = "theme-toggle";

/// Whether a document event started outside the toggle and its dropdown.
fn is_outside(event: &web_sys::Event) -> bool {
    let Some(container) = dom::element_by_id::<Node>(CONTAINER_ID) else {
        return true;
    };
    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
    !container.contains(target.as_ref())
}

/// Button showing the active theme with a dropdown of the other two.
#[component]
pub fn ThemeToggle() -> Element {
    let theme_state = use_context::<Signal<ThemeState>>();
    let language = use_context::<Signal<LanguageState>>();
    let mut is_open = use_signal(|| false);

    let close = use_coroutine(move |mut rx: UnboundedReceiver<()>| async move {
        while rx.next().await.is_some() {
            if *is_open.peek() {
                is_open.set(false);
            }
        }
    });
    use_event_listener(ListenOn::Document, "mousedown", move |event| {
        if is_outside(&event) {
            close.send(());
        }
    });
    use_event_listener(ListenOn::Document, "keydown", move |event| {
        if event.dyn_ref::<KeyboardEvent>().is_some_and(|e| e.key() == "Escape") {
            close.send(());
        }
    });

    let current = theme_state().theme;
    let palette = current.palette();
    let t = language();
    let open = is_open();
    let track_alpha = if current == Theme::Default { 0.05 } else { 0.1 };
    let button_style = format!(
        "background: {}; border: 1px solid {}; color: {}; text-shadow: {};",
        palette.accent_alpha(track_alpha),
        palette.accent_alpha(0.3),
        palette.accent,
        palette.accent_glow(6, 0.6)
    );
    let dropdown_style = format!(
        "background: {}; border: 1.6px solid {};",
        palette.dropdown_bg,
        palette.accent_alpha(0.3)
    );
    let item_style = format!("color: {}; text-shadow: {};", palette.accent, palette.accent_glow(6, 0.6));

    rsx! {
        div {
            id: CONTAINER_ID,
            class: "theme-toggle-container",
            button {
                class: "theme-toggle-btn",
                style: button_style,
                onclick: move |_| is_open.set(!open),
                span { class: "theme-icon", {current.icon()} }
                span { {t.t(current.label())} }
                svg {
                    class: if open { "theme-chevron rotate-180" } else { "theme-chevron" },
                    fill: "none",
                    view_box: "0 0 24 24",
                    stroke: "currentColor",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M19 9l-7 7-7-7",
                    }
                }
            }
            div {
                class: if open { "theme-dropdown theme-dropdown-open" } else { "theme-dropdown" },
                style: dropdown_style,
                for other in current.others() {
                    button {
                        key: "{other}",
                        class: "theme-option",
                        style: item_style.clone(),
                        onclick: move |_| {
                            apply_theme(theme_state, &BrowserStore, BrowserPage, other);
                            is_open.set(false);
                        },
                        span { class: "theme-icon", {other.icon()} }
                        span { {t.t(other.label())} }
                    }
                }
            }
        }
    }
}
