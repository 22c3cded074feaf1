use dioxus::html::point_interaction::InteractionLocation;
use dioxus::prelude::*;
use futures_util::StreamExt;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{ JsCast, JsValue };
use web_sys::{ IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit };

use crate::components::gallery::lightbox::{ Lightbox, LightboxAction };
use crate::configs::site;
use crate::i18n::Text;
use crate::error::js_message;
use crate::utils::dom::{ self, next_frame, use_event_listener, ListenOn };
use crate::utils::{ LanguageState, ThemeState };

/// Share of a tile that must be on screen before it slides in.
const REVEAL_THRESHOLD: f64 = 0.2;

const TILE_PREFIX: &str = "photo-tile-";

fn tile_id(index: usize) -> String {
    format!("{}{}", TILE_PREFIX, index)
}

fn tile_index(id: &str) -> Option<usize> {
    id.strip_prefix(TILE_PREFIX)?.parse().ok()
}

/// Browsers report ratios a hair under the threshold they fired for.
pub fn is_revealed(ratio: f64) -> bool {
    ratio >= REVEAL_THRESHOLD - 1e-3
}

/// Observes the gallery tiles and reports each index once, the first time it
/// is sufficiently on screen. Disconnects on drop.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn watch(count: usize, mut on_reveal: impl FnMut(usize) + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !is_revealed(entry.intersection_ratio()) {
                        continue;
                    }
                    let target = entry.target();
                    if let Some(index) = tile_index(&target.id()) {
                        observer.unobserve(&target);
                        on_reveal(index);
                    }
                }
            }
        );
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("Failed to observe gallery tiles: {}", js_message(&e));
                return None;
            }
        };
        for index in 0..count {
            if let Some(tile) = dom::element_by_id::<web_sys::Element>(&tile_id(index)) {
                observer.observe(&tile);
            }
        }
        Some(Self { observer, _callback: callback })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn reveal_offset(index: usize) -> &'static str {
    if index % 2 == 0 { "translateX(-50px)" } else { "translateX(50px)" }
}

fn tile_style(index: usize, shown: bool) -> String {
    let (opacity, transform) = if shown { (1, "translateX(0)") } else { (0, reveal_offset(index)) };
    format!("opacity: {}; transform: {}; transition-delay: {}ms;", opacity, transform, index * 100)
}

#[component]
pub fn PhotosSection() -> Element {
    let theme_state = use_context::<Signal<ThemeState>>();
    let language = use_context::<Signal<LanguageState>>();
    let photos = &site().photos;
    let count = photos.len();

    let mut lightbox = use_signal(move || Lightbox::new(count));
    let mut revealed = use_signal(move || vec![false; count]);
    let mut touch_start_x = use_signal(|| 0.0_f64);

    let reveal = use_coroutine(move |mut rx: UnboundedReceiver<usize>| async move {
        while let Some(index) = rx.next().await {
            if let Some(shown) = revealed.write().get_mut(index) {
                *shown = true;
            }
        }
    });
    use_future(move || async move {
        next_frame().await;
        let _observer = RevealObserver::watch(count, move |index| reveal.send(index));
        futures_util::future::pending::<()>().await;
    });

    let keys = use_coroutine(move |mut rx: UnboundedReceiver<LightboxAction>| async move {
        while let Some(action) = rx.next().await {
            if lightbox.peek().is_open() {
                lightbox.write().apply(action);
            }
        }
    });
    use_event_listener(ListenOn::Document, "keydown", move |event| {
        let action = event
            .dyn_ref::<web_sys::KeyboardEvent>()
            .and_then(|e| LightboxAction::from_key(&e.key()));
        if let Some(action) = action {
            keys.send(action);
        }
    });

    use_effect(move || {
        dom::set_body_scroll_locked(lightbox.read().is_open());
    });
    use_drop(|| dom::set_body_scroll_locked(false));

    let palette = theme_state().theme.palette();
    let t = language();
    let title_style = format!("color: {}; text-shadow: {};", palette.heading, palette.glow(10, 0.3));
    let nav_style = format!("color: {};", palette.accent);
    let modal_style = format!("background: {};", palette.modal_bg);
    let shown = revealed();
    let state = lightbox();
    let page = state.page();

    rsx! {
        section {
            class: "photos-section",
            h2 { class: "section-title", style: title_style, {t.t(Text::PhotosTitle)} }
            div {
                class: "photos-container",
                for (index, photo) in photos.iter().enumerate() {
                    div {
                        key: "{index}",
                        id: tile_id(index),
                        class: "photo-item",
                        style: tile_style(index, shown[index]),
                        onclick: move |_| lightbox.write().apply(LightboxAction::Open(index)),
                        img { class: "photo-image", src: photo.src.clone(), alt: t.t(photo.caption) }
                        div {
                            class: "photo-caption",
                            p { {t.t(photo.caption)} }
                        }
                    }
                }
            }
        }

        if let Some(selected) = state.selected() {
            div {
                class: "photo-gallery-modal",
                style: modal_style,
                onclick: move |_| lightbox.write().close(),
                ontouchstart: move |evt: TouchEvent| {
                    if let Some(touch) = evt.touches().first() {
                        touch_start_x.set(touch.client_coordinates().x);
                    }
                },
                ontouchend: move |evt: TouchEvent| {
                    let Some(touch) = evt.touches_changed().first().map(|p| p.client_coordinates().x) else {
                        return;
                    };
                    if let Some(action) = LightboxAction::from_swipe(touch_start_x(), touch) {
                        lightbox.write().apply(action);
                    }
                },
                button {
                    class: "gallery-close",
                    style: nav_style.clone(),
                    onclick: move |evt| {
                        evt.stop_propagation();
                        lightbox.write().close();
                    },
                    i { class: "fas fa-times" }
                }
                button {
                    class: "gallery-nav gallery-prev",
                    style: nav_style.clone(),
                    onclick: move |evt| {
                        evt.stop_propagation();
                        lightbox.write().apply(LightboxAction::Prev);
                    },
                    i { class: "fas fa-chevron-left" }
                }
                div {
                    class: "gallery-stage",
                    onclick: move |evt| evt.stop_propagation(),
                    div {
                        key: "{page}",
                        class: "gallery-slide",
                        style: format!("--enter-from: {};", state.direction().enter_offset()),
                        img {
                            class: "gallery-image",
                            src: photos[selected].src.clone(),
                            alt: t.t(photos[selected].caption),
                        }
                    }
                }
                button {
                    class: "gallery-nav gallery-next",
                    style: nav_style,
                    onclick: move |evt| {
                        evt.stop_propagation();
                        lightbox.write().apply(LightboxAction::Next);
                    },
                    i { class: "fas fa-chevron-right" }
                }
                div { class: "gallery-counter", {state.counter().unwrap_or_default()} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_needs_a_fifth_on_screen() {
        assert!(is_revealed(0.2));
        assert!(is_revealed(0.1995));
        assert!(is_revealed(1.0));
        assert!(!is_revealed(0.15));
        assert!(!is_revealed(0.0));
    }

    #[test]
    fn test_tile_ids_map_back_to_indices() {
        assert_eq!(tile_index(&tile_id(3)), Some(3));
        assert_eq!(tile_index("photo-tile-"), None);
        assert_eq!(tile_index("cursor-dot"), None);
    }

    #[test]
    fn test_alternate_tiles_slide_from_opposite_sides() {
        assert_eq!(reveal_offset(0), "translateX(-50px)");
        assert_eq!(reveal_offset(3), "translateX(50px)");
        assert_eq!(tile_style(2, false), "opacity: 0; transform: translateX(-50px); transition-delay: 200ms;");
        assert_eq!(tile_style(1, true), "opacity: 1; transform: translateX(0); transition-delay: 100ms;");
    }
}
