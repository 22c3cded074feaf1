//! Thin wrappers over `web_sys` for the handful of browser APIs the page
//! touches. Everything here is a no-op when there is no window.

use std::rc::Rc;

use dioxus::prelude::*;
use js_sys::Promise;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{ JsCast, JsValue };
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    AddEventListenerOptions,
    CanvasRenderingContext2d,
    Document,
    EventTarget,
    HtmlCanvasElement,
    HtmlElement,
};

use crate::error::{ js_message, PreferenceError };

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn body() -> Option<HtmlElement> {
    document()?.body()
}

pub fn add_body_class(class: &str) {
    if let Some(body) = body() {
        let _ = body.class_list().add_1(class);
    }
}

pub fn remove_body_class(class: &str) {
    if let Some(body) = body() {
        let _ = body.class_list().remove_1(class);
    }
}

pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = body() {
        let style = body.style();
        let _ = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
    }
}

pub fn set_document_lang(lang: &str) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("lang", lang);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

pub fn viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return Viewport::default();
    };
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport {
        width: dim(window.inner_width()),
        height: dim(window.inner_height()),
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn document_height() -> f64 {
    document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0)
}

/// Scroll position as a fraction of the scrollable height, in `[0, 1]`.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable > 0.0 {
        (scroll_top / scrollable).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

pub fn current_scroll_progress() -> f64 {
    scroll_progress(scroll_y(), document_height(), viewport().height)
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn user_agent() -> String {
    web_sys::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

pub fn has_touch() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("ontouchstart")).unwrap_or(false))
        .unwrap_or(false)
}

pub fn element_by_id<T: JsCast>(id: &str) -> Option<T> {
    document()?.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

/// Restarts a CSS animation class on an element.
pub fn replay_class(el: &HtmlElement, class: &str) {
    let classes = el.class_list();
    let _ = classes.remove_1(class);
    // forces reflow so the animation starts over
    let _ = el.offset_width();
    let _ = classes.add_1(class);
}

/// Looks up a canvas, sizes it to the viewport and returns its 2d context.
pub fn canvas_2d(id: &str) -> Option<(HtmlCanvasElement, CanvasRenderingContext2d)> {
    let canvas = element_by_id::<HtmlCanvasElement>(id)?;
    let ctx = canvas.get_context("2d").ok()??.dyn_into::<CanvasRenderingContext2d>().ok()?;
    fit_canvas(&canvas);
    Some((canvas, ctx))
}

/// Resizes the canvas backing store when the viewport changed. Returns true on resize.
pub fn fit_canvas(canvas: &HtmlCanvasElement) -> bool {
    let vp = viewport();
    let (w, h) = (vp.width as u32, vp.height as u32);
    if canvas.width() == w && canvas.height() == h {
        return false;
    }
    canvas.set_width(w);
    canvas.set_height(h);
    true
}

/// Resolves on the next animation frame with its timestamp in milliseconds.
pub async fn next_frame() -> f64 {
    let promise = Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(&resolve);
        }
    });
    JsFuture::from(promise)
        .await
        .ok()
        .and_then(|ts| ts.as_f64())
        .unwrap_or(0.0)
}

pub async fn sleep_ms(ms: u32) {
    let promise = Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32);
        }
    });
    let _ = JsFuture::from(promise).await;
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), PreferenceError> {
    let window = web_sys::window().ok_or(PreferenceError::Unavailable)?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| PreferenceError::Clipboard(js_message(&e)))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ListenOn {
    Window,
    Document,
}

/// Events fired continuously while the user moves or scrolls. Their listeners
/// never cancel the default action.
const PASSIVE_EVENTS: [&str; 4] = ["mousemove", "scroll", "resize", "touchmove"];

pub fn is_passive(event: &str) -> bool {
    PASSIVE_EVENTS.contains(&event)
}

/// An event listener that unregisters itself when dropped.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListener {
    pub fn attach(
        on: ListenOn,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let target: EventTarget = match on {
            ListenOn::Window => window.into(),
            ListenOn::Document => window.document()?.into(),
        };
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(is_passive(event));
        let added = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options
        );
        if let Err(e) = added {
            log::warn!("Failed to listen for {}: {}", event, js_message(&e));
            return None;
        }
        Some(Self { target, event, closure })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.closure.as_ref().unchecked_ref()
        );
    }
}

/// Listens for `event` for as long as the calling component is mounted.
pub fn use_event_listener(
    on: ListenOn,
    event: &'static str,
    handler: impl FnMut(web_sys::Event) + 'static
) {
    use_hook(move || Rc::new(EventListener::attach(on, event, handler)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(1500.0, 2000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-40.0, 2000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_scroll_progress_without_scrollable_height() {
        assert_eq!(scroll_progress(100.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(100.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn test_only_motion_listeners_are_passive() {
        assert!(is_passive("mousemove"));
        assert!(is_passive("scroll"));
        assert!(!is_passive("keydown"));
        assert!(!is_passive("mousedown"));
    }

    #[test]
    fn test_viewport_center() {
        let vp = Viewport { width: 1280.0, height: 720.0 };
        assert_eq!(vp.center(), (640.0, 360.0));
    }
}
