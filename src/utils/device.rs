use dioxus::prelude::*;
use futures_util::StreamExt;
use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::dom::{ self, use_event_listener, ListenOn };

/// Widest viewport still treated as a phone when it also has touch input.
pub const MOBILE_MAX_WIDTH: f64 = 768.0;
/// Below this width the social buttons switch to a 2x2 grid.
pub const COMPACT_MAX_WIDTH: f64 = 640.0;

lazy_static! {
    static ref MOBILE_AGENT: Regex = Regex::new(
        r"(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini"
    ).unwrap();
}

pub fn is_mobile_device(user_agent: &str, width: f64, touch: bool) -> bool {
    MOBILE_AGENT.is_match(user_agent) || (width <= MOBILE_MAX_WIDTH && touch)
}

pub fn detect_mobile() -> bool {
    is_mobile_device(&dom::user_agent(), dom::viewport().width, dom::has_touch())
}

pub fn detect_compact() -> bool {
    dom::viewport().width < COMPACT_MAX_WIDTH
}

/// A boolean derived from the window that is recomputed whenever `event` fires.
pub fn use_window_flag(event: &'static str, compute: fn() -> bool) -> Signal<bool> {
    let mut flag = use_signal(compute);
    let updates = use_coroutine(move |mut rx: UnboundedReceiver<()>| async move {
        while rx.next().await.is_some() {
            let now = compute();
            if *flag.peek() != now {
                flag.set(now);
            }
        }
    });
    use_event_listener(ListenOn::Window, event, move |_| updates.send(()));
    flag
}

pub fn use_is_mobile() -> Signal<bool> {
    use_window_flag("resize", detect_mobile)
}
