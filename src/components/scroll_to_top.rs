use dioxus::prelude::*;

use crate::utils::device::use_window_flag;
use crate::utils::dom;
use crate::utils::ThemeState;

/// Scroll offset after which the button slides in.
pub const SHOW_AFTER_PX: f64 = 300.0;

pub fn should_show(scroll_y: f64) -> bool {
    scroll_y > SHOW_AFTER_PX
}

fn scrolled_down() -> bool {
    should_show(dom::scroll_y())
}

#[component]
pub fn ScrollToTop() -> Element {
    let theme_state = use_context::<Signal<ThemeState>>();
    let visible = use_window_flag("scroll", scrolled_down);

    let palette = theme_state().theme.palette();
    let (bottom, opacity) = if visible() { (30, 1) } else { (-60, 0) };
    let style = format!(
        "bottom: {}px; opacity: {}; border: 1.6px solid {}; color: {}; box-shadow: {};",
        bottom,
        opacity,
        palette.accent_alpha(0.5),
        palette.accent,
        palette.accent_glow(15, 0.3)
    );

    rsx! {
        button {
            class: "scroll-to-top",
            style,
            onclick: move |_| dom::scroll_to_top(),
            i { class: "fas fa-arrow-up" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shows_only_past_threshold() {
        assert!(!should_show(0.0));
        assert!(!should_show(300.0));
        assert!(should_show(300.5));
    }
}
