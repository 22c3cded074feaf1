use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;
use wasm_bindgen::JsCast;
use web_sys::{ CanvasRenderingContext2d, HtmlElement, MouseEvent };

use crate::effects::cursor::{ Inertia, Ripple, Ripples, Trail, TRAIL_MAX_WIDTH };
use crate::effects::ocean::water_surface_y;
use crate::utils::device::use_is_mobile;
use crate::utils::dom::{ self, fit_canvas, next_frame, use_event_listener, ListenOn };
use crate::utils::{ Theme, ThemeState };

const DOT_ID: &str = "cursor-dot";
const FLASH_ID: &str = "cursor-flash";
const CANVAS_ID: &str = "cursor-canvas";

#[derive(Debug, Default)]
struct PointerState {
    mouse: (f64, f64),
    /// Pointer position at the previous frame.
    last: (f64, f64),
    visible: bool,
    snap: bool,
    ripples: Ripples,
}

fn surface_y() -> f64 {
    water_surface_y(dom::current_scroll_progress(), dom::viewport().height)
}

fn flash_at(at: (f64, f64)) {
    if let Some(flash) = dom::element_by_id::<HtmlElement>(FLASH_ID) {
        dom::set_style(&flash, "left", &format!("{}px", at.0));
        dom::set_style(&flash, "top", &format!("{}px", at.1));
        dom::replay_class(&flash, "flash-active");
    }
}

fn draw_trail(ctx: &CanvasRenderingContext2d, trail: &Trail, head: (f64, f64)) {
    ctx.set_shadow_color("white");
    ctx.set_shadow_blur(10.0);
    ctx.set_line_cap("round");
    for (from, to, age) in trail.segments() {
        ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", age));
        ctx.set_line_width(TRAIL_MAX_WIDTH * age);
        ctx.begin_path();
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        ctx.stroke();
    }

    ctx.set_shadow_blur(20.0);
    ctx.set_fill_style_str("white");
    ctx.begin_path();
    if ctx.arc(head.0, head.1, 5.0, 0.0, TAU).is_ok() {
        ctx.fill();
    }
    ctx.set_shadow_blur(0.0);
}

fn draw_ripples(ctx: &CanvasRenderingContext2d, ripples: &[Ripple]) {
    for ripple in ripples {
        ctx.set_stroke_style_str(&format!("rgba(180, 230, 255, {})", ripple.alpha));
        ctx.set_line_width(ripple.line_width());
        ctx.begin_path();
        if ctx.arc(ripple.x, ripple.y, ripple.radius, 0.0, TAU).is_ok() {
            ctx.stroke();
        }
    }
}

/// Replaces the system pointer on devices with a mouse.
#[component]
pub fn CustomCursor() -> Element {
    let is_mobile = use_is_mobile();
    if is_mobile() {
        return rsx! {};
    }
    rsx! { CursorLayer {} }
}

#[component]
fn CursorLayer() -> Element {
    let theme_state = use_context::<Signal<ThemeState>>();
    let pointer = use_hook(|| Rc::new(RefCell::new(PointerState::default())));

    {
        let pointer = pointer.clone();
        use_event_listener(ListenOn::Window, "mousemove", move |event| {
            if let Some(e) = event.dyn_ref::<MouseEvent>() {
                let mut state = pointer.borrow_mut();
                state.mouse = (e.client_x() as f64, e.client_y() as f64);
                state.visible = true;
            }
        });
    }
    {
        let pointer = pointer.clone();
        use_event_listener(ListenOn::Document, "mouseleave", move |_| {
            pointer.borrow_mut().visible = false;
        });
    }
    {
        let pointer = pointer.clone();
        use_event_listener(ListenOn::Document, "mouseenter", move |_| {
            let mut state = pointer.borrow_mut();
            state.visible = true;
            state.snap = true;
        });
    }

    let clicks = {
        let pointer = pointer.clone();
        use_coroutine(move |mut rx: UnboundedReceiver<(f64, f64)>| {
            let pointer = pointer.clone();
            async move {
                while let Some(at) = rx.next().await {
                    let state = *theme_state.peek();
                    if state.is_changing {
                        continue;
                    }
                    flash_at(at);
                    if state.theme == Theme::Underwater {
                        pointer.borrow_mut().ripples.splash(at, surface_y());
                    }
                }
            }
        })
    };
    use_event_listener(ListenOn::Window, "mousedown", move |event| {
        if let Some(e) = event.dyn_ref::<MouseEvent>() {
            clicks.send((e.client_x() as f64, e.client_y() as f64));
        }
    });

    use_future(move || {
        let pointer = pointer.clone();
        async move {
            next_frame().await;
            let canvas = dom::canvas_2d(CANVAS_ID);
            if canvas.is_none() {
                log::warn!("Canvas #{} is not available", CANVAS_ID);
            }
            let mut inertia = Inertia::default();
            let mut trail = Trail::default();

            loop {
                let now = next_frame().await;
                let current = *theme_state.peek();
                let mut state = pointer.borrow_mut();

                if state.snap {
                    inertia.snap(state.mouse);
                    state.snap = false;
                }
                inertia.follow(state.mouse);
                if let Some(dot) = dom::element_by_id::<HtmlElement>(DOT_ID) {
                    dom::set_style(&dot, "left", &format!("{}px", inertia.x));
                    dom::set_style(&dot, "top", &format!("{}px", inertia.y));
                    let shown = state.visible && !current.is_changing;
                    dom::set_style(&dot, "opacity", if shown { "1" } else { "0" });
                }

                let Some((canvas, ctx)) = canvas.as_ref() else {
                    continue;
                };
                fit_canvas(canvas);
                if current.is_changing {
                    continue;
                }
                ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);

                let moving = state.mouse != state.last;
                match current.theme {
                    Theme::Cosmos => {
                        trail.update(state.mouse, moving, now);
                        draw_trail(ctx, &trail, state.mouse);
                    }
                    Theme::Underwater => {
                        let surface = surface_y();
                        if moving {
                            let delta = (state.mouse.0 - state.last.0, state.mouse.1 - state.last.1);
                            state.ripples.wake((inertia.x, inertia.y), delta, surface);
                        }
                        let visible = state.ripples.step(surface);
                        draw_ripples(ctx, &visible);
                    }
                    Theme::Default => {}
                }
                state.last = state.mouse;
            }
        }
    });

    let state = theme_state();
    let palette = state.theme.palette();
    let canvas_display = if state.theme == Theme::Default { "none" } else { "block" };
    let canvas_opacity = if state.is_changing { 0 } else { 1 };
    let dot_display = if state.theme == Theme::Cosmos { "none" } else { "block" };

    rsx! {
        canvas {
            id: CANVAS_ID,
            class: "cursor-canvas",
            style: "display: {canvas_display}; opacity: {canvas_opacity};",
        }
        div {
            id: DOT_ID,
            class: "cursor",
            style: "display: {dot_display}; background: {palette.cursor}; box-shadow: {palette.cursor_shadow};",
        }
        div {
            id: FLASH_ID,
            class: "cursor-flash",
            style: "background: {palette.flash};",
        }
    }
}
