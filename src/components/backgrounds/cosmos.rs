use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::backgrounds::fill_circle;
use crate::effects::seeded_rng;
use crate::effects::starfield::{ Camera, Starfield };
use crate::utils::dom::{ self, fit_canvas, next_frame, use_event_listener, ListenOn };
use crate::utils::ThemeState;

const CANVAS_ID: &str = "cosmos-canvas";

#[component]
pub fn CosmosBackground() -> Element {
    let theme_state = use_context::<Signal<ThemeState>>();
    let mouse = use_hook(|| Rc::new(Cell::new(dom::viewport().center())));

    {
        let mouse = mouse.clone();
        use_event_listener(ListenOn::Window, "mousemove", move |event| {
            if let Some(e) = event.dyn_ref::<web_sys::MouseEvent>() {
                mouse.set((e.client_x() as f64, e.client_y() as f64));
            }
        });
    }

    use_future(move || {
        let mouse = mouse.clone();
        async move {
            next_frame().await;
            let Some((canvas, ctx)) = dom::canvas_2d(CANVAS_ID) else {
                log::warn!("Canvas #{} is not available", CANVAS_ID);
                return;
            };
            let field = Starfield::generate(&mut seeded_rng());
            log::debug!("Generated {} stars", field.stars().len());

            loop {
                next_frame().await;
                fit_canvas(&canvas);
                let vp = dom::viewport();
                ctx.clear_rect(0.0, 0.0, vp.width, vp.height);
                let camera = Camera::new(dom::scroll_y(), mouse.get(), vp.center());

                for (star, p) in field.project_all(camera, vp.width, vp.height) {
                    let radius = star.size * p.scale / 2.0;
                    ctx.set_global_alpha(p.opacity);
                    ctx.set_shadow_color("rgba(255, 255, 255, 0.8)");
                    ctx.set_shadow_blur(star.size * p.scale);
                    ctx.set_fill_style_str("#ffffff");
                    fill_circle(&ctx, p.x, p.y, radius);
                }
                ctx.set_global_alpha(1.0);
                ctx.set_shadow_blur(0.0);
            }
        }
    });

    let state = theme_state();
    let opacity = if state.is_changing { 0 } else { 1 };
    let background = state.theme.palette().page_bg;

    rsx! {
        div {
            class: "cosmos-background",
            style: "opacity: {opacity}; background: {background};",
            canvas { id: CANVAS_ID, class: "background-canvas" }
        }
    }
}
