use dioxus::prelude::*;

use crate::effects::matrix::{ MatrixRain, FONT_SIZE };
use crate::effects::seeded_rng;
use crate::utils::dom::{ self, fit_canvas, next_frame };
use crate::utils::ThemeState;

const CANVAS_ID: &str = "matrix-bg";
const FADE: &str = "rgba(0, 0, 0, 0.04)";
const GREEN: &str = "#0f0";

#[component]
pub fn MatrixBackground() -> Element {
    let theme_state = use_context::<Signal<ThemeState>>();

    use_future(move || async move {
        next_frame().await;
        let Some((canvas, ctx)) = dom::canvas_2d(CANVAS_ID) else {
            log::warn!("Canvas #{} is not available", CANVAS_ID);
            return;
        };
        let mut rng = seeded_rng();
        let mut rain = MatrixRain::new();
        rain.resize(canvas.width() as f64, canvas.height() as f64, &mut rng);
        let font = format!("{}px 'Courier New', monospace", FONT_SIZE);

        loop {
            let timestamp = next_frame().await;
            let resized = fit_canvas(&canvas);
            let (width, height) = (canvas.width() as f64, canvas.height() as f64);
            if resized {
                rain.resize(width, height, &mut rng);
            }
            if !rain.is_due(timestamp) || theme_state.peek().is_changing {
                continue;
            }

            if rain.take_full_clear() {
                ctx.set_fill_style_str("#000000");
            } else {
                ctx.set_fill_style_str(FADE);
            }
            ctx.fill_rect(0.0, 0.0, width, height);

            ctx.set_fill_style_str(GREEN);
            ctx.set_font(&font);
            ctx.set_text_align("center");
            ctx.set_shadow_color(GREEN);
            ctx.set_shadow_blur(8.0);
            for glyph in rain.step(height, &mut rng) {
                let _ = ctx.fill_text(&glyph.ch.to_string(), glyph.x, glyph.y);
            }
            ctx.set_shadow_blur(0.0);
        }
    });

    let opacity = if theme_state().is_changing { 0.0 } else { 0.4 };

    rsx! {
        canvas {
            id: CANVAS_ID,
            class: "background-canvas matrix-canvas",
            style: "opacity: {opacity};",
        }
    }
}
