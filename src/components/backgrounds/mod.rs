use std::f64::consts::TAU;

use dioxus::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::utils::{ Theme, ThemeState };

mod cosmos;
mod matrix;
mod ocean;

pub use cosmos::CosmosBackground;
pub use matrix::MatrixBackground;
pub use ocean::OceanBackground;

fn fill_circle(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64) {
    ctx.begin_path();
    if ctx.arc(x, y, radius, 0.0, TAU).is_ok() {
        ctx.fill();
    }
}

/// Mounts only the effect of the active theme, so switching themes stops the
/// old animation loop and starts the new one.
#[component]
pub fn ThemeBackground() -> Element {
    let theme_state = use_context::<Signal<ThemeState>>();

    match theme_state().theme {
        Theme::Default => rsx! { MatrixBackground {} },
        Theme::Cosmos => rsx! { CosmosBackground {} },
        Theme::Underwater => rsx! { OceanBackground {} },
    }
}
