use std::f64::consts::{ FRAC_PI_2, TAU };

use dioxus::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::components::backgrounds::fill_circle;
use crate::effects::ocean::{
    clouds,
    surface_points,
    water_color,
    wing_lift,
    Bird,
    Coral,
    CoralKind,
    FishSprite,
    Layout,
    OceanScene,
};
use crate::effects::seeded_rng;
use crate::utils::device::use_is_mobile;
use crate::utils::dom::{ self, fit_canvas, next_frame };
use crate::utils::ThemeState;

const CANVAS_ID: &str = "ocean-canvas";
const SKY: &str = "#87CEEB";

fn draw_sky(ctx: &CanvasRenderingContext2d, width: f64, layout: &Layout, mobile: bool) {
    ctx.save();
    let _ = ctx.translate(0.0, layout.sky_offset);
    ctx.set_fill_style_str(SKY);
    ctx.fill_rect(0.0, 0.0, width, layout.height);
    ctx.set_fill_style_str("white");
    for cloud in clouds(width, mobile) {
        fill_circle(ctx, cloud.x - 22.0, cloud.y, cloud.size);
        fill_circle(ctx, cloud.x, cloud.y - 5.0, cloud.size + 4.0);
        fill_circle(ctx, cloud.x + 22.0, cloud.y, cloud.size);
    }
    ctx.restore();
}

fn draw_water(ctx: &CanvasRenderingContext2d, width: f64, layout: &Layout, progress: f64, time: f64) {
    ctx.begin_path();
    ctx.move_to(0.0, layout.height);
    ctx.line_to(0.0, layout.surface_y);
    for (x, y) in surface_points(width, layout.surface_y, time) {
        ctx.line_to(x, y);
    }
    ctx.line_to(width, layout.height);
    ctx.close_path();
    ctx.set_fill_style_str(&water_color(progress).css());
    ctx.fill();
    ctx.set_stroke_style_str("rgba(255, 255, 255, 0.4)");
    ctx.set_line_width(3.0);
    ctx.stroke();
}

fn draw_bird(ctx: &CanvasRenderingContext2d, bird: &Bird, y: f64, time: f64) {
    let lift = wing_lift(bird, time);
    ctx.save();
    ctx.set_stroke_style_str("white");
    ctx.set_line_width(1.5);
    ctx.set_line_cap("round");
    ctx.set_global_alpha(0.5);
    ctx.begin_path();
    ctx.move_to(bird.x - bird.size, y - lift);
    ctx.quadratic_curve_to(bird.x - bird.size / 2.0, y, bird.x, y);
    ctx.quadratic_curve_to(bird.x + bird.size / 2.0, y, bird.x + bird.size, y - lift);
    ctx.stroke();
    ctx.restore();
}

fn draw_sand(ctx: &CanvasRenderingContext2d, scene: &OceanScene, width: f64, layout: &Layout) {
    let (bottom, height) = (layout.bottom_y, layout.height);
    ctx.save();
    let gradient = ctx.create_linear_gradient(0.0, bottom, 0.0, height);
    let _ = gradient.add_color_stop(0.0, "#D4A574");
    let _ = gradient.add_color_stop(0.4, "#C9986A");
    let _ = gradient.add_color_stop(1.0, "#A07850");
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, bottom, width, height - bottom);

    for patch in &scene.sand_patches {
        let y = bottom + patch.y;
        if y >= height {
            continue;
        }
        ctx.set_fill_style_str(&format!("rgba(160, 120, 80, {})", patch.opacity));
        ctx.begin_path();
        if ctx.ellipse(patch.x, y, patch.radius * 1.2, patch.radius * 0.6, 0.0, 0.0, TAU).is_ok() {
            ctx.fill();
        }
    }

    ctx.set_fill_style_str("rgba(255, 255, 255, 0.5)");
    for grain in &scene.sand_grains {
        let y = bottom + grain.y;
        if y < height {
            ctx.set_global_alpha(grain.opacity);
            fill_circle(ctx, grain.x, y, grain.size);
        }
    }
    ctx.restore();
}

/// Angle of the `i`th of `n` stems fanned around straight up.
fn fan_angle(i: u32, n: u32, spacing: f64) -> f64 {
    -FRAC_PI_2 + ((i as f64) - ((n as f64) - 1.0) / 2.0) * spacing
}

fn stroke_line(ctx: &CanvasRenderingContext2d, from: (f64, f64), to: (f64, f64)) {
    ctx.begin_path();
    ctx.move_to(from.0, from.1);
    ctx.line_to(to.0, to.1);
    ctx.stroke();
}

fn draw_coral(ctx: &CanvasRenderingContext2d, coral: &Coral, bottom: f64) {
    ctx.save();
    let _ = ctx.translate(coral.x, bottom);
    ctx.set_line_cap("round");
    ctx.set_stroke_style_str(coral.color);
    ctx.set_fill_style_str(coral.color);

    match coral.kind {
        CoralKind::Branch { branches } => {
            for i in 0..branches {
                let angle = fan_angle(i, branches, 0.35);
                let len = coral.size * (0.8 + ((i % 2) as f64) * 0.25);
                let end = (angle.cos() * len, angle.sin() * len);
                ctx.set_line_width(3.0);
                stroke_line(ctx, (0.0, 0.0), end);

                ctx.set_line_width(2.0);
                let fork = (end.0 * 0.65, end.1 * 0.65);
                let sub = len * 0.35;
                for turn in [-0.5, 0.5] {
                    let tip = (fork.0 + (angle + turn).cos() * sub, fork.1 + (angle + turn).sin() * sub);
                    stroke_line(ctx, fork, tip);
                }
            }
        }
        CoralKind::Soft { petals } => {
            ctx.set_line_width(3.0);
            for i in 0..petals {
                let angle = fan_angle(i, petals, 0.28);
                let len = coral.size * (0.75 + ((i % 2) as f64) * 0.2);
                stroke_line(ctx, (0.0, 0.0), (angle.cos() * len, angle.sin() * len));
            }
        }
        CoralKind::Seaweed { blades } => {
            for i in 0..blades {
                let offset = ((i as f64) - ((blades as f64) - 1.0) / 2.0) * 10.0;
                let blade = coral.size * (0.85 + ((i % 2) as f64) * 0.35);
                ctx.begin_path();
                ctx.move_to(offset - 2.0, 0.0);
                ctx.quadratic_curve_to(offset - 4.0, -blade * 0.5, offset, -blade);
                ctx.quadratic_curve_to(offset + 4.0, -blade * 0.5, offset + 2.0, 0.0);
                ctx.close_path();
                ctx.fill();
            }
        }
    }
    ctx.restore();
}

fn draw_fish(ctx: &CanvasRenderingContext2d, fish: &FishSprite) {
    let s = fish.size;
    ctx.save();
    let _ = ctx.translate(fish.x, fish.y);
    if fish.dir < 0.0 {
        let _ = ctx.scale(-1.0, 1.0);
    }
    ctx.set_fill_style_str(fish.color);
    ctx.begin_path();
    if ctx.ellipse(0.0, 0.0, s * 0.7, s * 0.35, 0.0, 0.0, TAU).is_ok() {
        ctx.fill();
    }

    ctx.begin_path();
    ctx.move_to(-s * 0.6, 0.0);
    ctx.quadratic_curve_to(-s * 1.1, -s * 0.5, -s * 1.2, -s * 0.4);
    ctx.line_to(-s * 0.9, 0.0);
    ctx.line_to(-s * 1.2, s * 0.4);
    ctx.quadratic_curve_to(-s * 1.1, s * 0.5, -s * 0.6, 0.0);
    ctx.fill();

    ctx.set_fill_style_str("#000");
    fill_circle(ctx, s * 0.4, -s * 0.1, s * 0.06);
    ctx.restore();
}

#[component]
pub fn OceanBackground() -> Element {
    let theme_state = use_context::<Signal<ThemeState>>();
    let is_mobile = use_is_mobile();

    use_future(move || async move {
        next_frame().await;
        let Some((canvas, ctx)) = dom::canvas_2d(CANVAS_ID) else {
            log::warn!("Canvas #{} is not available", CANVAS_ID);
            return;
        };
        let mut rng = seeded_rng();
        let mut mobile = *is_mobile.peek();
        let mut scene = OceanScene::generate(canvas.width() as f64, mobile, &mut rng);

        loop {
            next_frame().await;
            let resized = fit_canvas(&canvas);
            let (width, height) = (canvas.width() as f64, canvas.height() as f64);
            if resized || mobile != *is_mobile.peek() {
                mobile = *is_mobile.peek();
                scene = OceanScene::generate(width, mobile, &mut rng);
                log::debug!("Regenerated ocean scene for {}x{}", width, height);
            }
            if theme_state.peek().is_changing {
                continue;
            }

            let progress = dom::current_scroll_progress();
            let layout = Layout::new(progress, height);
            ctx.clear_rect(0.0, 0.0, width, height);

            draw_sky(&ctx, width, &layout, mobile);
            draw_water(&ctx, width, &layout, progress, scene.time);
            let time = scene.time;
            for (bird, y) in scene.fly_birds(width, &layout) {
                draw_bird(&ctx, &bird, y, time);
            }
            if layout.shows_sea_bed() {
                draw_sand(&ctx, &scene, width, &layout);
                for coral in &scene.corals {
                    draw_coral(&ctx, coral, layout.bottom_y);
                }
            }
            for fish in scene.swim_fish(width, &layout) {
                draw_fish(&ctx, &fish);
            }
            scene.advance_time();
        }
    });

    rsx! {
        canvas { id: CANVAS_ID, class: "background-canvas ocean-canvas" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fan_is_symmetric_around_vertical() {
        assert_eq!(fan_angle(1, 3, 0.35), -FRAC_PI_2);
        assert!((fan_angle(0, 3, 0.35) + fan_angle(2, 3, 0.35) + 2.0 * FRAC_PI_2).abs() < 1e-12);
        assert_eq!(fan_angle(0, 1, 0.28), -FRAC_PI_2);
    }
}
