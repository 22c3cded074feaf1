use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element as DomElement;

use crate::components::preloader::script::{
    typing_frames,
    LineKind,
    TerminalLine,
    CURSOR_BLINK_MS,
    FADE_OUT_MS,
    SCATTER_DELAY_MS,
    SCRIPT,
    START_DELAY_MS,
    TYPE_START_MS,
};
use crate::effects::scatter::{ is_finished, ScatterChar };
use crate::effects::seeded_rng;
use crate::utils::dom::{ self, next_frame, sleep_ms };

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Typing,
    Scattering,
    FadingOut,
}

/// Reads every rendered terminal glyph and its on-screen position.
fn measure_glyphs() -> Vec<ScatterChar> {
    let Some(nodes) = dom::document().and_then(|d| d.query_selector_all("#terminal-content .char").ok()) else {
        return Vec::new();
    };
    let height = dom::viewport().height;
    let mut rng = seeded_rng();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<DomElement>().ok())
        .enumerate()
        .filter_map(|(index, el)| {
            let ch = el.text_content()?.chars().next()?;
            if ch.is_whitespace() {
                return None;
            }
            let rect = el.get_bounding_client_rect();
            Some((index, ch, rect.left(), rect.top()))
        })
        .map(|(index, ch, left, top)| ScatterChar::new(ch, left, top, index, height, &mut rng))
        .collect()
}

/// Full-screen boot sequence shown before the page. Calls `on_complete` once
/// the text has fallen off screen and the overlay has faded.
#[component]
pub fn TerminalPreloader(on_complete: EventHandler<()>) -> Element {
    let mut lines = use_signal(Vec::<TerminalLine>::new);
    let mut cursor_on = use_signal(|| true);
    let mut phase = use_signal(|| Phase::Typing);
    let mut glyphs = use_signal(Vec::<ScatterChar>::new);
    let mut elapsed = use_signal(|| 0.0_f64);

    use_future(move || async move {
        loop {
            sleep_ms(CURSOR_BLINK_MS).await;
            let on = *cursor_on.peek();
            cursor_on.set(!on);
        }
    });

    use_future(move || async move {
        sleep_ms(START_DELAY_MS).await;
        for line in SCRIPT.iter() {
            if line.delay_ms > 0 {
                sleep_ms(line.delay_ms).await;
            }
            match line.kind {
                LineKind::Instant => lines.write().push(TerminalLine::done(line.text)),
                LineKind::Typed { char_ms } => {
                    let mut frames = typing_frames(line.text).into_iter();
                    if let Some(prompt) = frames.next() {
                        lines.write().push(prompt);
                    }
                    sleep_ms(TYPE_START_MS).await;
                    for frame in frames {
                        if let Some(last) = lines.write().last_mut() {
                            *last = frame;
                        }
                        sleep_ms(char_ms).await;
                    }
                }
            }
        }

        sleep_ms(SCATTER_DELAY_MS).await;
        let measured = measure_glyphs();
        log::debug!("Scattering {} preloader glyphs", measured.len());
        if !measured.is_empty() {
            glyphs.set(measured);
            phase.set(Phase::Scattering);
            let start = next_frame().await;
            loop {
                let now = next_frame().await - start;
                elapsed.set(now);
                if is_finished(&glyphs.peek(), now) {
                    break;
                }
            }
        }

        phase.set(Phase::FadingOut);
        sleep_ms(FADE_OUT_MS).await;
        on_complete.call(());
    });

    let phase_now = phase();
    let overlay_style = if phase_now == Phase::FadingOut { "opacity: 0;" } else { "opacity: 1;" };
    let content_style = if phase_now == Phase::Typing { "visibility: visible;" } else { "visibility: hidden;" };
    let cursor_style = if cursor_on() { "opacity: 1;" } else { "opacity: 0;" };
    let t = elapsed();
    let falling: Vec<(usize, char, String)> = glyphs
        .read()
        .iter()
        .enumerate()
        .map(|(i, glyph)| {
            let pose = glyph.pose(t);
            let style = format!(
                "left: {}px; top: {}px; transform: {}; opacity: {:.3};",
                glyph.left,
                glyph.top,
                pose.css_transform(),
                pose.opacity
            );
            (i, glyph.ch, style)
        })
        .collect();

    rsx! {
        div {
            id: "terminal-preloader",
            class: "terminal-preloader",
            style: overlay_style,
            div {
                id: "terminal-content",
                class: "terminal-content",
                style: content_style,
                for (li, line) in lines.read().iter().enumerate() {
                    div {
                        key: "{li}",
                        class: "terminal-line",
                        for (ci, ch) in line.text.chars().enumerate() {
                            span { key: "{ci}", class: "char", "{ch}" }
                        }
                        if line.typing {
                            span { class: "terminal-cursor", style: cursor_style }
                        }
                    }
                }
            }
        }
        if phase_now == Phase::Scattering {
            div {
                id: "scattering-container",
                class: "scattering-container",
                for (i, ch, style) in falling {
                    div { key: "{i}", class: "scattering-char", style, "{ch}" }
                }
            }
        }
    }
}
