use crate::utils::Theme;

/// Colours every component picks from for the active theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Main accent as a hex colour.
    pub accent: &'static str,
    /// The accent as an `r, g, b` triple for `rgba()` mixes.
    pub accent_rgb: &'static str,
    pub heading: &'static str,
    /// `r, g, b` triple of the glow behind headings.
    pub heading_glow_rgb: &'static str,
    pub subtitle: &'static str,
    pub hint: &'static str,
    pub contact_bg: &'static str,
    pub modal_bg: &'static str,
    pub dropdown_bg: &'static str,
    pub cursor: &'static str,
    pub cursor_shadow: &'static str,
    pub flash: &'static str,
    pub page_bg: &'static str,
}

const MATRIX: Palette = Palette {
    accent: "#00ff00",
    accent_rgb: "0, 255, 0",
    heading: "#ffffff",
    heading_glow_rgb: "255, 255, 255",
    subtitle: "#cccccc",
    hint: "#aaaaaa",
    contact_bg: "rgba(0, 80, 0, 0.6)",
    modal_bg: "rgba(0, 0, 0, 0.95)",
    dropdown_bg: "rgba(10, 10, 20, 0.95)",
    cursor: "#006400",
    cursor_shadow: "0 0 10px #006400, 0 0 20px #00ff00",
    flash: "rgba(0, 255, 0, 0.6)",
    page_bg: "#000000",
};

const COSMOS: Palette = Palette {
    accent: "#b0e0e6",
    accent_rgb: "176, 224, 230",
    heading: "#eaf6ff",
    heading_glow_rgb: "176, 224, 230",
    subtitle: "rgba(176, 224, 230, 0.8)",
    hint: "rgba(176, 224, 230, 0.6)",
    contact_bg: "rgba(0, 50, 80, 0.6)",
    modal_bg: "rgba(2, 11, 26, 0.95)",
    dropdown_bg: "rgba(10, 10, 20, 0.95)",
    cursor: "transparent",
    cursor_shadow: "none",
    flash: "rgba(173, 216, 230, 0.6)",
    page_bg: "radial-gradient(ellipse at center, #000000 0%, #050510 25%, #0a0a20 50%, #0b0b25 75%, #0c0c30 100%)",
};

const OCEAN: Palette = Palette {
    accent: "#7fb5b5",
    accent_rgb: "127, 181, 181",
    heading: "#e0f7fa",
    heading_glow_rgb: "127, 181, 181",
    subtitle: "rgba(127, 181, 181, 0.6)",
    hint: "rgba(127, 181, 181, 0.5)",
    contact_bg: "rgba(0, 60, 60, 0.6)",
    modal_bg: "rgba(1, 22, 39, 0.95)",
    dropdown_bg: "rgba(10, 20, 30, 0.95)",
    cursor: "#7fb5b5",
    cursor_shadow: "0 0 20px rgba(127, 181, 181, 0.7), 0 0 40px rgba(127, 181, 181, 0.5)",
    flash: "rgba(127, 181, 181, 0.6)",
    page_bg: "#011627",
};

impl Palette {
    pub fn accent_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {})", self.accent_rgb, alpha)
    }

    pub fn glow(&self, blur: u32, alpha: f64) -> String {
        format!("0 0 {}px rgba({}, {})", blur, self.heading_glow_rgb, alpha)
    }

    pub fn accent_glow(&self, blur: u32, alpha: f64) -> String {
        format!("0 0 {}px {}", blur, self.accent_alpha(alpha))
    }
}

impl Theme {
    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Default => &MATRIX,
            Theme::Cosmos => &COSMOS,
            Theme::Underwater => &OCEAN,
        }
    }
}
