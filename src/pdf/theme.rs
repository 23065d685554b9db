use printpdf::{Color, Rgb};
use rand::seq::SliceRandom;
use rand::Rng;

/// A named palette of colors applied uniformly to one invoice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: &'static str,
    pub header: &'static str,
    pub accent: &'static str,
}

pub const THEMES: [Theme; 10] = [
    Theme { background: "#f5f0e6", header: "#2c3e50", accent: "#c4d7c8" },
    Theme { background: "#eef4ff", header: "#355c7d", accent: "#cde3ff" },
    Theme { background: "#f1fff4", header: "#2d6a4f", accent: "#c8f7d2" },
    Theme { background: "#fff4fb", header: "#6a4c93", accent: "#f1d4ff" },
    Theme { background: "#fff9f0", header: "#8d5524", accent: "#ffe3c8" },
    Theme { background: "#fff5f0", header: "#b56576", accent: "#ffd6d6" },
    Theme { background: "#f0fff9", header: "#1b4332", accent: "#b7efc5" },
    Theme { background: "#f3f0ff", header: "#5f0f40", accent: "#d0bdf4" },
    Theme { background: "#fffce0", header: "#b08968", accent: "#ffe5b4" },
    Theme { background: "#f0faff", header: "#0077b6", accent: "#caf0f8" },
];

impl Theme {
    /// Pure selection over the fixed palette from a random draw.
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Theme {
        *THEMES.choose(rng).unwrap_or(&THEMES[0])
    }
}

/// Parse a `#rrggbb` string into a printpdf color. Unparseable channels
/// fall back to zero rather than failing the render.
pub fn hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    let channel = |i: usize| -> f32 {
        hex.get(i..i + 2)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0) as f32
            / 255.0
    };
    Color::Rgb(Rgb::new(channel(0) as _, channel(2) as _, channel(4) as _, None))
}
