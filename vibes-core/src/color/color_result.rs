use super::hsl::{HslValue, Rgb};
use serde::Serialize;

/// Accent color used when no cover art can be read.
pub const FALLBACK_RGB: Rgb = Rgb::new(29, 185, 84);

/// The accent color derived from a piece of cover art.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorResult {
    /// `rgb(r,g,b)`
    pub rgb: String,
    /// `#rrggbb`
    pub hex: String,
    pub hsl: HslValue,
}

impl ColorResult {
    pub fn fallback() -> Self {
        Self {
            rgb: FALLBACK_RGB.to_css(),
            hex: FALLBACK_RGB.to_hex(),
            hsl: HslValue {
                h: 141,
                s: 73,
                l: 42,
            },
        }
    }

    /// Turns the average color of an image into a background accent.
    pub fn from_average(average: Rgb) -> Self {
        let adjusted = average.to_hsl().adjusted_for_background();
        let rgb = adjusted.to_rgb();
        Self {
            rgb: rgb.to_css(),
            hex: rgb.to_hex(),
            hsl: adjusted.rounded(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }

    /// The color as channels, for terminal output.
    pub fn to_rgb(&self) -> Option<Rgb> {
        Rgb::from_hex(&self.hex)
    }
}
