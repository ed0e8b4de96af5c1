use crate::error::{CursorError, Result};
use crate::tween::Lerp;
use std::str::FromStr;

/// Straight-alpha RGBA color with components in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a CSS color, or return `fallback` when the value is missing or
    /// malformed. Empty strings count as missing.
    pub fn parse_or(value: Option<&str>, fallback: Color) -> Color {
        match value.map(str::trim) {
            None | Some("") => fallback,
            Some(raw) => match raw.parse() {
                Ok(c) => c,
                Err(e) => {
                    log::warn!("{e}; using {}", fallback.to_css());
                    fallback
                }
            },
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            channel_to_byte(self.r),
            channel_to_byte(self.g),
            channel_to_byte(self.b),
            (self.a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0
        )
    }
}

#[inline]
fn channel_to_byte(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl From<csscolorparser::Color> for Color {
    fn from(c: csscolorparser::Color) -> Self {
        Color::rgba(c.r as f32, c.g as f32, c.b as f32, c.a as f32)
    }
}

/// Accepts any CSS color: hex, named, `rgb()`, `hsl()`, `hwb()` and the
/// space-separated forms.
impl FromStr for Color {
    type Err = CursorError;

    fn from_str(s: &str) -> Result<Self> {
        csscolorparser::parse(s.trim())
            .map(Color::from)
            .map_err(|_| CursorError::InvalidColor(s.to_string()))
    }
}

impl Lerp for Color {
    fn lerp(self, to: Self, t: f32) -> Self {
        Color::rgba(
            self.r + (to.r - self.r) * t,
            self.g + (to.g - self.g) * t,
            self.b + (to.b - self.b) * t,
            self.a + (to.a - self.a) * t,
        )
    }
}
