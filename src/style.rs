use crate::constants::{VAR_ROTATE, VAR_SCALE_X, VAR_SCALE_Y, VAR_X, VAR_Y};
use cursor_core::Property;
use glam::Vec2;

/// CSS unit a per-frame property is written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Px,
    Deg,
    None,
}

impl Unit {
    #[inline]
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Deg => "deg",
            Unit::None => "",
        }
    }
}

/// Style property (or custom property) a writer targets, with its unit.
#[inline]
pub fn style_target(property: Property) -> (&'static str, Unit) {
    match property {
        Property::X => (VAR_X, Unit::Px),
        Property::Y => (VAR_Y, Unit::Px),
        Property::Rotate => (VAR_ROTATE, Unit::Deg),
        Property::ScaleX => (VAR_SCALE_X, Unit::None),
        Property::ScaleY => (VAR_SCALE_Y, Unit::None),
        Property::Width => ("width", Unit::Px),
    }
}

/// Format a number for a style value. Non-finite input writes zero so a bad
/// frame can never leave `NaNpx` in the page.
#[inline]
pub fn css_number(value: f32, unit: Unit) -> String {
    let v = if value.is_finite() { value } else { 0.0 };
    // Three decimals is well under a device pixel.
    let v = (v * 1000.0).round() / 1000.0;
    format!("{v}{}", unit.suffix())
}

#[inline]
pub fn translate(offset: Vec2) -> String {
    format!(
        "translate({}, {})",
        css_number(offset.x, Unit::Px),
        css_number(offset.y, Unit::Px)
    )
}

/// `url("...")` with quotes and backslashes escaped. Empty input clears the
/// image.
pub fn css_url(src: &str) -> String {
    if src.is_empty() {
        return "none".to_string();
    }
    let escaped = src.replace('\\', "\\\\").replace('"', "\\\"");
    format!("url(\"{escaped}\")")
}
