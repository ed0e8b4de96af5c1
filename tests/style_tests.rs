// Host-side tests for the pure style helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod style {
    include!("../src/style.rs");
}

use cursor_core::Property;
use glam::Vec2;
use style::*;

#[test]
fn position_and_rotation_write_custom_properties() {
    assert_eq!(style_target(Property::X), (constants::VAR_X, Unit::Px));
    assert_eq!(style_target(Property::Y), (constants::VAR_Y, Unit::Px));
    assert_eq!(
        style_target(Property::Rotate),
        (constants::VAR_ROTATE, Unit::Deg)
    );
    assert_eq!(style_target(Property::ScaleX).1, Unit::None);
    // Width is a real layout property, not a transform input.
    assert_eq!(style_target(Property::Width), ("width", Unit::Px));
}

#[test]
fn numbers_are_rounded_and_suffixed() {
    assert_eq!(css_number(300.0, Unit::Px), "300px");
    assert_eq!(css_number(12.34567, Unit::Deg), "12.346deg");
    assert_eq!(css_number(0.5, Unit::None), "0.5");
}

#[test]
fn non_finite_numbers_write_zero() {
    assert_eq!(css_number(f32::NAN, Unit::Px), "0px");
    assert_eq!(css_number(f32::INFINITY, Unit::Deg), "0deg");
}

#[test]
fn translate_formats_both_axes() {
    assert_eq!(translate(Vec2::new(10.0, -4.0)), "translate(10px, -4px)");
}

#[test]
fn urls_are_quoted_and_escaped() {
    assert_eq!(css_url("hero.jpg"), "url(\"hero.jpg\")");
    assert_eq!(css_url("a\"b.png"), "url(\"a\\\"b.png\")");
    assert_eq!(css_url(""), "none");
}
