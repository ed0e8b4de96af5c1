//! Interpolation curves mapping normalized time in \[0, 1\] to progress.
//!
//! Named curves follow the GSAP naming the configuration surface uses
//! (`"expo.out"`, `"power3.inOut"`, `"linear"`), including the legacy
//! `"Expo.easeOut"` spelling. Anything else can be plugged in through
//! [`Easing::custom`].

use crate::error::{CursorError, Result};
use std::f32::consts::FRAC_PI_2;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

// Overshoot constant used by the back curves.
const BACK_OVERSHOOT: f32 = 1.70158;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    In,
    Out,
    InOut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Curve {
    Power1,
    Power2,
    Power3,
    Power4,
    Expo,
    Sine,
    Circ,
    Back,
}

impl Curve {
    /// The ease-in form; the other directions are derived from it.
    fn ease_in(self, t: f32) -> f32 {
        match self {
            Curve::Power1 => t * t,
            Curve::Power2 => t * t * t,
            Curve::Power3 => t * t * t * t,
            Curve::Power4 => t * t * t * t * t,
            Curve::Expo => {
                if t <= 0.0 {
                    0.0
                } else {
                    (2.0f32).powf(10.0 * (t - 1.0))
                }
            }
            Curve::Sine => 1.0 - (t * FRAC_PI_2).cos(),
            Curve::Circ => 1.0 - (1.0 - t * t).max(0.0).sqrt(),
            Curve::Back => (BACK_OVERSHOOT + 1.0) * t * t * t - BACK_OVERSHOOT * t * t,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Curve::Power1 => "power1",
            Curve::Power2 => "power2",
            Curve::Power3 => "power3",
            Curve::Power4 => "power4",
            Curve::Expo => "expo",
            Curve::Sine => "sine",
            Curve::Circ => "circ",
            Curve::Back => "back",
        }
    }
}

#[derive(Clone)]
pub enum Easing {
    Linear,
    Named(Curve, Direction),
    Custom(Rc<dyn Fn(f32) -> f32>),
}

impl Easing {
    pub fn custom(f: impl Fn(f32) -> f32 + 'static) -> Self {
        Easing::Custom(Rc::new(f))
    }

    /// Map `t` (clamped to \[0, 1\]) through the curve.
    ///
    /// Named curves hit both endpoints exactly. Custom curves are passed
    /// through untouched, so they may overshoot.
    pub fn apply(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::Named(curve, direction) => {
                if t <= 0.0 {
                    return 0.0;
                }
                if t >= 1.0 {
                    return 1.0;
                }
                match direction {
                    Direction::In => curve.ease_in(t),
                    Direction::Out => 1.0 - curve.ease_in(1.0 - t),
                    Direction::InOut => {
                        if t < 0.5 {
                            curve.ease_in(t * 2.0) * 0.5
                        } else {
                            1.0 - curve.ease_in((1.0 - t) * 2.0) * 0.5
                        }
                    }
                }
            }
            Easing::Custom(f) => f(t),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Named(Curve::Expo, Direction::Out)
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Custom(_) => f.write_str("Custom(..)"),
            other => write!(f, "{other}"),
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => f.write_str("linear"),
            Easing::Named(curve, direction) => {
                let dir = match direction {
                    Direction::In => "in",
                    Direction::Out => "out",
                    Direction::InOut => "inOut",
                };
                write!(f, "{}.{}", curve.name(), dir)
            }
            Easing::Custom(_) => f.write_str("custom"),
        }
    }
}

impl FromStr for Easing {
    type Err = CursorError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let (curve_name, dir_name) = match lower.split_once('.') {
            Some((c, d)) => (c, Some(d)),
            None => (lower.as_str(), None),
        };
        let curve = match curve_name {
            "linear" | "none" | "power0" => return Ok(Easing::Linear),
            "power1" | "quad" => Curve::Power1,
            "power2" | "cubic" => Curve::Power2,
            "power3" | "quart" => Curve::Power3,
            "power4" | "quint" | "strong" => Curve::Power4,
            "expo" => Curve::Expo,
            "sine" => Curve::Sine,
            "circ" => Curve::Circ,
            "back" => Curve::Back,
            _ => return Err(CursorError::UnknownEasing(s.to_string())),
        };
        // A bare curve name means the out direction.
        let direction = match dir_name {
            None | Some("out") | Some("easeout") => Direction::Out,
            Some("in") | Some("easein") => Direction::In,
            Some("inout") | Some("easeinout") => Direction::InOut,
            Some(_) => return Err(CursorError::UnknownEasing(s.to_string())),
        };
        Ok(Easing::Named(curve, direction))
    }
}
