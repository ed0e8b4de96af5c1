//! Velocity-driven stretch and rotation for gelly mode.
//!
//! The velocity fed in here is the smoother's remaining distance to its
//! target, not a measured rate. A zero or non-finite component on either
//! axis yields no deformation at all, which keeps NaN out of the writers.

use crate::constants::{GELLY_SCALE_CAP, GELLY_SCALE_DIVISOR};
use glam::Vec2;

#[inline]
fn is_defined(v: Vec2) -> bool {
    v.x != 0.0 && v.y != 0.0 && v.is_finite()
}

/// Direction of `v` in degrees, `atan2(y, x)`. Defined for every input.
#[inline]
pub fn angle_degrees(v: Vec2) -> f32 {
    v.y.atan2(v.x).to_degrees()
}

/// Normalized stretch for a velocity magnitude, capped at
/// [`GELLY_SCALE_CAP`].
#[inline]
pub fn stretch(magnitude: f32) -> f32 {
    (magnitude / GELLY_SCALE_DIVISOR).min(GELLY_SCALE_CAP)
}

pub fn scale(v: Vec2) -> Option<f32> {
    is_defined(v).then(|| stretch(v.length()))
}

pub fn rotation(v: Vec2) -> Option<f32> {
    is_defined(v).then(|| angle_degrees(v))
}

/// Values written to the outer and inner overlay nodes for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Deformation {
    pub width: f32,
    pub rotation: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    /// Counter-rotation that keeps the inner content upright.
    pub inner_rotation: f32,
}

impl Deformation {
    pub fn from_velocity(velocity: Vec2, base_size: f32, gelly_amount: f32) -> Option<Self> {
        let scale = scale(velocity)?;
        let rotation = rotation(velocity)?;
        Some(Self {
            width: base_size + scale * gelly_amount,
            rotation,
            scale_x: 1.0 + scale,
            scale_y: 1.0 - scale,
            inner_rotation: -rotation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_component_yields_nothing() {
        for v in [
            Vec2::ZERO,
            Vec2::new(5.0, 0.0),
            Vec2::new(0.0, -5.0),
            Vec2::new(f32::NAN, 1.0),
            Vec2::new(1.0, f32::INFINITY),
        ] {
            assert_eq!(scale(v), None, "{v:?}");
            assert_eq!(rotation(v), None, "{v:?}");
            assert_eq!(Deformation::from_velocity(v, 48.0, 50.0), None);
        }
    }

    #[test]
    fn scale_is_monotonic_and_capped() {
        let mut prev = 0.0;
        for i in 1..400 {
            let m = i as f32;
            let s = scale(Vec2::new(m, m)).unwrap();
            assert!(s >= prev, "scale decreased at {m}");
            prev = s;
        }
        assert_eq!(stretch(258.0), 0.35);
        assert_eq!(stretch(10_000.0), 0.35);
        assert!(stretch(257.0) < 0.35);
        assert_eq!(scale(Vec2::new(300.0, 300.0)), Some(0.35));
    }

    #[test]
    fn angles_of_axis_directions() {
        assert_eq!(angle_degrees(Vec2::new(1.0, 0.0)), 0.0);
        assert!((angle_degrees(Vec2::new(0.0, 1.0)) - 90.0).abs() < 1e-4);
        assert!((angle_degrees(Vec2::new(-1.0, 0.0)).abs() - 180.0).abs() < 1e-4);
        assert!((angle_degrees(Vec2::new(0.0, -1.0)) + 90.0).abs() < 1e-4);
    }

    #[test]
    fn rotation_of_diagonal_motion() {
        let r = rotation(Vec2::new(3.0, 3.0)).unwrap();
        assert!((r - 45.0).abs() < 1e-4);
        let r = rotation(Vec2::new(-3.0, -3.0)).unwrap();
        assert!((r + 135.0).abs() < 1e-4);
    }

    #[test]
    fn deformation_outputs() {
        let v = Vec2::new(30.0, 40.0); // magnitude 50
        let d = Deformation::from_velocity(v, 48.0, 50.0).unwrap();
        let s = 50.0 / 735.0;
        assert!((d.width - (48.0 + s * 50.0)).abs() < 1e-4);
        assert!((d.scale_x - (1.0 + s)).abs() < 1e-6);
        assert!((d.scale_y - (1.0 - s)).abs() < 1e-6);
        assert_eq!(d.inner_rotation, -d.rotation);
    }
}
