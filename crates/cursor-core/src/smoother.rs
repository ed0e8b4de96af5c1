//! Eased pointer following.
//!
//! Each axis runs its own tween from the smoothed position toward the latest
//! target. Every new pointer sample overwrites the in-flight tweens, so the
//! overlay always heads for the most recent target with no queued backlog.

use crate::easing::Easing;
use crate::tween::Tweened;
use glam::Vec2;

/// Pull a raw pointer coordinate toward a stick target's center.
///
/// `blended = center - (center - raw) * amount`: an amount of 0 pins the
/// overlay to the center, 1 leaves the raw coordinate untouched. `amount` is
/// clamped to \[0, 1\].
#[inline]
pub fn stick_blend(center: f32, raw: f32, amount: f32) -> f32 {
    center - (center - raw) * amount.clamp(0.0, 1.0)
}

/// [`stick_blend`] applied to both axes.
#[inline]
pub fn stick_blend_vec(center: Vec2, raw: Vec2, amount: f32) -> Vec2 {
    Vec2::new(
        stick_blend(center.x, raw.x, amount),
        stick_blend(center.y, raw.y, amount),
    )
}

#[derive(Clone, Debug)]
pub struct MotionSmoother {
    x: Tweened<f32>,
    y: Tweened<f32>,
    target: Vec2,
    velocity: Vec2,
}

impl Default for MotionSmoother {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionSmoother {
    /// The smoothed position starts at the origin, which is where the first
    /// velocity readings are measured from.
    pub fn new() -> Self {
        Self {
            x: Tweened::new(0.0),
            y: Tweened::new(0.0),
            target: Vec2::ZERO,
            velocity: Vec2::ZERO,
        }
    }

    /// Restart both axis tweens toward `target` from the current position.
    pub fn move_to(&mut self, target: Vec2, duration: f32, easing: &Easing) {
        self.target = target;
        self.x.retarget(target.x, duration, easing);
        self.y.retarget(target.y, duration, easing);
    }

    /// Advance both axes by `dt` seconds. Velocity is refreshed on every axis
    /// that stepped, as the distance still left to its target.
    pub fn advance(&mut self, dt: f32) {
        if self.x.advance(dt) {
            self.velocity.x = self.target.x - self.x.value();
        }
        if self.y.advance(dt) {
            self.velocity.y = self.target.y - self.y.value();
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        !self.x.is_animating() && !self.y.is_animating()
    }
}
