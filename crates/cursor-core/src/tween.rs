//! Time-sliced eased interpolation.
//!
//! A [`Tween`] never blocks: starting one only records where it goes, and each
//! frame tick advances it by the elapsed time. [`Tweened`] wraps a value with
//! overwrite semantics, so retargeting cancels the in-flight tween and starts
//! over from wherever the value currently is.

use crate::easing::Easing;
use glam::Vec2;

pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        Vec2::lerp(self, to, t)
    }
}

#[derive(Clone, Debug)]
pub struct Tween<T> {
    from: T,
    to: T,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
        }
    }

    /// Move forward by `dt` seconds and return the new value.
    pub fn advance(&mut self, dt: f32) -> T {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
        self.value()
    }

    pub fn value(&self) -> T {
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            return self.to;
        }
        self.from.lerp(self.to, self.easing.apply(self.elapsed / self.duration))
    }

    pub fn target(&self) -> T {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// A value that may be easing toward a target.
#[derive(Clone, Debug)]
pub struct Tweened<T> {
    value: T,
    tween: Option<Tween<T>>,
}

impl<T: Lerp> Tweened<T> {
    pub fn new(value: T) -> Self {
        Self { value, tween: None }
    }

    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Where the value is heading, or the value itself when idle.
    pub fn target(&self) -> T {
        self.tween.as_ref().map_or(self.value, Tween::target)
    }

    /// Start easing toward `to` from the current value, replacing any tween
    /// still in flight. A zero duration lands on the next [`advance`].
    ///
    /// [`advance`]: Tweened::advance
    pub fn retarget(&mut self, to: T, duration: f32, easing: &Easing) {
        self.tween = Some(Tween::new(self.value, to, duration, easing.clone()));
    }

    /// Advance the in-flight tween. Returns `true` when the value was
    /// written this step.
    pub fn advance(&mut self, dt: f32) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        self.value = tween.advance(dt);
        if tween.is_finished() {
            self.tween = None;
        }
        true
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }
}
