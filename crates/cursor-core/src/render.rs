//! Per-frame writes of position and gelly deformation.

use crate::deformation::Deformation;
use crate::host::{Host, Node, Property, Setter};
use glam::Vec2;

/// Setters for the gelly outputs. Only built when gelly mode is on.
pub struct GellyWriters {
    width: Setter,
    rotate: Setter,
    scale_x: Setter,
    scale_y: Setter,
    inner_rotate: Setter,
}

/// The overlay's writer table, built once at mount and owned by the cursor.
pub struct FrameWriters {
    x: Setter,
    y: Setter,
    gelly: Option<GellyWriters>,
}

impl FrameWriters {
    pub fn build<H: Host>(host: &H, gelly: bool) -> Self {
        let gelly = gelly.then(|| GellyWriters {
            width: host.setter(Node::Outer, Property::Width),
            rotate: host.setter(Node::Outer, Property::Rotate),
            scale_x: host.setter(Node::Outer, Property::ScaleX),
            scale_y: host.setter(Node::Outer, Property::ScaleY),
            inner_rotate: host.setter(Node::Inner, Property::Rotate),
        });
        Self {
            x: host.setter(Node::Outer, Property::X),
            y: host.setter(Node::Outer, Property::Y),
            gelly,
        }
    }

    pub fn has_gelly(&self) -> bool {
        self.gelly.is_some()
    }
}

pub struct RenderLoop {
    writers: FrameWriters,
    base_size: f32,
    gelly_amount: f32,
    paused: bool,
}

impl RenderLoop {
    pub fn new(writers: FrameWriters, base_size: f32, gelly_amount: f32) -> Self {
        Self {
            writers,
            base_size,
            gelly_amount,
            paused: false,
        }
    }

    /// Write one frame. Position always goes out before deformation, and
    /// deformation only when gelly is on and the velocity defines one.
    /// Returns `false` when paused.
    pub fn tick(&mut self, position: Vec2, velocity: Vec2) -> bool {
        if self.paused {
            return false;
        }
        (self.writers.x)(position.x);
        (self.writers.y)(position.y);

        if let Some(g) = self.writers.gelly.as_mut() {
            if let Some(d) = Deformation::from_velocity(velocity, self.base_size, self.gelly_amount)
            {
                (g.width)(d.width);
                (g.rotate)(d.rotation);
                (g.scale_x)(d.scale_x);
                (g.scale_y)(d.scale_y);
                (g.inner_rotate)(d.inner_rotation);
            }
        }
        true
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn has_gelly(&self) -> bool {
        self.writers.has_gelly()
    }
}
