use glam::Vec2;

/// One pointer-move reading in viewport (client) coordinates. Not retained.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Build a sample from integer client coordinates, as delivered by DOM
    /// mouse and pointer events.
    pub fn from_client(client_x: i32, client_y: i32) -> Self {
        Self::new(client_x as f32, client_y as f32)
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<PointerSample> for Vec2 {
    fn from(s: PointerSample) -> Self {
        s.to_vec2()
    }
}
