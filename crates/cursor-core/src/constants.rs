// Tuning constants for motion, deformation and zone defaults.

// Gelly deformation: velocity magnitude is divided by this and capped.
pub const GELLY_SCALE_DIVISOR: f32 = 735.0;
pub const GELLY_SCALE_CAP: f32 = 0.35;

// Overlay sizing
pub const DEFAULT_CURSOR_SIZE: f32 = 48.0; // px, width and height of the outer node
pub const DEFAULT_GELLY_AMOUNT: f32 = 50.0; // px of extra width at full stretch

// Timing (seconds)
pub const DEFAULT_MOTION_DURATION: f32 = 1.25;
pub const DEFAULT_STICK_DURATION: f32 = 0.7;
pub const DEFAULT_MAGNETIC_DURATION: f32 = 0.5;
pub const DEFAULT_ZONE_DURATION: f32 = 0.5;

// Blend amounts
pub const DEFAULT_STICK_AMOUNT: f32 = 0.09;
pub const DEFAULT_MAGNETIC_AMOUNT: f32 = 0.2;

// Palette
pub const DEFAULT_COLOR: &str = "#111111";
pub const DEFAULT_EXCLUSION_COLOR: &str = "#ffffff";
pub const DEFAULT_INNER_COLOR: &str = "#ffffff";

// Zone markers read from the host view tree. The attribute value carries the
// category parameter.
pub const STICK_MARKER: &str = "data-cursor-stick";
pub const MAGNETIC_MARKER: &str = "data-cursor-magnetic";
pub const COLOR_MARKER: &str = "data-cursor-color";
pub const SIZE_MARKER: &str = "data-cursor-size";
pub const TEXT_MARKER: &str = "data-cursor-text";
pub const BACKGROUND_IMAGE_MARKER: &str = "data-cursor-background-image";
pub const EXCLUSION_MARKER: &str = "data-cursor-exclusion";
