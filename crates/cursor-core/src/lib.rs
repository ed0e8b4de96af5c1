//! Platform-independent core of the pointer overlay.
//!
//! The overlay follows the real pointer with eased motion, stretches along its
//! direction of travel in gelly mode, and reacts to tagged zones of the host
//! view. Everything here talks to the outside world through the [`Host`]
//! trait, so the whole engine runs on the host target under test.

pub mod color;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod deformation;
pub mod easing;
pub mod error;
pub mod host;
pub mod render;
pub mod sampler;
pub mod smoother;
pub mod tween;
pub mod zones;

pub use color::Color;
pub use config::{AnimationConfig, AnimationOptions, CursorConfig, Settings};
pub use cursor::{Cursor, CursorEvent};
pub use deformation::Deformation;
pub use easing::{Curve, Direction, Easing};
pub use error::{ConfigConflict, CursorError, Result};
pub use host::{BlendMode, DrawCommand, Fill, Host, Node, Property, Setter};
pub use render::{FrameWriters, RenderLoop};
pub use sampler::PointerSample;
pub use smoother::MotionSmoother;
pub use tween::{Lerp, Tween, Tweened};
pub use zones::{ZoneCategory, ZoneDescriptor, ZoneId, ZoneParams, ZoneRegistry, ZoneStateMachine};
