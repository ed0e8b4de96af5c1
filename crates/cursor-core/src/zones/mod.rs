//! Interactive zones: tagged regions of the host view and the per-category
//! state they drive.

mod machine;
mod registry;

pub use machine::ZoneStateMachine;
pub use registry::ZoneRegistry;

use crate::color::Color;
use crate::constants::*;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneId(pub usize);

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zone#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoneCategory {
    Stick,
    Magnetic,
    Color,
    Size,
    Text,
    BackgroundImage,
    Exclusion,
}

impl ZoneCategory {
    pub const COUNT: usize = 7;

    pub const ALL: [ZoneCategory; Self::COUNT] = [
        ZoneCategory::Stick,
        ZoneCategory::Magnetic,
        ZoneCategory::Color,
        ZoneCategory::Size,
        ZoneCategory::Text,
        ZoneCategory::BackgroundImage,
        ZoneCategory::Exclusion,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Attribute that tags an element as a zone of this category.
    pub fn marker(self) -> &'static str {
        match self {
            ZoneCategory::Stick => STICK_MARKER,
            ZoneCategory::Magnetic => MAGNETIC_MARKER,
            ZoneCategory::Color => COLOR_MARKER,
            ZoneCategory::Size => SIZE_MARKER,
            ZoneCategory::Text => TEXT_MARKER,
            ZoneCategory::BackgroundImage => BACKGROUND_IMAGE_MARKER,
            ZoneCategory::Exclusion => EXCLUSION_MARKER,
        }
    }

    /// Whether the zone reacts to pointer moves inside it, not only to
    /// enter and leave.
    pub fn tracks_pointer(self) -> bool {
        matches!(self, ZoneCategory::Magnetic)
    }
}

impl fmt::Display for ZoneCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ZoneCategory::Stick => "stick",
            ZoneCategory::Magnetic => "magnetic",
            ZoneCategory::Color => "color",
            ZoneCategory::Size => "size",
            ZoneCategory::Text => "text",
            ZoneCategory::BackgroundImage => "backgroundImage",
            ZoneCategory::Exclusion => "exclusion",
        };
        f.write_str(name)
    }
}

/// Category-specific parameters read from the zone's marker attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum ZoneParams {
    /// Selector of the child whose center the overlay sticks to; `None`
    /// means the zone element itself.
    Stick { child: Option<String> },
    Magnetic,
    Color(Color),
    Size(f32),
    Text(String),
    BackgroundImage(String),
    Exclusion,
}

impl ZoneParams {
    pub fn category(&self) -> ZoneCategory {
        match self {
            ZoneParams::Stick { .. } => ZoneCategory::Stick,
            ZoneParams::Magnetic => ZoneCategory::Magnetic,
            ZoneParams::Color(_) => ZoneCategory::Color,
            ZoneParams::Size(_) => ZoneCategory::Size,
            ZoneParams::Text(_) => ZoneCategory::Text,
            ZoneParams::BackgroundImage(_) => ZoneCategory::BackgroundImage,
            ZoneParams::Exclusion => ZoneCategory::Exclusion,
        }
    }
}

/// A discovered zone. Immutable after discovery.
#[derive(Clone, Debug)]
pub struct ZoneDescriptor<E> {
    pub id: ZoneId,
    pub element: E,
    pub params: ZoneParams,
}

impl<E> ZoneDescriptor<E> {
    #[inline]
    pub fn category(&self) -> ZoneCategory {
        self.params.category()
    }
}
