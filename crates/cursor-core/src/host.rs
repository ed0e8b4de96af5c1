//! The seam between the engine and the view tree it runs in.
//!
//! A [`Host`] answers zone queries, hands out listener and frame
//! registrations, builds per-property setters for the render loop, and
//! receives every other visual change as a [`DrawCommand`].

use crate::color::Color;
use crate::zones::{ZoneCategory, ZoneId};
use glam::Vec2;
use std::fmt;

/// A precompiled writer for one numeric property of one overlay node.
pub type Setter = Box<dyn FnMut(f32)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    Outer,
    Inner,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    /// Translation in px.
    X,
    Y,
    /// Rotation in degrees.
    Rotate,
    ScaleX,
    ScaleY,
    /// Width in px.
    Width,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    Normal,
    Exclusion,
}

impl BlendMode {
    pub fn as_css(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Exclusion => "exclusion",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fill<'a> {
    Color(Color),
    Image(&'a str),
}

/// Visual changes outside the per-frame position/deformation writes.
#[derive(Debug, PartialEq)]
pub enum DrawCommand<'a, E> {
    /// Outer node background.
    BackgroundColor(Color),
    /// Outer node width and height in px.
    Size(f32),
    BlendMode(BlendMode),
    InnerText(&'a str),
    /// Scale and opacity of the inner node.
    InnerReveal { scale: f32, opacity: f32 },
    InnerFill(Fill<'a>),
    /// Translate a hovered zone element (magnetic pull).
    ElementOffset { element: &'a E, offset: Vec2 },
}

pub trait Host {
    type Element: Clone + fmt::Debug;
    /// Proof of one registered listener set; handing it back removes exactly
    /// what was added.
    type Registration;
    type FrameSubscription;

    /// Elements carrying `marker`, in document order.
    fn query_zones(&self, marker: &str) -> Vec<Self::Element>;
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;
    /// Center of the element's box in viewport coordinates.
    fn center_of(&self, element: &Self::Element) -> Option<Vec2>;
    fn find_child(&self, element: &Self::Element, selector: &str) -> Option<Self::Element>;

    /// Listen for enter/leave on a zone element, plus pointer moves over it
    /// for categories that track them.
    fn listen_zone(
        &mut self,
        zone: ZoneId,
        element: &Self::Element,
        category: ZoneCategory,
    ) -> Self::Registration;
    /// Listen for pointer moves anywhere in the viewport.
    fn listen_pointer(&mut self) -> Self::Registration;
    fn remove_listener(&mut self, registration: Self::Registration);

    fn subscribe_frames(&mut self) -> Self::FrameSubscription;
    fn unsubscribe_frames(&mut self, subscription: Self::FrameSubscription);

    fn setter(&self, node: Node, property: Property) -> Setter;
    fn draw(&mut self, command: DrawCommand<'_, Self::Element>);
}
