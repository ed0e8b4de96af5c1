// Recording host shared by the integration tests.

#![allow(dead_code)]

use cursor_core::{
    BlendMode, Color, CursorConfig, Cursor, CursorEvent, DrawCommand, Fill, Host, Node,
    PointerSample, Property, Setter, ZoneCategory, ZoneId,
};
use glam::Vec2;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct El(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub enum Drawn {
    Background(Color),
    Size(f32),
    Blend(BlendMode),
    Text(String),
    Reveal { scale: f32, opacity: f32 },
    FillColor(Color),
    FillImage(String),
    Offset(El, Vec2),
}

struct MockElement {
    attrs: HashMap<String, String>,
    center: Vec2,
    children: HashMap<String, usize>,
}

/// Not `Clone`: the only way to remove a registration is to hand back the
/// value the host gave out.
#[derive(Debug)]
pub struct Registration(u64);

#[derive(Debug)]
pub struct FrameSubscription(u64);

#[derive(Default)]
pub struct MockHost {
    elements: Vec<MockElement>,
    next_id: u64,
    live_listeners: Vec<u64>,
    live_frames: Vec<u64>,
    pub listeners_added: usize,
    pub listeners_removed: usize,
    pub frames_subscribed: usize,
    pub frames_unsubscribed: usize,
    pub zone_listens: Vec<(ZoneId, El, ZoneCategory)>,
    pub draws: Vec<Drawn>,
    pub writes: Rc<RefCell<Vec<(Node, Property, f32)>>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element tagged with `category`'s marker.
    pub fn add_zone(&mut self, category: ZoneCategory, value: &str, center: Vec2) -> El {
        let mut attrs = HashMap::new();
        attrs.insert(category.marker().to_string(), value.to_string());
        self.elements.push(MockElement {
            attrs,
            center,
            children: HashMap::new(),
        });
        El(self.elements.len() - 1)
    }

    pub fn add_child(&mut self, parent: El, selector: &str, center: Vec2) -> El {
        self.elements.push(MockElement {
            attrs: HashMap::new(),
            center,
            children: HashMap::new(),
        });
        let child = self.elements.len() - 1;
        self.elements[parent.0]
            .children
            .insert(selector.to_string(), child);
        El(child)
    }

    pub fn move_element(&mut self, el: El, center: Vec2) {
        self.elements[el.0].center = center;
    }

    pub fn live_listeners(&self) -> usize {
        self.live_listeners.len()
    }

    pub fn live_frames(&self) -> usize {
        self.live_frames.len()
    }

    pub fn take_draws(&mut self) -> Vec<Drawn> {
        std::mem::take(&mut self.draws)
    }

    pub fn take_writes(&self) -> Vec<(Node, Property, f32)> {
        std::mem::take(&mut *self.writes.borrow_mut())
    }

    fn next(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl Host for MockHost {
    type Element = El;
    type Registration = Registration;
    type FrameSubscription = FrameSubscription;

    fn query_zones(&self, marker: &str) -> Vec<El> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.attrs.contains_key(marker))
            .map(|(i, _)| El(i))
            .collect()
    }

    fn attribute(&self, element: &El, name: &str) -> Option<String> {
        self.elements.get(element.0)?.attrs.get(name).cloned()
    }

    fn center_of(&self, element: &El) -> Option<Vec2> {
        self.elements.get(element.0).map(|e| e.center)
    }

    fn find_child(&self, element: &El, selector: &str) -> Option<El> {
        self.elements
            .get(element.0)?
            .children
            .get(selector)
            .map(|&i| El(i))
    }

    fn listen_zone(&mut self, zone: ZoneId, element: &El, category: ZoneCategory) -> Registration {
        let id = self.next();
        self.live_listeners.push(id);
        self.listeners_added += 1;
        self.zone_listens.push((zone, *element, category));
        Registration(id)
    }

    fn listen_pointer(&mut self) -> Registration {
        let id = self.next();
        self.live_listeners.push(id);
        self.listeners_added += 1;
        Registration(id)
    }

    fn remove_listener(&mut self, registration: Registration) {
        let before = self.live_listeners.len();
        self.live_listeners.retain(|&id| id != registration.0);
        assert_eq!(
            before - 1,
            self.live_listeners.len(),
            "removed a listener that was never added"
        );
        self.listeners_removed += 1;
    }

    fn subscribe_frames(&mut self) -> FrameSubscription {
        let id = self.next();
        self.live_frames.push(id);
        self.frames_subscribed += 1;
        FrameSubscription(id)
    }

    fn unsubscribe_frames(&mut self, subscription: FrameSubscription) {
        self.live_frames.retain(|&id| id != subscription.0);
        self.frames_unsubscribed += 1;
    }

    fn setter(&self, node: Node, property: Property) -> Setter {
        let writes = self.writes.clone();
        Box::new(move |v| writes.borrow_mut().push((node, property, v)))
    }

    fn draw(&mut self, command: DrawCommand<'_, El>) {
        let drawn = match command {
            DrawCommand::BackgroundColor(c) => Drawn::Background(c),
            DrawCommand::Size(s) => Drawn::Size(s),
            DrawCommand::BlendMode(m) => Drawn::Blend(m),
            DrawCommand::InnerText(t) => Drawn::Text(t.to_string()),
            DrawCommand::InnerReveal { scale, opacity } => Drawn::Reveal { scale, opacity },
            DrawCommand::InnerFill(Fill::Color(c)) => Drawn::FillColor(c),
            DrawCommand::InnerFill(Fill::Image(i)) => Drawn::FillImage(i.to_string()),
            DrawCommand::ElementOffset { element, offset } => Drawn::Offset(*element, offset),
        };
        self.draws.push(drawn);
    }
}

pub fn mount(config: &CursorConfig, host: &mut MockHost) -> Cursor<MockHost> {
    let cursor = Cursor::mount(config, host);
    host.take_draws();
    host.take_writes();
    cursor
}

/// Run `seconds` worth of 60 Hz frames.
pub fn run_frames(cursor: &mut Cursor<MockHost>, host: &mut MockHost, seconds: f32) {
    let frames = (seconds * 60.0).ceil() as usize + 1;
    for _ in 0..frames {
        cursor.handle(host, CursorEvent::Frame { dt: 1.0 / 60.0 });
    }
}

pub fn pointer(x: f32, y: f32) -> CursorEvent {
    CursorEvent::PointerMove(PointerSample::new(x, y))
}

pub fn zone_of(host: &MockHost, el: El) -> ZoneId {
    host.zone_listens
        .iter()
        .find(|(_, e, _)| *e == el)
        .map(|(id, _, _)| *id)
        .expect("element was not registered as a zone")
}

pub fn last_blend(draws: &[Drawn]) -> Option<BlendMode> {
    draws.iter().rev().find_map(|d| match d {
        Drawn::Blend(m) => Some(*m),
        _ => None,
    })
}

pub fn last_background(draws: &[Drawn]) -> Option<Color> {
    draws.iter().rev().find_map(|d| match d {
        Drawn::Background(c) => Some(*c),
        _ => None,
    })
}
