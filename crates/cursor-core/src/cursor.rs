//! The mounted overlay: owns every piece of engine state plus the listener
//! and frame registrations taken at mount, and gives all of them back on
//! unmount.

use crate::config::{CursorConfig, Settings};
use crate::error::{ConfigConflict, CursorError};
use crate::host::Host;
use crate::render::{FrameWriters, RenderLoop};
use crate::sampler::PointerSample;
use crate::smoother::{stick_blend_vec, MotionSmoother};
use crate::zones::{ZoneCategory, ZoneId, ZoneParams, ZoneRegistry, ZoneStateMachine};
use glam::Vec2;

/// Everything the host feeds into the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CursorEvent {
    PointerMove(PointerSample),
    ZoneEnter(ZoneId),
    ZoneLeave(ZoneId),
    /// Pointer moved while over a zone that tracks pointer moves.
    ZonePointerMove(ZoneId, PointerSample),
    /// One tick of the frame clock; `dt` in seconds.
    Frame { dt: f32 },
}

struct ZoneListener<H: Host> {
    zone: ZoneId,
    element: H::Element,
    category: ZoneCategory,
    registration: H::Registration,
}

pub struct Cursor<H: Host> {
    settings: Settings,
    zones: ZoneRegistry<H::Element>,
    smoother: MotionSmoother,
    machine: ZoneStateMachine,
    render: RenderLoop,
    listeners: Vec<ZoneListener<H>>,
    pointer_listener: Option<H::Registration>,
    frames: Option<H::FrameSubscription>,
    diagnostics: Vec<CursorError>,
}

impl<H: Host> Cursor<H> {
    /// Discover zones, register listeners and the frame subscription, and
    /// draw the default visuals.
    pub fn mount(config: &CursorConfig, host: &mut H) -> Self {
        let mut settings = config.resolve();
        let zones = ZoneRegistry::discover(&*host, &settings);

        let mut diagnostics = Vec::new();
        if settings.gelly.is_some() && zones.count(ZoneCategory::Size) > 0 {
            let conflict = CursorError::Conflict(ConfigConflict::GellyWithSizeZones);
            log::warn!("{conflict}; gelly deformation disabled");
            settings.gelly = None;
            diagnostics.push(conflict);
        }

        let writers = FrameWriters::build(&*host, settings.gelly.is_some());
        let render = RenderLoop::new(
            writers,
            settings.cursor_size,
            settings.gelly.unwrap_or_default(),
        );

        let machine = ZoneStateMachine::new(&settings);
        machine.draw_initial(&settings, host);

        let listeners = zones
            .iter()
            .map(|zone| ZoneListener {
                zone: zone.id,
                element: zone.element.clone(),
                category: zone.category(),
                registration: host.listen_zone(zone.id, &zone.element, zone.category()),
            })
            .collect::<Vec<_>>();
        let pointer_listener = Some(host.listen_pointer());
        let frames = Some(host.subscribe_frames());

        log::info!(
            "[cursor] mounted zones={} gelly={} size={}",
            zones.len(),
            settings.gelly.is_some(),
            settings.cursor_size
        );

        Self {
            settings,
            zones,
            smoother: MotionSmoother::new(),
            machine,
            render,
            listeners,
            pointer_listener,
            frames,
            diagnostics,
        }
    }

    /// Remove exactly the registrations made at mount. Safe to call twice.
    pub fn unmount(&mut self, host: &mut H) {
        if !self.is_mounted() {
            return;
        }
        for listener in self.listeners.drain(..) {
            log::debug!(
                "[cursor] unlisten {} ({}) on {:?}",
                listener.zone,
                listener.category,
                listener.element
            );
            host.remove_listener(listener.registration);
        }
        if let Some(registration) = self.pointer_listener.take() {
            host.remove_listener(registration);
        }
        if let Some(subscription) = self.frames.take() {
            host.unsubscribe_frames(subscription);
        }
        log::info!("[cursor] unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.frames.is_some()
    }

    /// Route one host event. Ignored once unmounted.
    pub fn handle(&mut self, host: &mut H, event: CursorEvent) {
        if !self.is_mounted() {
            return;
        }
        match event {
            CursorEvent::PointerMove(sample) => self.on_pointer_move(host, sample),
            CursorEvent::ZoneEnter(id) => self.on_zone_enter(host, id),
            CursorEvent::ZoneLeave(id) => self.on_zone_leave(host, id),
            CursorEvent::ZonePointerMove(id, sample) => self.on_zone_pointer_move(host, id, sample),
            CursorEvent::Frame { dt } => self.on_frame(host, dt),
        }
    }

    fn on_pointer_move(&mut self, host: &H, sample: PointerSample) {
        let raw = sample.to_vec2();
        let (target, timing) = match self.stick_center(host) {
            Some(center) => {
                let anim = self.settings.animation(ZoneCategory::Stick);
                (stick_blend_vec(center, raw, anim.amount), anim)
            }
            None => (raw, &self.settings.motion),
        };
        self.smoother.move_to(target, timing.duration, &timing.easing);
    }

    /// Center the overlay sticks to, if a stick zone is active and its target
    /// resolves. An unresolved child falls back to plain following.
    fn stick_center(&self, host: &H) -> Option<Vec2> {
        let id = self.machine.active(ZoneCategory::Stick)?;
        let zone = self.zones.get(id)?;
        let target = match &zone.params {
            ZoneParams::Stick { child: Some(selector) } => {
                let found = host.find_child(&zone.element, selector);
                if found.is_none() {
                    log::debug!("[cursor] {id}: no child matches `{selector}`");
                }
                found?
            }
            _ => zone.element.clone(),
        };
        host.center_of(&target)
    }

    fn on_zone_enter(&mut self, host: &mut H, id: ZoneId) {
        if let Some(zone) = self.zones.get(id) {
            self.machine.enter(zone, &self.settings, host);
        }
    }

    fn on_zone_leave(&mut self, host: &mut H, id: ZoneId) {
        if let Some(zone) = self.zones.get(id) {
            self.machine.leave(zone, &self.settings, host);
        }
    }

    fn on_zone_pointer_move(&mut self, host: &H, id: ZoneId, sample: PointerSample) {
        if let Some(zone) = self.zones.get(id) {
            self.machine.magnetic_move(zone, sample.to_vec2(), &self.settings, host);
        }
    }

    fn on_frame(&mut self, host: &mut H, dt: f32) {
        self.smoother.advance(dt);
        self.render.tick(self.smoother.position(), self.smoother.velocity());
        self.machine.advance(dt, &self.zones, host);
    }

    /// Stop writing frames without giving up the frame subscription.
    pub fn pause(&mut self) {
        self.render.pause();
    }

    pub fn resume(&mut self) {
        self.render.resume();
    }

    pub fn is_paused(&self) -> bool {
        self.render.is_paused()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn zones(&self) -> &ZoneRegistry<H::Element> {
        &self.zones
    }

    pub fn state(&self) -> &ZoneStateMachine {
        &self.machine
    }

    pub fn smoother(&self) -> &MotionSmoother {
        &self.smoother
    }

    pub fn gelly_enabled(&self) -> bool {
        self.render.has_gelly()
    }

    /// Problems found at mount, already absorbed with a fallback.
    pub fn diagnostics(&self) -> &[CursorError] {
        &self.diagnostics
    }
}
