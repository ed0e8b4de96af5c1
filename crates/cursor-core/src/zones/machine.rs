//! Per-category enter/leave transitions.
//!
//! Each category is either inactive or holds the one zone the pointer is
//! over. Transitions either draw immediately (blend mode, text, fills) or
//! retarget an eased tween that [`ZoneStateMachine::advance`] steps on every
//! frame. Magnetic zones are the exception in what they move: their tween
//! displaces the hovered element, not the overlay.

use super::{ZoneCategory, ZoneDescriptor, ZoneId, ZoneParams, ZoneRegistry};
use crate::color::Color;
use crate::config::{AnimationConfig, Settings};
use crate::host::{BlendMode, DrawCommand, Fill, Host};
use crate::tween::Tweened;
use fnv::FnvHashMap;
use glam::Vec2;

#[derive(Debug)]
pub struct ZoneStateMachine {
    active: [Option<ZoneId>; ZoneCategory::COUNT],
    /// Whether exclusion was already active when the current background-image
    /// zone was entered. Decides what leaving that zone restores.
    exclusion_before_image: bool,
    background: Tweened<Color>,
    size: Tweened<f32>,
    /// Inner node scale and opacity, animated together.
    reveal: Tweened<f32>,
    magnets: FnvHashMap<ZoneId, Tweened<Vec2>>,
}

impl ZoneStateMachine {
    pub fn new(settings: &Settings) -> Self {
        Self {
            active: [None; ZoneCategory::COUNT],
            exclusion_before_image: false,
            background: Tweened::new(settings.default_color),
            size: Tweened::new(settings.cursor_size),
            reveal: Tweened::new(0.0),
            magnets: FnvHashMap::default(),
        }
    }

    /// Put every visual the machine owns into its default state.
    pub fn draw_initial<H: Host>(&self, settings: &Settings, host: &mut H) {
        host.draw(DrawCommand::BackgroundColor(self.background.value()));
        host.draw(DrawCommand::Size(self.size.value()));
        host.draw(DrawCommand::BlendMode(BlendMode::Normal));
        host.draw(DrawCommand::InnerText(""));
        host.draw(DrawCommand::InnerReveal {
            scale: 0.0,
            opacity: 0.0,
        });
        host.draw(DrawCommand::InnerFill(Fill::Color(settings.inner_color)));
    }

    #[inline]
    pub fn active(&self, category: ZoneCategory) -> Option<ZoneId> {
        self.active[category.index()]
    }

    #[inline]
    pub fn is_active(&self, category: ZoneCategory) -> bool {
        self.active(category).is_some()
    }

    pub fn exclusion_before_image(&self) -> bool {
        self.exclusion_before_image
    }

    pub fn background(&self) -> Color {
        self.background.value()
    }

    pub fn background_target(&self) -> Color {
        self.background.target()
    }

    pub fn size_target(&self) -> f32 {
        self.size.target()
    }

    pub fn reveal_target(&self) -> f32 {
        self.reveal.target()
    }

    pub fn magnet_offset(&self, zone: ZoneId) -> Option<Vec2> {
        self.magnets.get(&zone).map(Tweened::value)
    }

    pub fn enter<H: Host>(
        &mut self,
        zone: &ZoneDescriptor<H::Element>,
        settings: &Settings,
        host: &mut H,
    ) {
        let category = zone.category();
        let anim = settings.animation(category);
        log::debug!("enter {} ({})", zone.id, category);

        // Must be read before any blend mode is forced below.
        if category == ZoneCategory::BackgroundImage {
            self.exclusion_before_image = self.is_active(ZoneCategory::Exclusion);
        }
        self.active[category.index()] = Some(zone.id);

        match &zone.params {
            ZoneParams::Stick { .. } => {}
            ZoneParams::Magnetic => {
                self.magnets
                    .entry(zone.id)
                    .or_insert_with(|| Tweened::new(Vec2::ZERO));
            }
            ZoneParams::Color(color) => {
                self.background.retarget(*color, anim.duration, &anim.easing);
            }
            ZoneParams::Size(size) => {
                self.size.retarget(*size, anim.duration, &anim.easing);
            }
            ZoneParams::Text(text) => {
                host.draw(DrawCommand::InnerText(text));
                self.reveal.retarget(1.0, anim.duration, &anim.easing);
            }
            ZoneParams::Exclusion => {
                host.draw(DrawCommand::BlendMode(BlendMode::Exclusion));
                self.background.retarget(settings.exclusion_color, anim.duration, &anim.easing);
            }
            ZoneParams::BackgroundImage(image) => {
                host.draw(DrawCommand::BlendMode(BlendMode::Exclusion));
                host.draw(DrawCommand::InnerFill(Fill::Image(image)));
                self.reveal.retarget(1.0, anim.duration, &anim.easing);
            }
        }
    }

    /// Leave `zone`. A leave for a zone that isn't the active one of its
    /// category is ignored.
    pub fn leave<H: Host>(
        &mut self,
        zone: &ZoneDescriptor<H::Element>,
        settings: &Settings,
        host: &mut H,
    ) {
        let category = zone.category();
        if self.active(category) != Some(zone.id) {
            log::debug!("leave {} ({}) ignored, not active", zone.id, category);
            return;
        }
        self.active[category.index()] = None;
        log::debug!("leave {} ({})", zone.id, category);

        let anim = settings.animation(category);
        match &zone.params {
            ZoneParams::Stick { .. } => {}
            ZoneParams::Magnetic => {
                if let Some(offset) = self.magnets.get_mut(&zone.id) {
                    offset.retarget(Vec2::ZERO, anim.duration, &anim.easing);
                }
            }
            ZoneParams::Color(_) => {
                self.background.retarget(settings.default_color, anim.duration, &anim.easing);
            }
            ZoneParams::Size(_) => {
                self.size.retarget(settings.cursor_size, anim.duration, &anim.easing);
            }
            ZoneParams::Text(_) => {
                host.draw(DrawCommand::InnerText(""));
                self.hide_inner_unless(ZoneCategory::BackgroundImage, anim);
            }
            ZoneParams::Exclusion => {
                // An image zone still under the pointer keeps forcing exclusion.
                if !self.is_active(ZoneCategory::BackgroundImage) {
                    host.draw(DrawCommand::BlendMode(BlendMode::Normal));
                }
                self.background.retarget(settings.default_color, anim.duration, &anim.easing);
            }
            ZoneParams::BackgroundImage(_) => {
                host.draw(DrawCommand::InnerFill(Fill::Color(settings.inner_color)));
                self.hide_inner_unless(ZoneCategory::Text, anim);
                // The area under the pointer is still excluded by the zone
                // that was active before the image zone was entered, as long
                // as that zone hasn't been left in the meantime.
                let restore_exclusion =
                    self.exclusion_before_image && self.is_active(ZoneCategory::Exclusion);
                let (mode, color) = if restore_exclusion {
                    (BlendMode::Exclusion, settings.exclusion_color)
                } else {
                    (BlendMode::Normal, settings.default_color)
                };
                host.draw(DrawCommand::BlendMode(mode));
                self.background.retarget(color, anim.duration, &anim.easing);
                self.exclusion_before_image = false;
            }
        }
    }

    /// Ease the inner node out, unless `keep` still shows something on it.
    fn hide_inner_unless(&mut self, keep: ZoneCategory, anim: &AnimationConfig) {
        if !self.is_active(keep) {
            self.reveal.retarget(0.0, anim.duration, &anim.easing);
        }
    }

    /// Pull the hovered magnetic element toward the pointer:
    /// `offset = (pointer - center) * amount`.
    pub fn magnetic_move<H: Host>(
        &mut self,
        zone: &ZoneDescriptor<H::Element>,
        pointer: Vec2,
        settings: &Settings,
        host: &H,
    ) {
        if zone.category() != ZoneCategory::Magnetic
            || self.active(ZoneCategory::Magnetic) != Some(zone.id)
        {
            return;
        }
        let Some(center) = host.center_of(&zone.element) else {
            return;
        };
        let anim = settings.animation(ZoneCategory::Magnetic);
        let offset = self
            .magnets
            .entry(zone.id)
            .or_insert_with(|| Tweened::new(Vec2::ZERO));
        // The measured box already includes the current displacement.
        let rest_center = center - offset.value();
        offset.retarget(
            (pointer - rest_center) * anim.amount,
            anim.duration,
            &anim.easing,
        );
    }

    /// Step every tween the machine owns and draw whatever moved.
    pub fn advance<H: Host>(&mut self, dt: f32, zones: &ZoneRegistry<H::Element>, host: &mut H) {
        if self.background.advance(dt) {
            host.draw(DrawCommand::BackgroundColor(self.background.value()));
        }
        if self.size.advance(dt) {
            host.draw(DrawCommand::Size(self.size.value()));
        }
        if self.reveal.advance(dt) {
            let v = self.reveal.value();
            host.draw(DrawCommand::InnerReveal {
                scale: v,
                opacity: v,
            });
        }

        let hovered = self.active(ZoneCategory::Magnetic);
        self.magnets.retain(|id, offset| {
            if offset.advance(dt) {
                if let Some(zone) = zones.get(*id) {
                    host.draw(DrawCommand::ElementOffset {
                        element: &zone.element,
                        offset: offset.value(),
                    });
                }
            }
            hovered == Some(*id) || offset.is_animating() || offset.value() != Vec2::ZERO
        });
    }
}
