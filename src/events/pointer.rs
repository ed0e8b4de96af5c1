use super::Listener;
use crate::dom::Dispatch;
use cursor_core::{CursorEvent, PointerSample, ZoneCategory, ZoneId};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Client position of a mouse or primary pointer event.
#[inline]
fn sample(ev: &web::Event) -> Option<PointerSample> {
    if let Some(p) = ev.dyn_ref::<web::PointerEvent>() {
        if !p.is_primary() {
            return None;
        }
    }
    ev.dyn_ref::<web::MouseEvent>()
        .map(|m| PointerSample::from_client(m.client_x(), m.client_y()))
}

/// Viewport-wide pointer moves drive the smoother.
pub fn wire_pointermove(target: web::EventTarget, dispatch: Dispatch) -> Listener {
    Listener::new(target).on("pointermove", move |ev| {
        if let Some(s) = sample(&ev) {
            dispatch(CursorEvent::PointerMove(s));
        }
    })
}

/// Enter/leave on one zone element, plus moves over it when the category
/// reacts to them.
pub fn wire_zone(
    element: &web::Element,
    zone: ZoneId,
    category: ZoneCategory,
    dispatch: Dispatch,
) -> Listener {
    let target: web::EventTarget = element.clone().into();
    let enter = dispatch.clone();
    let leave = dispatch.clone();
    let listener = Listener::new(target)
        .on("mouseenter", move |_| enter(CursorEvent::ZoneEnter(zone)))
        .on("mouseleave", move |_| leave(CursorEvent::ZoneLeave(zone)));
    if !category.tracks_pointer() {
        return listener;
    }
    listener.on("mousemove", move |ev| {
        if let Some(s) = sample(&ev) {
            dispatch(CursorEvent::ZonePointerMove(zone, s));
        }
    })
}
