use crate::constants::MAX_FRAME_DT_SEC;
use crate::dom::Dispatch;
use cursor_core::CursorEvent;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running `requestAnimationFrame` loop. Cancelling stops the pending
/// request and drops the closure, which breaks its self-reference.
pub struct FrameLoop {
    tick: Tick,
    pending: Rc<Cell<Option<i32>>>,
}

fn request(tick: &Tick, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(closure) = tick.borrow().as_ref() {
        match w.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {e:?}"),
        }
    }
}

pub fn start_loop(dispatch: Dispatch) -> FrameLoop {
    let tick: Tick = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let pending_tick = pending.clone();
    let mut last_instant = Instant::now();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        let now = Instant::now();
        let dt = (now - last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        last_instant = now;
        dispatch(CursorEvent::Frame { dt });
        request(&tick_clone, &pending_tick);
    }) as Box<dyn FnMut()>));

    request(&tick, &pending);
    FrameLoop { tick, pending }
}

impl FrameLoop {
    pub fn cancel(self) {
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        let closure = self.tick.borrow_mut().take();
        drop(closure);
    }
}
