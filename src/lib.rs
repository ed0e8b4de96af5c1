#![cfg(target_arch = "wasm32")]
//! Browser entry points for the eased pointer overlay.
//!
//! `mountCursor(options)` builds the overlay nodes, mounts the engine against
//! the live document and hands back a [`CursorHandle`]. Every DOM callback
//! goes through one dispatcher that borrows the runtime for the duration of
//! a single event.
use cursor_core::{Cursor, CursorEvent};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod guard;
mod overlay;
mod style;

use dom::{Dispatch, WebHost};
use guard::MountGuard;

struct Runtime {
    cursor: Cursor<WebHost>,
    host: WebHost,
    // Released after `drop` has removed the overlay.
    _guard: MountGuard,
}

/// Dropping the runtime detaches everything it registered, so a handle that
/// JS frees without calling `destroy` does not leave dangling closures.
impl Drop for Runtime {
    fn drop(&mut self) {
        self.cursor.unmount(&mut self.host);
        overlay::remove(self.host.document(), self.host.nodes());
    }
}

type Slot = Rc<RefCell<Option<Runtime>>>;

fn dispatcher(slot: Weak<RefCell<Option<Runtime>>>) -> Dispatch {
    Rc::new(move |event: CursorEvent| {
        let Some(slot) = slot.upgrade() else {
            return;
        };
        // Busy means an event fired from inside another handler's DOM write.
        let Ok(mut guard) = slot.try_borrow_mut() else {
            log::debug!("[cursor] dropped re-entrant {event:?}");
            return;
        };
        if let Some(Runtime { cursor, host, .. }) = guard.as_mut() {
            cursor.handle(host, event);
        }
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cursor-web loaded");
    Ok(())
}

fn mount(options: &JsValue) -> anyhow::Result<CursorHandle> {
    let guard = MountGuard::acquire()
        .ok_or_else(|| anyhow::anyhow!("a cursor is already mounted; call destroy() first"))?;
    let config = config::from_js(options)?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let nodes = overlay::create(&document)?;

    let slot: Slot = Rc::new(RefCell::new(None));
    let mut host = WebHost::new(document, nodes, dispatcher(Rc::downgrade(&slot)));
    let cursor = Cursor::mount(&config, &mut host);
    for problem in cursor.diagnostics() {
        log::warn!("[cursor] {problem}");
    }
    *slot.borrow_mut() = Some(Runtime {
        cursor,
        host,
        _guard: guard,
    });
    Ok(CursorHandle { runtime: slot })
}

/// Mount the overlay. `options` is a plain object; any field may be omitted.
#[wasm_bindgen(js_name = mountCursor)]
pub fn mount_cursor(options: JsValue) -> Result<CursorHandle, JsValue> {
    mount(&options).map_err(|e| {
        log::error!("mount error: {e:?}");
        JsValue::from_str(&e.to_string())
    })
}

#[wasm_bindgen]
pub struct CursorHandle {
    runtime: Slot,
}

impl CursorHandle {
    fn with_cursor(&self, f: impl FnOnce(&mut Cursor<WebHost>)) {
        match self.runtime.try_borrow_mut() {
            Ok(mut guard) => {
                if let Some(rt) = guard.as_mut() {
                    f(&mut rt.cursor);
                }
            }
            Err(_) => log::warn!("[cursor] handle used while an event is in flight"),
        }
    }
}

#[wasm_bindgen]
impl CursorHandle {
    /// Stop writing frames. Zone transitions keep their state.
    pub fn pause(&self) {
        self.with_cursor(Cursor::pause);
    }

    pub fn resume(&self) {
        self.with_cursor(Cursor::resume);
    }

    #[wasm_bindgen(js_name = isPaused)]
    pub fn is_paused(&self) -> bool {
        self.runtime
            .try_borrow()
            .ok()
            .and_then(|g| g.as_ref().map(|rt| rt.cursor.is_paused()))
            .unwrap_or(false)
    }

    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.runtime
            .try_borrow()
            .map(|g| g.is_some())
            .unwrap_or(false)
    }

    /// Remove every listener and the frame loop, then the overlay nodes.
    /// Calling it again does nothing.
    pub fn destroy(&self) -> Result<(), JsValue> {
        let taken = self
            .runtime
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("cursor is busy"))?
            .take();
        drop(taken);
        Ok(())
    }
}
