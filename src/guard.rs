//! One overlay per page.
//!
//! The overlay id and its stylesheet are page-global, so a second live mount
//! would fight the first over both. A [`MountGuard`] is the token for the
//! single mount; dropping it frees the slot.
use std::cell::Cell;

thread_local! {
    static MOUNTED: Cell<bool> = const { Cell::new(false) };
}

#[derive(Debug)]
pub struct MountGuard {
    _private: (),
}

impl MountGuard {
    /// `None` while another guard is alive.
    pub fn acquire() -> Option<MountGuard> {
        MOUNTED.with(|m| {
            if m.replace(true) {
                None
            } else {
                Some(MountGuard { _private: () })
            }
        })
    }
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        MOUNTED.with(|m| m.set(false));
    }
}
