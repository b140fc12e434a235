//! Hover snap menu
//!
//! Each window's title bar carries a trigger that opens a menu of snap
//! targets. Leaving the trigger starts a close timer that re-entering
//! cancels. Time is passed in by the caller as milliseconds so the timer
//! is driven by [`SnapMenu::tick`] rather than by a background task.

use crate::types::WindowId;

/// Open/close state of the snap menu plus its pending close deadline
#[derive(Clone, Debug, PartialEq)]
pub struct SnapMenu {
    open_for: Option<WindowId>,
    close_deadline: Option<f64>,
    close_delay_ms: f64,
}

impl SnapMenu {
    /// Create a closed menu with the given close delay
    pub fn new(close_delay_ms: f64) -> Self {
        Self {
            open_for: None,
            close_deadline: None,
            close_delay_ms,
        }
    }

    /// Window the menu is open for
    pub fn open_for(&self) -> Option<WindowId> {
        self.open_for
    }

    pub fn is_open(&self) -> bool {
        self.open_for.is_some()
    }

    /// Time at which a pending close fires
    pub fn pending_close(&self) -> Option<f64> {
        self.close_deadline
    }

    /// Pointer entered the trigger or the menu for `id`
    ///
    /// Cancels any pending close and (re)opens the menu for that window.
    pub fn pointer_enter(&mut self, id: WindowId) {
        self.close_deadline = None;
        self.open_for = Some(id);
    }

    /// Pointer left the trigger or the menu; schedule a close
    pub fn pointer_leave(&mut self, now_ms: f64) {
        if self.open_for.is_some() {
            self.close_deadline = Some(now_ms + self.close_delay_ms);
        }
    }

    /// Fire the pending close if its deadline has passed
    ///
    /// Returns true if the menu closed on this tick.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        match self.close_deadline {
            Some(deadline) if now_ms >= deadline => {
                self.dismiss();
                true
            }
            _ => false,
        }
    }

    /// Close immediately and drop any pending close
    pub fn dismiss(&mut self) {
        self.open_for = None;
        self.close_deadline = None;
    }

    /// Drop all menu state if it belongs to a window that went away
    pub fn forget_window(&mut self, id: WindowId) {
        if self.open_for == Some(id) {
            self.dismiss();
        }
    }
}
