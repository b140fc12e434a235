//! Drag state machine and input routing results

use serde::Serialize;

use super::ResizeDirection;
use crate::math::{Rect, Vec2};
use crate::types::WindowId;

/// Result of routing a pointer event through the desktop
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputResult {
    /// The desktop consumed the event
    Handled,
    /// Nothing on the desktop was interested
    Unhandled,
    /// The pointer landed on a title bar control; the page handles the click
    Control { window_id: WindowId },
    /// Forward to the hosted content at window-local coordinates
    Forward {
        window_id: WindowId,
        local_x: f32,
        local_y: f32,
    },
}

/// The single live pointer interaction
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    /// No interaction in progress
    #[default]
    Idle,
    /// Moving a window by its title bar
    Moving {
        window_id: WindowId,
        /// Pointer position minus window origin at grab time
        offset: Vec2,
    },
    /// Resizing a window from one of its handles
    Resizing {
        window_id: WindowId,
        direction: ResizeDirection,
        /// Window geometry at grab time
        start_rect: Rect,
        /// Pointer position at grab time
        start_pointer: Vec2,
    },
}

impl DragState {
    /// Window targeted by the interaction, if any
    pub fn window_id(&self) -> Option<WindowId> {
        match self {
            DragState::Idle => None,
            DragState::Moving { window_id, .. } | DragState::Resizing { window_id, .. } => {
                Some(*window_id)
            }
        }
    }
}

/// Owner of the drag state
#[derive(Clone, Debug, Default)]
pub struct InputRouter {
    state: DragState,
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self::default()
    }

    /// Current drag state
    pub fn drag_state(&self) -> &DragState {
        &self.state
    }

    /// Check if any drag is active
    pub fn is_dragging(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    /// Check if a window move is active
    pub fn is_moving(&self) -> bool {
        matches!(self.state, DragState::Moving { .. })
    }

    /// Begin moving a window
    pub fn start_window_move(&mut self, window_id: WindowId, offset: Vec2) {
        self.state = DragState::Moving { window_id, offset };
    }

    /// Begin resizing a window
    pub fn start_window_resize(
        &mut self,
        window_id: WindowId,
        direction: ResizeDirection,
        start_rect: Rect,
        start_pointer: Vec2,
    ) {
        self.state = DragState::Resizing {
            window_id,
            direction,
            start_rect,
            start_pointer,
        };
    }

    /// Return to idle, handing back the state that was active
    pub fn end_drag(&mut self) -> DragState {
        std::mem::take(&mut self.state)
    }
}
