//! Desktop surface: the coordinate frame and the render list
//!
//! The surface's client box is where the desktop sits on the page. Pointer
//! events arrive in page coordinates and are converted with
//! [`DesktopSurface::to_local`]; window geometry is always surface-local.

use serde::Serialize;

use crate::math::{Rect, Size, Vec2};
use crate::snap::{SnapLayout, SnapPreview};
use crate::types::{WindowId, ZIndex};
use crate::window::WindowManager;

/// The container all window geometry is relative to
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DesktopSurface {
    client: Rect,
}

impl Default for DesktopSurface {
    fn default() -> Self {
        Self::new(Rect::new(0.0, 0.0, 1920.0, 1080.0))
    }
}

impl DesktopSurface {
    /// Create a surface with the given page-space client box
    pub fn new(client: Rect) -> Self {
        Self { client }
    }

    /// Update the client box after the container moved or resized
    pub fn set_client_rect(&mut self, client: Rect) {
        self.client = client;
    }

    /// Page-space client box
    pub fn client_rect(&self) -> Rect {
        self.client
    }

    /// Current client size
    pub fn size(&self) -> Size {
        self.client.size()
    }

    /// Convert a page-space point to surface-local coordinates
    pub fn to_local(&self, page: Vec2) -> Vec2 {
        page - self.client.position()
    }

    /// Build the render list for the current state
    ///
    /// Windows come out in ascending z-order so the last one paints on top.
    /// While a drag is active every window gets an event shield over its body.
    pub fn frame(
        &self,
        windows: &WindowManager,
        dragging: bool,
        preview: Option<&SnapPreview>,
    ) -> SurfaceFrame {
        let size = self.size();
        let focused = windows.focused_id();

        let windows = windows
            .windows_by_z()
            .into_iter()
            .map(|w| WindowFrame {
                id: w.id,
                category: w.category.as_str().to_string(),
                title: w.title.clone(),
                rect: w.rendered_rect(size),
                maximized: w.maximized,
                z_index: w.z_index,
                focused: focused == Some(w.id),
                event_shield: dragging,
            })
            .collect();

        let overlay = preview.map(|p| OverlayFrame {
            layout: p.layout,
            rect: p.rect,
            pointer_events: false,
        });

        SurfaceFrame {
            width: size.width,
            height: size.height,
            windows,
            overlay,
        }
    }
}

/// One window as the page should draw it
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WindowFrame {
    pub id: WindowId,
    pub category: String,
    pub title: String,
    /// Bounds to draw at (the full surface when maximized)
    pub rect: Rect,
    pub maximized: bool,
    pub z_index: ZIndex,
    pub focused: bool,
    /// Draw a transparent layer over the body that swallows pointer events
    pub event_shield: bool,
}

/// Snap preview overlay, drawn above every window
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OverlayFrame {
    pub layout: SnapLayout,
    pub rect: Rect,
    /// Always false: the overlay never intercepts the pointer
    pub pointer_events: bool,
}

/// Everything the page needs to draw the desktop
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SurfaceFrame {
    pub width: f32,
    pub height: f32,
    pub windows: Vec<WindowFrame>,
    pub overlay: Option<OverlayFrame>,
}
