//! Desktop engine coordinating all components

use tracing::{debug, trace};

use crate::config::DesktopConfig;
use crate::input::{calculate_resize, DragState, InputResult, InputRouter, ResizeDirection};
use crate::math::{Rect, Vec2};
use crate::menu::SnapMenu;
use crate::snap::{self, SnapLayout, SnapPreview};
use crate::surface::{DesktopSurface, SurfaceFrame};
use crate::types::WindowId;
use crate::window::{WindowManager, WindowRegion};
use crate::DesktopResult;

/// Desktop engine coordinating all desktop components
///
/// This is the main entry point for desktop operations, managing:
/// - Window manager (open/close, category uniqueness, z-order)
/// - Input router (move/resize state machine)
/// - Snap preview and snap commits
/// - The hover snap menu and its close timer
/// - The desktop surface the geometry is measured against
///
/// Pointer coordinates passed to the `handle_*` and `start_*` methods are in
/// page space; the engine converts them through the surface.
pub struct DesktopEngine {
    config: DesktopConfig,
    /// Window manager
    pub windows: WindowManager,
    /// Input router
    pub input: InputRouter,
    /// Surface client box
    pub surface: DesktopSurface,
    /// Hover snap menu
    pub menu: SnapMenu,
    /// Snap preview while a move hovers near an edge
    preview: Option<SnapPreview>,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopEngine {
    /// Create a new desktop engine with the default configuration
    pub fn new() -> Self {
        Self::with_config(DesktopConfig::default())
    }

    /// Create a new desktop engine
    pub fn with_config(config: DesktopConfig) -> Self {
        Self {
            windows: WindowManager::with_config(&config),
            input: InputRouter::new(),
            surface: DesktopSurface::default(),
            menu: SnapMenu::new(config.menu_close_delay_ms),
            preview: None,
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    /// Set where the surface sits on the page and how large it is
    pub fn set_surface(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.surface.set_client_rect(Rect::new(x, y, width, height));
    }

    // =========================================================================
    // Window registry
    // =========================================================================

    /// Open a window for `category`, or focus the one already open
    pub fn open_window(&mut self, category: &str, title: &str) -> WindowId {
        self.windows.open(category, title)
    }

    /// Close a window
    ///
    /// A drag on this window stays armed until the next pointer-up, but
    /// every move in between is a no-op.
    pub fn close_window(&mut self, id: WindowId) {
        if self.windows.close(id) {
            self.menu.forget_window(id);
            if self.input.drag_state().window_id() == Some(id) {
                self.preview = None;
            }
        }
    }

    /// Focus a window (brings it to front in z-order)
    pub fn focus_window(&mut self, id: WindowId) {
        self.windows.bring_to_front(id);
    }

    /// Flip a window between maximized and free-form
    pub fn toggle_maximize(&mut self, id: WindowId) {
        self.windows.toggle_maximize(id);
    }

    /// Whether a window for `category` is open
    pub fn is_open(&self, category: &str) -> bool {
        self.windows.is_open(category)
    }

    // =========================================================================
    // Snapping
    // =========================================================================

    /// Snap a window to a named layout against the current surface size
    pub fn apply_snap(&mut self, id: WindowId, layout: SnapLayout) {
        snap::apply_snap(&mut self.windows, id, layout, self.surface.size());
    }

    /// Snap a window to a layout given by name ("left", "tl", "col2", ...)
    pub fn apply_snap_by_name(&mut self, id: WindowId, layout: &str) -> DesktopResult<()> {
        let layout: SnapLayout = layout.parse()?;
        self.apply_snap(id, layout);
        Ok(())
    }

    /// Current snap preview, if a move is hovering near an edge
    pub fn preview(&self) -> Option<&SnapPreview> {
        self.preview.as_ref()
    }

    // =========================================================================
    // Snap menu
    // =========================================================================

    /// Pointer entered a window's snap menu trigger (or the menu itself)
    pub fn menu_enter(&mut self, id: WindowId) {
        if self.windows.get(id).is_none() {
            return;
        }
        self.menu.pointer_enter(id);
        self.windows.bring_to_front(id);
    }

    /// Pointer left the trigger or the menu
    pub fn menu_leave(&mut self, now_ms: f64) {
        self.menu.pointer_leave(now_ms);
    }

    /// A layout was picked from the open menu; snaps its window and closes it
    pub fn menu_select(&mut self, layout: SnapLayout) {
        if let Some(id) = self.menu.open_for() {
            self.apply_snap(id, layout);
        }
        self.menu.dismiss();
    }

    /// A pointer-down anywhere on the page
    pub fn handle_global_pointer_down(&mut self, inside_menu: bool) {
        if !inside_menu && self.menu.is_open() {
            self.menu.dismiss();
        }
    }

    /// Advance timers; returns true if the menu closed
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let closed = self.menu.tick(now_ms);
        if closed {
            trace!(now_ms, "snap menu closed by timer");
        }
        closed
    }

    /// Drop all transient state (drag, preview, menu timer)
    pub fn teardown(&mut self) {
        self.input.end_drag();
        self.preview = None;
        self.menu.dismiss();
    }

    // =========================================================================
    // Drag/resize controller
    // =========================================================================

    /// Start a move drag from a window's title bar
    ///
    /// Ignored for maximized or missing windows. Returns whether a drag began.
    pub fn start_move_drag(&mut self, id: WindowId, page_x: f32, page_y: f32) -> bool {
        let origin = match self.windows.get(id) {
            Some(window) if !window.maximized => window.rect.position(),
            _ => return false,
        };

        let pointer = self.surface.to_local(Vec2::new(page_x, page_y));
        let offset = pointer - origin;
        self.windows.bring_to_front(id);
        self.input.start_window_move(id, offset);
        self.preview = None;
        debug!(id, offset_x = offset.x, offset_y = offset.y, "move drag started");
        true
    }

    /// Start a resize drag from one of the eight handles
    ///
    /// Ignored for maximized or missing windows. Returns whether a drag began.
    pub fn start_resize_drag(
        &mut self,
        id: WindowId,
        direction: ResizeDirection,
        page_x: f32,
        page_y: f32,
    ) -> bool {
        let start_rect = match self.windows.get(id) {
            Some(window) if !window.maximized => window.rect,
            _ => return false,
        };

        let pointer = self.surface.to_local(Vec2::new(page_x, page_y));
        self.windows.bring_to_front(id);
        self.input.start_window_resize(id, direction, start_rect, pointer);
        self.preview = None;
        debug!(id, direction = direction.as_str(), "resize drag started");
        true
    }

    /// Handle pointer down on the surface
    pub fn handle_pointer_down(&mut self, page_x: f32, page_y: f32) -> InputResult {
        let pointer = self.surface.to_local(Vec2::new(page_x, page_y));
        let hit = self
            .windows
            .region_at(pointer, &self.config.frame, self.surface.size());

        let Some((window_id, region)) = hit else {
            return InputResult::Unhandled;
        };

        match region {
            WindowRegion::TitleBar => {
                if !self.start_move_drag(window_id, page_x, page_y) {
                    self.windows.bring_to_front(window_id);
                }
                InputResult::Handled
            }
            WindowRegion::TitleBarControl => InputResult::Control { window_id },
            WindowRegion::Resize(direction) => {
                self.start_resize_drag(window_id, direction, page_x, page_y);
                InputResult::Handled
            }
            WindowRegion::Content => {
                self.windows.bring_to_front(window_id);
                let origin = self
                    .windows
                    .get(window_id)
                    .map(|w| w.rendered_rect(self.surface.size()).position())
                    .unwrap_or_default();
                let local = pointer - origin;
                InputResult::Forward {
                    window_id,
                    local_x: local.x,
                    local_y: local.y,
                }
            }
        }
    }

    /// Handle pointer move
    pub fn handle_pointer_move(&mut self, page_x: f32, page_y: f32) -> InputResult {
        let pointer = self.surface.to_local(Vec2::new(page_x, page_y));

        match *self.input.drag_state() {
            DragState::Idle => InputResult::Unhandled,
            DragState::Moving { window_id, offset } => {
                let rect = match self.windows.get(window_id) {
                    Some(window) => window.rect.with_position(pointer - offset),
                    None => return InputResult::Handled,
                };
                self.windows.set_rect(window_id, rect);

                let preview =
                    SnapPreview::at(pointer, self.surface.size(), self.config.snap_margin);
                if preview.map(|p| p.layout) != self.preview.map(|p| p.layout) {
                    trace!(
                        window_id,
                        layout = preview.map(|p| p.layout.name()),
                        "snap preview changed"
                    );
                }
                self.preview = preview;
                InputResult::Handled
            }
            DragState::Resizing {
                window_id,
                direction,
                start_rect,
                start_pointer,
            } => {
                let delta = pointer - start_pointer;
                let rect = calculate_resize(direction, start_rect, delta, self.config.min_size);
                self.windows.set_rect(window_id, rect);
                InputResult::Handled
            }
        }
    }

    /// Handle pointer up: commit an active snap preview and return to idle
    pub fn handle_pointer_up(&mut self) -> InputResult {
        let ended = self.input.end_drag();
        let preview = self.preview.take();

        match ended {
            DragState::Idle => InputResult::Unhandled,
            DragState::Moving { window_id, .. } => {
                if let Some(preview) = preview {
                    self.apply_snap(window_id, preview.layout);
                }
                InputResult::Handled
            }
            DragState::Resizing { window_id, .. } => {
                trace!(window_id, "resize drag ended");
                InputResult::Handled
            }
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render list for the page
    pub fn frame(&self) -> SurfaceFrame {
        self.surface
            .frame(&self.windows, self.input.is_dragging(), self.preview.as_ref())
    }
}
