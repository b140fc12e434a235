//! WASM bindings for the page
//!
//! Thin wrapper over [`DesktopEngine`]. Structured results cross the
//! boundary as JSON strings; names (layouts, resize handles) as plain strings.

use wasm_bindgen::prelude::*;

use crate::config::DesktopConfig;
use crate::engine::DesktopEngine;
use crate::error::DesktopError;
use crate::input::ResizeDirection;
use crate::snap::SnapLayout;
use crate::types::WindowId;

fn to_js(err: DesktopError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| to_js(e.into()))
}

/// Desktop engine handle owned by the page
#[wasm_bindgen]
pub struct DesktopController {
    engine: DesktopEngine,
}

impl Default for DesktopController {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl DesktopController {
    #[wasm_bindgen(constructor)]
    pub fn new() -> DesktopController {
        DesktopController {
            engine: DesktopEngine::new(),
        }
    }

    /// Create a controller from a JSON configuration override
    pub fn with_config(json: &str) -> Result<DesktopController, JsValue> {
        let config = DesktopConfig::from_json(json).map_err(to_js)?;
        Ok(DesktopController {
            engine: DesktopEngine::with_config(config),
        })
    }

    /// Report the surface's page-space client box (call on mount and resize)
    pub fn set_surface(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.engine.set_surface(x, y, width, height);
    }

    pub fn open_window(&mut self, category: &str, title: &str) -> WindowId {
        self.engine.open_window(category, title)
    }

    pub fn close_window(&mut self, id: WindowId) {
        self.engine.close_window(id);
    }

    pub fn focus_window(&mut self, id: WindowId) {
        self.engine.focus_window(id);
    }

    pub fn toggle_maximize(&mut self, id: WindowId) {
        self.engine.toggle_maximize(id);
    }

    pub fn is_open(&self, category: &str) -> bool {
        self.engine.is_open(category)
    }

    pub fn apply_snap(&mut self, id: WindowId, layout: &str) -> Result<(), JsValue> {
        self.engine.apply_snap_by_name(id, layout).map_err(to_js)
    }

    pub fn start_move_drag(&mut self, id: WindowId, x: f32, y: f32) -> bool {
        self.engine.start_move_drag(id, x, y)
    }

    pub fn start_resize_drag(
        &mut self,
        id: WindowId,
        direction: &str,
        x: f32,
        y: f32,
    ) -> Result<bool, JsValue> {
        let direction: ResizeDirection = direction.parse().map_err(to_js)?;
        Ok(self.engine.start_resize_drag(id, direction, x, y))
    }

    /// Pointer down on the surface; returns an `InputResult` as JSON
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Result<String, JsValue> {
        let result = self.engine.handle_pointer_down(x, y);
        to_json(&result)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> Result<String, JsValue> {
        let result = self.engine.handle_pointer_move(x, y);
        to_json(&result)
    }

    pub fn pointer_up(&mut self) -> Result<String, JsValue> {
        let result = self.engine.handle_pointer_up();
        to_json(&result)
    }

    pub fn menu_enter(&mut self, id: WindowId) {
        self.engine.menu_enter(id);
    }

    pub fn menu_leave(&mut self) {
        self.engine.menu_leave(js_sys::Date::now());
    }

    pub fn menu_select(&mut self, layout: &str) -> Result<(), JsValue> {
        let layout: SnapLayout = layout.parse().map_err(to_js)?;
        self.engine.menu_select(layout);
        Ok(())
    }

    /// Window the snap menu is open for, if any
    pub fn menu_window(&self) -> Option<WindowId> {
        self.engine.menu.open_for()
    }

    pub fn global_pointer_down(&mut self, inside_menu: bool) {
        self.engine.handle_global_pointer_down(inside_menu);
    }

    /// Fire due timers; returns true if the page should re-render the menu
    pub fn tick(&mut self) -> bool {
        self.engine.tick(js_sys::Date::now())
    }

    /// Drop drag, preview and menu timer state (component unmount)
    pub fn teardown(&mut self) {
        self.engine.teardown();
    }

    /// Render list as JSON
    pub fn frame(&self) -> Result<String, JsValue> {
        to_json(&self.engine.frame())
    }

    /// Names of the snap menu targets as JSON
    pub fn menu_layouts() -> Result<String, JsValue> {
        let names: Vec<&str> = SnapLayout::MENU.iter().map(|l| l.name()).collect();
        to_json(&names)
    }
}
