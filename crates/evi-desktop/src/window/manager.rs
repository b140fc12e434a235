//! Window registry: lifecycle, category uniqueness and z-order

use std::collections::BTreeMap;

use tracing::debug;

use super::region::WindowRegion;
use super::window::{Category, Window};
use crate::config::{DesktopConfig, FrameMetrics};
use crate::math::{Rect, Size, Vec2};
use crate::types::{WindowId, ZIndex};

/// Owns every open window plus the id generator and the z-order counter
///
/// The counter only ever grows: each focus takes `counter + 1`, so the
/// most recently focused window always holds the unique maximum.
#[derive(Clone, Debug)]
pub struct WindowManager {
    windows: BTreeMap<WindowId, Window>,
    next_id: WindowId,
    z_counter: ZIndex,
    spawn_count: u32,
    default_size: Size,
    cascade_origin: Vec2,
    cascade_step: f32,
    cascade_cycle: u32,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// Create an empty registry with the default configuration
    pub fn new() -> Self {
        Self::with_config(&DesktopConfig::default())
    }

    /// Create an empty registry using the spawn settings of `config`
    pub fn with_config(config: &DesktopConfig) -> Self {
        Self {
            windows: BTreeMap::new(),
            next_id: 1,
            z_counter: ZIndex::from(config.base_z_index),
            spawn_count: 0,
            default_size: config.default_size,
            cascade_origin: config.cascade_origin,
            cascade_step: config.cascade_step,
            cascade_cycle: config.cascade_cycle.max(1),
        }
    }

    /// Open a window for `category`, or focus the one already open
    ///
    /// Returns the id of the created or focused window.
    pub fn open(&mut self, category: impl Into<Category>, title: impl Into<String>) -> WindowId {
        let category = category.into();

        if let Some(existing) = self.find_by_category(category.as_str()) {
            let id = existing.id;
            debug!(id, %category, "category already open, focusing");
            self.bring_to_front(id);
            return id;
        }

        let id = self.next_id;
        self.next_id += 1;

        let step = (self.spawn_count % self.cascade_cycle) as f32 * self.cascade_step;
        self.spawn_count = self.spawn_count.wrapping_add(1);
        let position = self.cascade_origin + Vec2::new(step, step);

        self.z_counter += 1;
        let window = Window {
            id,
            category,
            title: title.into(),
            rect: Rect::from_pos_size(position, self.default_size),
            maximized: false,
            z_index: self.z_counter,
        };
        debug!(id, category = %window.category, z = window.z_index, "window opened");
        self.windows.insert(id, window);

        id
    }

    /// Remove a window; returns false if it was not open
    pub fn close(&mut self, id: WindowId) -> bool {
        let removed = self.windows.remove(&id);
        if let Some(window) = &removed {
            debug!(id, category = %window.category, "window closed");
        }
        removed.is_some()
    }

    /// Give a window the next z-order value; returns false if it is not open
    pub fn bring_to_front(&mut self, id: WindowId) -> bool {
        match self.windows.get_mut(&id) {
            Some(window) => {
                self.z_counter += 1;
                window.z_index = self.z_counter;
                true
            }
            None => false,
        }
    }

    /// Flip the maximized flag and focus the window
    pub fn toggle_maximize(&mut self, id: WindowId) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.maximized = !window.maximized;
            debug!(id, maximized = window.maximized, "maximize toggled");
            self.bring_to_front(id);
        }
    }

    /// Get a window by ID
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    /// Find the open window hosting `category`
    pub fn find_by_category(&self, category: &str) -> Option<&Window> {
        self.windows.values().find(|w| w.category.as_str() == category)
    }

    /// Whether a window for `category` is open
    pub fn is_open(&self, category: &str) -> bool {
        self.find_by_category(category).is_some()
    }

    /// All windows in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    /// Windows sorted by z-order (lowest first, so the last one paints on top)
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// The front-most window
    pub fn focused(&self) -> Option<&Window> {
        self.windows.values().max_by_key(|w| w.z_index)
    }

    /// ID of the front-most window
    pub fn focused_id(&self) -> Option<WindowId> {
        self.focused().map(|w| w.id)
    }

    /// Number of open windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// Whether no window is open
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Current value of the z-order counter
    pub fn z_counter(&self) -> ZIndex {
        self.z_counter
    }

    /// Topmost window region under a surface-local point
    pub fn region_at(
        &self,
        point: Vec2,
        frame: &FrameMetrics,
        surface: Size,
    ) -> Option<(WindowId, WindowRegion)> {
        self.windows_by_z()
            .into_iter()
            .rev()
            .find_map(|w| w.region_at(point, frame, surface).map(|region| (w.id, region)))
    }

    /// Overwrite free-form geometry; returns false if the window is not open
    pub(crate) fn set_rect(&mut self, id: WindowId, rect: Rect) -> bool {
        match self.windows.get_mut(&id) {
            Some(window) => {
                window.rect = rect;
                true
            }
            None => false,
        }
    }

    /// Set the maximized flag; returns false if the window is not open
    pub(crate) fn set_maximized(&mut self, id: WindowId, maximized: bool) -> bool {
        match self.windows.get_mut(&id) {
            Some(window) => {
                window.maximized = maximized;
                true
            }
            None => false,
        }
    }
}
