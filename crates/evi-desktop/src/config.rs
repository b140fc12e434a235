//! Desktop configuration
//!
//! Every tunable of the window manager lives here. The defaults match the
//! stock desktop; hosts may override any subset through JSON.

use serde::{Deserialize, Serialize};

use crate::error::{DesktopError, DesktopResult};
use crate::math::{Size, Vec2};

/// Frame metrics used for hit testing window chrome
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameMetrics {
    /// Height of the draggable title bar
    pub title_bar_height: f32,
    /// Thickness of the resize handle band straddling each edge
    pub resize_handle_size: f32,
    /// Width of the button strip at the right end of the title bar
    pub controls_width: f32,
}

impl Default for FrameMetrics {
    fn default() -> Self {
        Self {
            title_bar_height: 32.0,
            resize_handle_size: 8.0,
            controls_width: 96.0,
        }
    }
}

/// Window manager configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Distance from a surface edge within which a move triggers a snap
    pub snap_margin: f32,
    /// Smallest size a resize may produce
    pub min_size: Size,
    /// Size of newly opened windows
    pub default_size: Size,
    /// Position of the first spawned window
    pub cascade_origin: Vec2,
    /// Offset applied on both axes for each successive spawn
    pub cascade_step: f32,
    /// Number of spawns before the cascade wraps back to the origin
    pub cascade_cycle: u32,
    /// Value of the z-order counter before any window is focused
    pub base_z_index: u32,
    /// Delay between the pointer leaving the snap menu and the menu closing
    pub menu_close_delay_ms: f64,
    /// Window chrome metrics
    pub frame: FrameMetrics,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            snap_margin: 20.0,
            min_size: Size::new(300.0, 200.0),
            default_size: Size::new(700.0, 550.0),
            cascade_origin: Vec2::new(50.0, 50.0),
            cascade_step: 30.0,
            cascade_cycle: 8,
            base_z_index: 10,
            menu_close_delay_ms: 300.0,
            frame: FrameMetrics::default(),
        }
    }
}

impl DesktopConfig {
    /// Parse a JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let config: DesktopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot work with
    pub fn validate(&self) -> DesktopResult<()> {
        if self.snap_margin < 0.0 {
            return Err(DesktopError::InvalidConfig {
                field: "snap_margin",
                reason: "must not be negative",
            });
        }
        if self.min_size.width <= 0.0 || self.min_size.height <= 0.0 {
            return Err(DesktopError::InvalidConfig {
                field: "min_size",
                reason: "must be positive",
            });
        }
        if !self.default_size.fits(self.min_size) {
            return Err(DesktopError::InvalidConfig {
                field: "default_size",
                reason: "must be at least min_size",
            });
        }
        if self.cascade_cycle == 0 {
            return Err(DesktopError::InvalidConfig {
                field: "cascade_cycle",
                reason: "must be at least 1",
            });
        }
        if self.menu_close_delay_ms < 0.0 {
            return Err(DesktopError::InvalidConfig {
                field: "menu_close_delay_ms",
                reason: "must not be negative",
            });
        }
        Ok(())
    }
}
