//! Window manager and snap-layout engine for the Evicamp desktop
//!
//! This crate provides the in-page desktop that hosts the business modules:
//! - Window registry (open, close, focus, z-order, one window per category)
//! - Move/resize drag state machine with minimum-size clamping
//! - Edge/corner snap preview and named snap layouts
//! - Hover snap menu with a deterministic close timer
//! - The desktop surface coordinate frame and render list
//!
//! ## Architecture
//!
//! - [`math`]: Core geometry types (`Vec2`, `Size`, `Rect`)
//! - [`window`]: Window entities and the [`WindowManager`] registry
//! - [`input`]: Drag state machine and resize geometry
//! - [`snap`]: Snap layouts, proximity detection and snap commits
//! - [`menu`]: Hover snap menu timing
//! - [`surface`]: Surface client box and render frames
//!
//! ## Example
//!
//! ```rust
//! use evi_desktop::{DesktopEngine, SnapLayout};
//!
//! let mut engine = DesktopEngine::new();
//! engine.set_surface(0.0, 0.0, 1280.0, 720.0);
//!
//! let sales = engine.open_window("sales", "Sales");
//! engine.apply_snap(sales, SnapLayout::Left);
//!
//! let frame = engine.frame();
//! assert_eq!(frame.windows.len(), 1);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Time Abstraction**: The menu timer takes the current time as an argument
//! 3. **Total Operations**: Unknown window ids are no-ops, never errors

pub mod config;
pub mod input;
pub mod math;
pub mod menu;
pub mod snap;
pub mod surface;
pub mod window;

mod engine;
mod error;
mod types;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use config::{DesktopConfig, FrameMetrics};
pub use engine::DesktopEngine;
pub use error::{DesktopError, DesktopResult};
pub use input::{DragState, InputResult, InputRouter, ResizeDirection};
pub use math::{Rect, Size, Vec2};
pub use menu::SnapMenu;
pub use snap::{SnapLayout, SnapPreview};
pub use surface::{DesktopSurface, OverlayFrame, SurfaceFrame, WindowFrame};
pub use types::{WindowId, ZIndex};
pub use window::{Category, Window, WindowManager, WindowRegion};
