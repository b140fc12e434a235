//! Core type definitions for the desktop window manager
//!
//! This module centralizes type aliases used throughout the crate
//! for consistency and discoverability.

/// Unique window identifier
///
/// Windows are identified by a monotonically increasing 64-bit integer.
/// Window IDs are never reused within a `WindowManager` instance.
pub type WindowId = u64;

/// Stacking order value
///
/// Drawn from the registry's monotonic counter; a larger value paints later.
pub type ZIndex = u64;
