//! Shared crate-wide constants.

use crate::geometry::Vec2;

/// Fixed size of the debug parameter window, in screen pixels.
pub const PARAMS_WINDOW_SIZE: Vec2 = Vec2 { x: 500.0, y: 300.0 };

/// Inset of the parameter-window overlay text from the window edges.
pub const PARAMS_OVERLAY_MARGIN: f32 = 15.0;
