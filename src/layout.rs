//! Window-layout resolution.
//!
//! Translates a layout mode plus its parameters into an ordered sequence of
//! [`WindowPlan`]s: concrete screen placement for each window and the
//! [`WindowRecord`] that window carries for draw-time coordinate transforms.
//!
//! The first plan in the sequence is always realized on the host's
//! pre-existing default window; all later plans get freshly created windows.
//! The debug parameter window is not part of any layout mode and is planned
//! separately by the shell, after resolution.

use crate::geometry::{Bounds, Display, Vec2};

/// Sentinel index carried by the debug parameter window's record.
pub const PARAMS_WINDOW_INDEX: i32 = -1;

/// Vertical shift applied to windowed, non-first-row grid cells on macOS to
/// account for the menu-bar/titlebar strip. Logical units.
#[cfg(target_os = "macos")]
const MACOS_TITLEBAR_OFFSET: f32 = 23.0;

/// Which resolution algorithm runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    SpanDisplays,
    CustomRects,
    Grid,
}

/// One explicit window rectangle in logical units, for custom layouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// A layout mode together with its per-mode parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutParams {
    SpanDisplays,
    CustomRects(Vec<WindowRect>),
    Grid {
        rows: u32,
        columns: u32,
        cell_width: f32,
        cell_height: f32,
    },
}

impl LayoutParams {
    pub fn mode(&self) -> LayoutMode {
        match self {
            LayoutParams::SpanDisplays => LayoutMode::SpanDisplays,
            LayoutParams::CustomRects(_) => LayoutMode::CustomRects,
            LayoutParams::Grid { .. } => LayoutMode::Grid,
        }
    }
}

/// Per-window draw-transform record, attached to a window at creation and
/// looked up on every draw call.
///
/// Content windows carry indices starting at 0 in resolution order; the
/// parameter window carries [`PARAMS_WINDOW_INDEX`] with empty bounds and
/// zero translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowRecord {
    pub index: i32,
    pub bounds: Bounds,
    pub translation: Vec2,
}

impl WindowRecord {
    pub fn new(index: i32, bounds: Bounds, translation: Vec2) -> Self {
        Self {
            index,
            bounds,
            translation,
        }
    }

    /// The record carried by the debug parameter window.
    pub fn params() -> Self {
        Self::new(PARAMS_WINDOW_INDEX, Bounds::ZERO, Vec2::ZERO)
    }

    pub fn is_params(&self) -> bool {
        self.index == PARAMS_WINDOW_INDEX
    }
}

/// Everything needed to realize one window on the host.
///
/// `position` and `size` are screen pixels (logical units already multiplied
/// by the render scale, except in span mode where displays report physical
/// pixels directly). All planned windows are borderless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowPlan {
    pub record: WindowRecord,
    pub position: Vec2,
    pub size: Vec2,
    pub fullscreen: bool,
}

/// Resolve `params` against the enumerated `displays` into an ordered window
/// plan. Zero displays, zero rectangles or a zero-row grid yield an empty
/// plan; the caller decides what a windowless application means.
pub fn resolve(
    params: &LayoutParams,
    displays: &[Display],
    scale: f32,
    fullscreen: bool,
) -> Vec<WindowPlan> {
    match params {
        LayoutParams::SpanDisplays => resolve_span(displays, fullscreen),
        LayoutParams::CustomRects(rects) => resolve_custom(rects, scale, fullscreen),
        LayoutParams::Grid {
            rows,
            columns,
            cell_width,
            cell_height,
        } => resolve_grid(*rows, *columns, *cell_width, *cell_height, scale, fullscreen),
    }
}

/// One borderless window per display, matching the display's native bounds.
/// Displays report physical pixels, so the render scale does not apply here.
fn resolve_span(displays: &[Display], fullscreen: bool) -> Vec<WindowPlan> {
    displays
        .iter()
        .enumerate()
        .map(|(index, display)| WindowPlan {
            record: WindowRecord::new(index as i32, display.bounds, Vec2::ZERO),
            position: display.bounds.upper_left(),
            size: display.bounds.size(),
            fullscreen,
        })
        .collect()
}

/// One window per configured rectangle, in configuration order. The
/// translation negates the rectangle origin so content renders as if the
/// window were a viewport into one large virtual canvas.
fn resolve_custom(rects: &[WindowRect], scale: f32, fullscreen: bool) -> Vec<WindowPlan> {
    rects
        .iter()
        .enumerate()
        .map(|(index, r)| WindowPlan {
            record: WindowRecord::new(
                index as i32,
                Bounds::new(r.x, r.y, r.x + r.w, r.y + r.h),
                Vec2::new(-r.x, -r.y),
            ),
            position: Vec2::new(r.x * scale, r.y * scale),
            size: Vec2::new(r.w * scale, r.h * scale),
            fullscreen,
        })
        .collect()
}

/// Rows × columns windows in row-major order with sequentially assigned
/// indices. Record bounds hold `(x, y, cell_width, cell_height)` — absolute
/// cell dimensions, not a lower-right corner. The encoding differs from
/// custom mode on purpose; translation depends only on the origin, so it has
/// no observable effect and stays as-is.
fn resolve_grid(
    rows: u32,
    columns: u32,
    cell_width: f32,
    cell_height: f32,
    scale: f32,
    fullscreen: bool,
) -> Vec<WindowPlan> {
    let size = Vec2::new(cell_width * scale, cell_height * scale);
    let mut plans = Vec::with_capacity((rows * columns) as usize);
    let mut index = 0;
    for r in 0..rows {
        for c in 0..columns {
            let x = c as f32 * cell_width;
            #[allow(unused_mut)]
            let mut y = r as f32 * cell_height;
            // Screen placement uses the uncorrected origin.
            let position = Vec2::new(x * scale, y * scale);
            #[cfg(target_os = "macos")]
            if !fullscreen && r != 0 {
                y += MACOS_TITLEBAR_OFFSET;
            }
            plans.push(WindowPlan {
                record: WindowRecord::new(
                    index,
                    Bounds::new(x, y, cell_width, cell_height),
                    Vec2::new(-x, -y),
                ),
                position,
                size,
                fullscreen,
            });
            index += 1;
        }
    }
    plans
}
