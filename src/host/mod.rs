//! Traits for the windowing/graphics host this crate orchestrates.
//!
//! The shell never creates OS windows or issues draw calls itself; it talks
//! to whatever implements [`WindowHost`] and [`RenderContext`]. The
//! [`headless`] module provides a recording implementation for tests and
//! offline layout inspection.

pub mod headless;

use std::fmt;
use std::io;

use crate::geometry::{Display, Vec2};

/// Window management and display enumeration, as provided by the platform.
///
/// The host owns a pre-existing default window; layout resolution reuses it
/// for the first planned window, which is why `default_window` is separate
/// from `create_window`.
pub trait WindowHost {
    type WindowId: Copy + Eq + Ord + fmt::Debug;

    /// Physical displays, in the host's enumeration order.
    fn displays(&mut self) -> Vec<Display>;

    fn default_window(&mut self) -> Self::WindowId;
    fn create_window(&mut self) -> Self::WindowId;

    fn set_position(&mut self, window: Self::WindowId, pos: Vec2);
    fn set_size(&mut self, window: Self::WindowId, size: Vec2);
    fn set_borderless(&mut self, window: Self::WindowId);
    fn enter_fullscreen(&mut self, window: Self::WindowId);

    fn show(&mut self, window: Self::WindowId);
    fn hide(&mut self, window: Self::WindowId);
    fn is_hidden(&mut self, window: Self::WindowId) -> bool;

    fn set_cursor_visible(&mut self, visible: bool);

    /// Ask the host to end its event loop.
    fn request_quit(&mut self);

    /// Resolve a named asset (e.g. a config file) to raw bytes.
    fn load_asset(&mut self, name: &str) -> io::Result<Vec<u8>>;
}

/// Rendering primitives available while the host is drawing one window.
pub trait RenderContext {
    fn clear(&mut self);
    fn push_transform(&mut self);
    fn pop_transform(&mut self);
    fn scale(&mut self, factor: f32);
    fn translate(&mut self, offset: Vec2);
    fn draw_text(&mut self, text: &str, pos: Vec2);
}

impl<T: RenderContext + ?Sized> RenderContext for &mut T {
    fn clear(&mut self) {
        (**self).clear()
    }

    fn push_transform(&mut self) {
        (**self).push_transform()
    }

    fn pop_transform(&mut self) {
        (**self).pop_transform()
    }

    fn scale(&mut self, factor: f32) {
        (**self).scale(factor)
    }

    fn translate(&mut self, offset: Vec2) {
        (**self).translate(offset)
    }

    fn draw_text(&mut self, text: &str, pos: Vec2) {
        (**self).draw_text(text, pos)
    }
}
