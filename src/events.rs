//! Input event vocabulary forwarded through the signal bus.
//!
//! Keyboard events reuse `crossterm`'s `KeyEvent`/`KeyCode`/`KeyModifiers`
//! types directly; pointer and file-drop events carry graphical-space
//! coordinates and get their own small types here.

use std::path::PathBuf;

use crate::geometry::Vec2;

pub use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A pointer event in window-local coordinates.
///
/// `button` is `None` for pure motion; `wheel` is non-zero only for wheel
/// events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub pos: Vec2,
    pub button: Option<MouseButton>,
    pub wheel: Vec2,
}

impl MouseEvent {
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            button: None,
            wheel: Vec2::ZERO,
        }
    }

    pub fn button(pos: Vec2, button: MouseButton) -> Self {
        Self {
            pos,
            button: Some(button),
            wheel: Vec2::ZERO,
        }
    }

    pub fn wheel(pos: Vec2, wheel: Vec2) -> Self {
        Self {
            pos,
            button: None,
            wheel,
        }
    }
}

/// Files dropped onto a window, with the drop position.
#[derive(Debug, Clone, PartialEq)]
pub struct FileDropEvent {
    pub pos: Vec2,
    pub paths: Vec<PathBuf>,
}
