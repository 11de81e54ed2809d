//! multiwin: a declarative multi-window layout shell.
//!
//! Reads a JSON configuration describing how application windows are placed
//! across one or more displays (span, grid, or explicit rectangles), realizes
//! that layout on a pluggable windowing host, and fans per-frame and input
//! events out to application-registered signal listeners with per-window draw
//! transforms applied along the way.

pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod event_loop;
pub mod events;
pub mod geometry;
pub mod host;
pub mod keybindings;
pub mod layout;
pub mod logging;
pub mod registry;
pub mod shell;
pub mod signals;
pub mod state;

/// Build-time embedded assets (see `build.rs`).
pub mod embedded {
    include!(concat!(env!("OUT_DIR"), "/generated_config.rs"));
}

pub use config::{Config, ConfigError};
pub use geometry::{Bounds, Display, Vec2};
pub use layout::{LayoutMode, LayoutParams, WindowPlan, WindowRecord, PARAMS_WINDOW_INDEX};
pub use registry::WindowRegistry;
pub use shell::{AppShell, Context};
pub use signals::{Signal, SignalBus};
