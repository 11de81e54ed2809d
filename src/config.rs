//! Application configuration: JSON loading, validation and typed access.
//!
//! Loading is two-stage: serde deserializes the raw document, then semantic
//! validation turns it into a [`Config`] with a typed [`LayoutParams`].
//! I/O failures, malformed JSON and semantically invalid documents are kept
//! apart in [`ConfigError`] so startup can log exactly what went wrong.
//! Once built, a `Config` is immutable; runtime toggles live in
//! [`crate::state::RuntimeState`].

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::geometry::Vec2;
use crate::layout::{LayoutParams, WindowRect};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config source: {0}")]
    Load(#[from] io::Error),
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown layout mode {0:?} (expected \"span\", \"custom\" or \"grid\")")]
    UnknownMode(String),
    #[error("app_scale must be positive, got {0}")]
    NonPositiveScale(f32),
}

/// Raw JSON shape. Field names are snake_case; `appScale` and `cols` are
/// accepted as aliases for compatibility with hand-written configs.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    mode: String,
    #[serde(default = "default_one")]
    rows: u32,
    #[serde(default = "default_one", alias = "cols")]
    columns: u32,
    #[serde(default = "default_screen_width")]
    screen_width: f32,
    #[serde(default = "default_screen_height")]
    screen_height: f32,
    #[serde(default)]
    windows: Vec<RawWindowRect>,
    #[serde(default = "default_scale", alias = "appScale")]
    app_scale: f32,
    #[serde(default = "default_true")]
    show_cursor: bool,
    #[serde(default)]
    fullscreen: bool,
    #[serde(default = "default_true")]
    default_key_handlers: bool,
    #[serde(default)]
    show_params: bool,
    #[serde(default)]
    params_x: f32,
    #[serde(default)]
    params_y: f32,
}

#[derive(Debug, Deserialize)]
struct RawWindowRect {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

fn default_one() -> u32 {
    1
}

fn default_screen_width() -> f32 {
    960.0
}

fn default_screen_height() -> f32 {
    540.0
}

fn default_scale() -> f32 {
    1.0
}

fn default_true() -> bool {
    true
}

/// Validated, immutable application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub layout: LayoutParams,
    pub app_scale: f32,
    pub show_cursor: bool,
    pub fullscreen: bool,
    pub default_key_handlers: bool,
    pub show_params: bool,
    pub params_position: Vec2,
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        Self::validate(raw)
    }

    pub fn from_json_bytes(json: &[u8]) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_slice(json)?;
        Self::validate(raw)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let bytes = fs::read(path)?;
        Self::from_json_bytes(&bytes)
    }

    /// The compiled-in fallback configuration (see `assets/default_config.json`).
    pub fn embedded_default() -> Result<Self, ConfigError> {
        Self::from_json_bytes(crate::embedded::EMBEDDED_DEFAULT_CONFIG.content)
    }

    fn validate(raw: RawConfig) -> Result<Self, ConfigError> {
        let layout = match raw.mode.as_str() {
            "span" => LayoutParams::SpanDisplays,
            "custom" => LayoutParams::CustomRects(
                raw.windows
                    .iter()
                    .map(|r| WindowRect {
                        x: r.x,
                        y: r.y,
                        w: r.w,
                        h: r.h,
                    })
                    .collect(),
            ),
            "grid" => LayoutParams::Grid {
                rows: raw.rows,
                columns: raw.columns,
                cell_width: raw.screen_width,
                cell_height: raw.screen_height,
            },
            other => return Err(ConfigError::UnknownMode(other.to_string())),
        };
        if raw.app_scale <= 0.0 {
            return Err(ConfigError::NonPositiveScale(raw.app_scale));
        }
        Ok(Config {
            layout,
            app_scale: raw.app_scale,
            show_cursor: raw.show_cursor,
            fullscreen: raw.fullscreen,
            default_key_handlers: raw.default_key_handlers,
            show_params: raw.show_params,
            params_position: Vec2::new(raw.params_x, raw.params_y),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutMode;
    use indoc::indoc;

    #[test]
    fn grid_config_with_defaults() {
        let cfg = Config::from_json_str(indoc! {r#"
            {
                "mode": "grid",
                "rows": 2,
                "cols": 2
            }
        "#})
        .unwrap();
        assert_eq!(
            cfg.layout,
            LayoutParams::Grid {
                rows: 2,
                columns: 2,
                cell_width: 960.0,
                cell_height: 540.0
            }
        );
        assert_eq!(cfg.app_scale, 1.0);
        assert!(cfg.show_cursor);
        assert!(cfg.default_key_handlers);
        assert!(!cfg.fullscreen);
        assert!(!cfg.show_params);
    }

    #[test]
    fn custom_config_with_alias_scale() {
        let cfg = Config::from_json_str(indoc! {r#"
            {
                "mode": "custom",
                "windows": [
                    { "x": 0, "y": 0, "w": 800, "h": 600 },
                    { "x": 800, "y": 0, "w": 400, "h": 600 }
                ],
                "appScale": 2.0,
                "show_params": true,
                "params_x": 10,
                "params_y": 20
            }
        "#})
        .unwrap();
        assert_eq!(cfg.layout.mode(), LayoutMode::CustomRects);
        assert_eq!(cfg.app_scale, 2.0);
        assert!(cfg.show_params);
        assert_eq!(cfg.params_position, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn span_config_minimal() {
        let cfg = Config::from_json_str(r#"{ "mode": "span", "fullscreen": true }"#).unwrap();
        assert_eq!(cfg.layout, LayoutParams::SpanDisplays);
        assert!(cfg.fullscreen);
    }

    #[test]
    fn unknown_mode_is_a_validation_error() {
        let err = Config::from_json_str(r#"{ "mode": "mosaic" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownMode(m) if m == "mosaic"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Config::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_scale_rejected() {
        let err = Config::from_json_str(r#"{ "mode": "span", "app_scale": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositiveScale(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.json");
        std::fs::write(&path, r#"{ "mode": "grid" }"#).unwrap();
        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.layout.mode(), LayoutMode::Grid);

        let err = Config::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[test]
    fn embedded_default_parses() {
        let cfg = Config::embedded_default().unwrap();
        assert_eq!(cfg.layout.mode(), LayoutMode::Grid);
    }
}
