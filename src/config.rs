// src/config.rs
//! Configuration for the demo binary.
//!
//! Every field carries a default matching the reference hardware setup, so
//! a missing or partial configuration file still produces a usable
//! [`Config`]. The file format is JSON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Complete demo configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Display device settings.
    pub display: DisplayConfig,
    /// Font settings.
    pub font: FontConfig,
}

/// The framebuffer device and its fixed resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Framebuffer device node.
    pub device: PathBuf,
    /// Horizontal resolution in pixels.
    pub width: usize,
    /// Vertical resolution in pixels.
    pub height: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            device: PathBuf::from("/dev/fb0"),
            width: 1024,
            height: 600,
        }
    }
}

/// The font file and the size used where the demo does not pick its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Path to a TrueType/OpenType font file.
    pub path: PathBuf,
    /// Default font size in pixels.
    pub size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            path: PathBuf::from("font.ttf"),
            size: 24.0,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_setup() {
        let config = Config::default();
        assert_eq!(config.display.device, PathBuf::from("/dev/fb0"));
        assert_eq!(config.display.width, 1024);
        assert_eq!(config.display.height, 600);
        assert_eq!(config.font.size, 24.0);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "display": { "width": 800 } }"#).unwrap();
        assert_eq!(config.display.width, 800);
        assert_eq!(config.display.height, 600);
        assert_eq!(config.font.path, PathBuf::from("font.ttf"));
    }

    #[test]
    fn unreadable_file_reports_io_error() {
        let err = Config::load("/nonexistent/fbtext.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
