//! Settings file handling for motion-keys.
//!
//! Loads settings from `<config dir>/motion-keys/config.toml` or a custom path.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::display::CharSet;
use crate::motion::{DEFAULT_THRESHOLD, WORKING_HEIGHT, WORKING_WIDTH};

/// Settings file structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub keys: KeysConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    #[serde(default)]
    pub device: u32,
    #[serde(default)]
    pub mirror: bool,
    #[serde(default = "default_capture_width")]
    pub width: u32,
    #[serde(default = "default_capture_height")]
    pub height: u32,
    #[serde(default = "default_fps")]
    pub fps: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device: 0,
            mirror: false,
            width: default_capture_width(),
            height: default_capture_height(),
            fps: default_fps(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    #[serde(default = "default_threshold")]
    pub threshold: u8,
    #[serde(default = "default_working_width")]
    pub working_width: u32,
    #[serde(default = "default_working_height")]
    pub working_height: u32,
    #[serde(default = "default_idle_ms")]
    pub idle_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            working_width: default_working_width(),
            working_height: default_working_height(),
            idle_ms: default_idle_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeysConfig {
    /// Key map override file
    #[serde(default)]
    pub file: Option<PathBuf>,
    #[serde(default = "default_hold_ms")]
    pub hold_ms: u64,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            file: None,
            hold_ms: default_hold_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub preview: bool,
    #[serde(default)]
    pub charset: Option<String>,
    #[serde(default)]
    pub invert: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            preview: true,
            charset: None,
            invert: false,
        }
    }
}

impl DisplayConfig {
    /// The configured preview charset; unknown names fall back to the default.
    pub fn charset(&self) -> CharSet {
        match self.charset.as_deref() {
            None => CharSet::default(),
            Some(name) => CharSet::from_name(name).unwrap_or_else(|| {
                log::warn!("unknown charset '{}', using {}", name, CharSet::default().name());
                CharSet::default()
            }),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_capture_width() -> u32 {
    640
}

fn default_capture_height() -> u32 {
    480
}

fn default_fps() -> u32 {
    30
}

fn default_threshold() -> u8 {
    DEFAULT_THRESHOLD
}

fn default_working_width() -> u32 {
    WORKING_WIDTH
}

fn default_working_height() -> u32 {
    WORKING_HEIGHT
}

fn default_idle_ms() -> u64 {
    5
}

fn default_hold_ms() -> u64 {
    50
}

impl Config {
    /// Load settings from a file path.
    /// Returns defaults if the file doesn't exist.
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.clone(),
                source: e,
            })?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Key map file to read: the configured one, or the default location.
    pub fn keymap_path(&self) -> PathBuf {
        self.keys.file.clone().unwrap_or_else(default_keymap_path)
    }

    /// The settings serialized back to TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Errors that can occur when loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("motion-keys"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/motion-keys")
        })
}

/// Get the default settings file path.
pub fn default_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Get the default key map file path.
pub fn default_keymap_path() -> PathBuf {
    config_dir().join("keymap.cfg")
}
