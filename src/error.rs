//! Top-level errors surfaced by the binary.

use std::path::PathBuf;
use thiserror::Error;

use crate::camera::CameraError;
use crate::config::ConfigError;

/// Anything that stops `motion-keys` from starting or finishing cleanly.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Camera(#[from] CameraError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Config file already exists: {}", .0.display())]
    ConfigExists(PathBuf),

    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Terminal setup or thread spawn failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to install Ctrl+C handler: {0}")]
    Signal(#[from] ctrlc::Error),

    #[error("Motion loop thread panicked")]
    MotionThread,
}
