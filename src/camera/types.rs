//! Camera types and data structures.

use std::fmt;

use thiserror::Error;

/// Information about an available camera device.
#[derive(Debug, Clone)]
pub struct CameraInfo {
    /// Device index for selection
    pub index: u32,
    /// Human-readable device name
    pub name: String,
    /// Device description
    pub description: String,
}

impl fmt::Display for CameraInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.index, self.name, self.description)
    }
}

/// Camera resolution settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Medium resolution (640x480), what the controller asks the device for
    pub const MEDIUM: Resolution = Resolution {
        width: 640,
        height: 480,
    };
}

impl Default for Resolution {
    fn default() -> Self {
        Self::MEDIUM
    }
}

/// A captured full-resolution RGB camera frame.
///
/// Frames are immutable snapshots. `sequence` increases by one for every
/// frame the capture thread publishes, so a reader can tell whether the
/// buffer holds something it has not seen yet.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Raw pixel data in RGB order, 3 bytes per pixel
    pub data: Vec<u8>,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Publication order assigned by the capture thread
    pub sequence: u64,
}

impl Frame {
    /// Bytes per pixel of the RGB layout.
    pub const BYTES_PER_PIXEL: usize = 3;

    /// Build a frame from raw RGB data.
    pub fn from_rgb(data: Vec<u8>, width: u32, height: u32, sequence: u64) -> Self {
        Self {
            data,
            width,
            height,
            sequence,
        }
    }

    /// True if the data buffer covers every pixel.
    pub fn is_complete(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.data.len() >= (self.width * self.height) as usize * Self::BYTES_PER_PIXEL
    }
}

/// Settings for camera capture.
#[derive(Debug, Clone)]
pub struct CameraSettings {
    /// Camera device index
    pub device_index: u32,
    /// Capture resolution
    pub resolution: Resolution,
    /// Target FPS (actual may vary)
    pub fps: u32,
    /// Mirror horizontally (selfie view); off keeps the camera's own layout
    pub mirror: bool,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            device_index: 0,
            resolution: Resolution::default(),
            fps: 30,
            mirror: false,
        }
    }
}

/// Why the camera could not be listed, opened, or streamed.
#[derive(Debug, Error)]
pub enum CameraError {
    #[error("Failed to query cameras: {0}")]
    QueryFailed(String),
    #[error("Failed to open camera: {0}")]
    OpenFailed(String),
    /// The OS refused access (macOS asks once per terminal app).
    #[error("Camera permission denied. On macOS, allow your terminal under Privacy & Security > Camera")]
    PermissionDenied,
    #[error("No camera at index {0}. Run 'motion-keys list-cameras' to see what is connected")]
    DeviceNotFound(u32),
    #[error("Camera stream failed: {0}")]
    StreamFailed(String),
    #[error("Capture is already running")]
    AlreadyRunning,
}
