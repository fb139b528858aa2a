//! Camera access: device enumeration, the capture thread, and the frame
//! hand-off buffer the rest of the program reads from.

mod capture;
mod capture_loop;
mod device;
mod feed;
mod frame_utils;
mod types;

pub use capture::CameraCapture;
pub use device::list_devices;
pub use feed::{FrameFeed, FrameSource};
pub use frame_utils::mirror_horizontal;
pub use types::{CameraError, CameraInfo, CameraSettings, Frame, Resolution};
