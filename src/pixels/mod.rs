//! Pixel-level image helpers shared by motion detection and the preview.

mod downsample;
mod grayscale;

pub use downsample::{downsample, downsample_into};
pub use grayscale::{to_grayscale, to_grayscale_into};
