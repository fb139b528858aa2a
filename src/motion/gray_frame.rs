//! Downsampled grayscale working frames used for change detection.

use crate::camera::Frame;
use crate::pixels::{downsample, to_grayscale};

/// Default working frame width.
pub const WORKING_WIDTH: u32 = 160;
/// Default working frame height.
pub const WORKING_HEIGHT: u32 = 120;

/// A single-channel frame, one brightness byte per pixel in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayFrame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl GrayFrame {
    /// Wrap existing pixels. Returns `None` if the length doesn't match.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        (pixels.len() == (width as usize) * (height as usize)).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// A frame with every pixel set to `value`.
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self {
            width,
            height,
            pixels: vec![value; (width as usize) * (height as usize)],
        }
    }

    /// Grayscale and downsample a captured RGB frame to `width` x `height`.
    ///
    /// Returns `None` for frames whose data doesn't cover their stated size.
    pub fn from_frame(frame: &Frame, width: u32, height: u32) -> Option<Self> {
        if !frame.is_complete() || width == 0 || height == 0 {
            return None;
        }
        let gray = to_grayscale(frame);
        let pixels = downsample(&gray, frame.width, frame.height, width, height);
        Self::new(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// Fill the `w` x `h` rectangle at `(x, y)`, clipped to the frame.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, value: u8) {
        for py in y..(y + h).min(self.height) {
            for px in x..(x + w).min(self.width) {
                self.pixels[(py * self.width + px) as usize] = value;
            }
        }
    }

    pub fn same_size(&self, other: &GrayFrame) -> bool {
        self.width == other.width && self.height == other.height
    }
}
