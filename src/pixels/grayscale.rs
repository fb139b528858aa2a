//! RGB to grayscale conversion using ITU-R BT.601 luminance formula.

use crate::camera::Frame;

/// Convert an RGB frame to grayscale using ITU-R BT.601 luminance formula.
///
/// The luminance formula is: Y = 0.299*R + 0.587*G + 0.114*B
///
/// Integer math with coefficients scaled by 1000 keeps floating point out
/// of the per-pixel path.
///
/// # Returns
/// A vector of grayscale values (0-255), one per pixel
pub fn to_grayscale(frame: &Frame) -> Vec<u8> {
    let mut gray = Vec::new();
    to_grayscale_into(frame, &mut gray);
    gray
}

/// Convert an RGB frame to grayscale, reusing an existing buffer.
///
/// # Returns
/// The number of pixels written to the buffer
pub fn to_grayscale_into(frame: &Frame, buffer: &mut Vec<u8>) -> usize {
    buffer.clear();
    buffer.reserve((frame.width * frame.height) as usize);

    for rgb in frame.data.chunks_exact(3) {
        let r = rgb[0] as u32;
        let g = rgb[1] as u32;
        let b = rgb[2] as u32;
        let luminance = (299 * r + 587 * g + 114 * b) / 1000;
        buffer.push(luminance as u8);
    }

    buffer.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_frame(data: Vec<u8>, width: u32, height: u32) -> Frame {
        Frame::from_rgb(data, width, height, 0)
    }

    #[test]
    fn test_grayscale_primaries() {
        // 299 * 255 / 1000 = 76, 587 * 255 / 1000 = 149, 114 * 255 / 1000 = 29
        let frame = make_frame(vec![255, 0, 0, 0, 255, 0, 0, 0, 255], 3, 1);
        assert_eq!(to_grayscale(&frame), vec![76, 149, 29]);
    }

    #[test]
    fn test_grayscale_white_and_black() {
        let frame = make_frame(vec![255, 255, 255, 0, 0, 0], 2, 1);
        assert_eq!(to_grayscale(&frame), vec![255, 0]);
    }

    #[test]
    fn test_grayscale_into_reuses_buffer() {
        let frame = make_frame(vec![10, 10, 10], 1, 1);
        let mut buffer = vec![1, 2, 3, 4];
        let written = to_grayscale_into(&frame, &mut buffer);
        assert_eq!(written, 1);
        assert_eq!(buffer, vec![10]);
    }
}
