//! Frame conversion and transformation utilities.

use nokhwa::pixel_format::RgbFormat;

/// Decoded RGB pixels with their dimensions.
pub struct RgbImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Decode a nokhwa buffer to packed RGB.
///
/// Handles the camera's native format (MJPEG, YUYV, NV12, etc.) through
/// nokhwa's `decode_image`. Returns `None` if decoding fails, which the
/// capture loop treats as a dropped frame.
pub fn convert_to_rgb(buffer: &nokhwa::Buffer) -> Option<RgbImage> {
    let decoded = buffer.decode_image::<RgbFormat>().ok()?;
    let resolution = buffer.resolution();

    Some(RgbImage {
        data: decoded.into_raw(),
        width: resolution.width(),
        height: resolution.height(),
    })
}

/// Mirror packed RGB data horizontally (flip left-right).
pub fn mirror_horizontal(data: &mut [u8], width: u32, height: u32) {
    let width = width as usize;
    let height = height as usize;
    let bpp = 3;

    for y in 0..height {
        let row_start = y * width * bpp;
        let Some(row) = data.get_mut(row_start..row_start + width * bpp) else {
            return;
        };

        for x in 0..width / 2 {
            let left = x * bpp;
            let right = (width - 1 - x) * bpp;
            for i in 0..bpp {
                row.swap(left + i, right + i);
            }
        }
    }
}
