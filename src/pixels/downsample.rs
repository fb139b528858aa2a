//! Area-average downsampling of single-channel images.

/// Downsample a grayscale image to `out_width` x `out_height`.
///
/// Each output cell is the average brightness of the source pixels it
/// covers. When the output is larger than the source along an axis, each
/// cell still samples at least one source pixel.
///
/// # Arguments
/// * `gray` - Grayscale pixel data (one byte per pixel, row-major order)
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `out_width` - Desired output width
/// * `out_height` - Desired output height
///
/// # Returns
/// `out_width * out_height` brightness values in row-major order, or an
/// empty vector if any dimension is zero.
pub fn downsample(
    gray: &[u8],
    img_width: u32,
    img_height: u32,
    out_width: u32,
    out_height: u32,
) -> Vec<u8> {
    let mut result = Vec::new();
    downsample_into(gray, img_width, img_height, out_width, out_height, &mut result);
    result
}

/// Downsample into an existing buffer to avoid allocation.
///
/// # Returns
/// The number of brightness values written to the buffer.
pub fn downsample_into(
    gray: &[u8],
    img_width: u32,
    img_height: u32,
    out_width: u32,
    out_height: u32,
    buffer: &mut Vec<u8>,
) -> usize {
    buffer.clear();

    if out_width == 0 || out_height == 0 || img_width == 0 || img_height == 0 || gray.is_empty() {
        return 0;
    }

    let output_size = (out_width as usize) * (out_height as usize);
    buffer.reserve(output_size);

    let cell_w = img_width as f32 / out_width as f32;
    let cell_h = img_height as f32 / out_height as f32;

    for cy in 0..out_height {
        let (start_y, end_y) = cell_span(cy, cell_h, img_height);
        for cx in 0..out_width {
            let (start_x, end_x) = cell_span(cx, cell_w, img_width);

            let mut sum = 0u32;
            let mut count = 0u32;

            for py in start_y..end_y {
                for px in start_x..end_x {
                    let idx = (py * img_width + px) as usize;
                    if let Some(&value) = gray.get(idx) {
                        sum += value as u32;
                        count += 1;
                    }
                }
            }

            buffer.push(if count > 0 { (sum / count) as u8 } else { 0 });
        }
    }

    output_size
}

/// Source pixel range `[start, end)` covered by output cell `index`.
fn cell_span(index: u32, cell_size: f32, limit: u32) -> (u32, u32) {
    let start = ((index as f32 * cell_size) as u32).min(limit - 1);
    let end = (((index + 1) as f32 * cell_size) as u32).clamp(start + 1, limit);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downsample_averages_blocks() {
        // 4x2 image halved to 2x1
        let gray = vec![
            0, 100, 200, 200, //
            100, 200, 200, 200,
        ];
        assert_eq!(downsample(&gray, 4, 2, 2, 1), vec![100, 200]);
    }

    #[test]
    fn test_downsample_identity() {
        let gray = vec![1, 2, 3, 4, 5, 6];
        assert_eq!(downsample(&gray, 3, 2, 3, 2), gray);
    }

    #[test]
    fn test_downsample_upscale_samples_nearest() {
        let gray = vec![10, 20];
        assert_eq!(downsample(&gray, 2, 1, 4, 1), vec![10, 10, 20, 20]);
    }

    #[test]
    fn test_downsample_zero_dimensions() {
        assert!(downsample(&[1, 2, 3], 3, 1, 0, 1).is_empty());
        assert!(downsample(&[], 3, 1, 1, 1).is_empty());
    }

    #[test]
    fn test_downsample_output_length() {
        let gray = vec![128; 640 * 480];
        let out = downsample(&gray, 640, 480, 160, 120);
        assert_eq!(out.len(), 160 * 120);
        assert!(out.iter().all(|&v| v == 128));
    }
}
