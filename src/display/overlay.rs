//! Box around the region that last won, drawn onto the ASCII preview.

use super::ascii::AsciiFrame;
use crate::motion::Region;

const HORIZONTAL: char = '─';
const VERTICAL: char = '│';
const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';

/// Outline `region` on `frame`, marking the outline cells as highlighted.
///
/// The grid is split into thirds the same way the working frame is, so
/// the box lines up with what the classifier measured. Does nothing for
/// `None` or for regions too small to occupy a cell.
pub fn draw_region_box(frame: &mut AsciiFrame, region: Option<Region>) {
    let Some(region) = region else {
        return;
    };
    let bounds = region.bounds(frame.width as u32, frame.height as u32);
    if bounds.is_empty() {
        return;
    }

    let (left, top) = (bounds.left, bounds.top);
    let (right, bottom) = (bounds.right(), bounds.bottom());
    let width = frame.width as u32;

    let mut put = |x: u32, y: u32, c: char| {
        let idx = (y * width + x) as usize;
        if let (Some(cell), Some(mark)) = (frame.chars.get_mut(idx), frame.highlight.get_mut(idx)) {
            *cell = c;
            *mark = true;
        }
    };

    for x in left..=right {
        put(x, top, HORIZONTAL);
        put(x, bottom, HORIZONTAL);
    }
    for y in top..=bottom {
        put(left, y, VERTICAL);
        put(right, y, VERTICAL);
    }
    if right > left && bottom > top {
        put(left, top, TOP_LEFT);
        put(right, top, TOP_RIGHT);
        put(left, bottom, BOTTOM_LEFT);
        put(right, bottom, BOTTOM_RIGHT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(width: u16, height: u16) -> AsciiFrame {
        let size = width as usize * height as usize;
        AsciiFrame {
            chars: vec![' '; size],
            highlight: vec![false; size],
            width,
            height,
        }
    }

    #[test]
    fn test_no_region_draws_nothing() {
        let mut frame = blank(9, 6);
        draw_region_box(&mut frame, None);
        assert_eq!(frame, blank(9, 6));
    }

    #[test]
    fn test_box_around_centre() {
        let mut frame = blank(9, 6);
        draw_region_box(&mut frame, Region::new(4));
        assert_eq!(
            frame.to_lines(),
            vec![
                "         ",
                "         ",
                "   ┌─┐   ",
                "   └─┘   ",
                "         ",
                "         ",
            ]
        );
        assert_eq!(frame.highlight.iter().filter(|&&h| h).count(), 6);
    }

    #[test]
    fn test_box_in_bottom_right_absorbs_remainder() {
        let mut frame = blank(10, 7);
        draw_region_box(&mut frame, Region::new(8));
        let lines = frame.to_lines();
        // columns 6..=9, rows 4..=6
        assert_eq!(lines[4], "      ┌──┐");
        assert_eq!(lines[5], "      │  │");
        assert_eq!(lines[6], "      └──┘");
    }

    #[test]
    fn test_tiny_grid_skips_empty_region() {
        let mut frame = blank(2, 2);
        draw_region_box(&mut frame, Region::new(0));
        assert_eq!(frame, blank(2, 2));
    }
}
