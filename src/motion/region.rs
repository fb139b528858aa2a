//! The 3x3 grid of regions motion is bucketed into.
//!
//! ```text
//! .-----------.
//! [ 0 | 1 | 2 ]
//! [---+---+---]
//! [ 3 | 4 | 5 ]
//! [---+---+---]
//! [ 6 | 7 | 8 ]
//! ^-----------^
//! ```
//!
//! Each axis is split at `len / 3` and `2 * len / 3` (integer division), so
//! the last row and column absorb any remainder.

use std::fmt;

/// Number of regions in the grid.
pub const REGION_COUNT: usize = 9;

/// One of the nine grid cells, indexed 0-8 row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Region(u8);

/// Pixel rectangle of a region within a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.left && x < self.left + self.width && y >= self.top && y < self.top + self.height
    }

    /// Frames under 3 pixels along an axis leave some bands empty.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Last column inside the rectangle.
    pub fn right(&self) -> u32 {
        (self.left + self.width).saturating_sub(1)
    }

    /// Last row inside the rectangle.
    pub fn bottom(&self) -> u32 {
        (self.top + self.height).saturating_sub(1)
    }
}

impl Region {
    /// All regions in index order.
    pub const ALL: [Region; REGION_COUNT] = [
        Region(0),
        Region(1),
        Region(2),
        Region(3),
        Region(4),
        Region(5),
        Region(6),
        Region(7),
        Region(8),
    ];

    /// Region for `index`, or `None` outside 0-8.
    pub fn new(index: usize) -> Option<Self> {
        (index < REGION_COUNT).then_some(Region(index as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> u32 {
        (self.0 / 3) as u32
    }

    pub fn col(self) -> u32 {
        (self.0 % 3) as u32
    }

    /// Region containing pixel `(x, y)` of a `width` x `height` frame.
    pub fn containing(x: u32, y: u32, width: u32, height: u32) -> Self {
        let row = third(y, height);
        let col = third(x, width);
        Region((3 * row + col) as u8)
    }

    /// Pixel bounds of this region in a `width` x `height` frame.
    pub fn bounds(self, width: u32, height: u32) -> Bounds {
        let (left, w) = band(self.col(), width);
        let (top, h) = band(self.row(), height);
        Bounds {
            left,
            top,
            width: w,
            height: h,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which third (0, 1 or 2) of an axis of length `len` holds `pos`.
#[inline]
fn third(pos: u32, len: u32) -> u32 {
    if pos < len / 3 {
        0
    } else if pos < 2 * len / 3 {
        1
    } else {
        2
    }
}

/// `(start, length)` of band `n` along an axis of length `len`.
fn band(n: u32, len: u32) -> (u32, u32) {
    let start = n * len / 3;
    let end = if n == 2 { len } else { (n + 1) * len / 3 };
    (start, end - start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_new_range() {
        assert_eq!(Region::new(0).map(Region::index), Some(0));
        assert_eq!(Region::new(8).map(Region::index), Some(8));
        assert!(Region::new(9).is_none());
    }

    #[test]
    fn test_row_and_col() {
        let r = Region::new(5).unwrap();
        assert_eq!((r.row(), r.col()), (1, 2));
        let r = Region::new(6).unwrap();
        assert_eq!((r.row(), r.col()), (2, 0));
    }

    #[test]
    fn test_containing_working_frame_corners() {
        assert_eq!(Region::containing(0, 0, 160, 120).index(), 0);
        assert_eq!(Region::containing(159, 0, 160, 120).index(), 2);
        assert_eq!(Region::containing(0, 119, 160, 120).index(), 6);
        assert_eq!(Region::containing(159, 119, 160, 120).index(), 8);
        assert_eq!(Region::containing(80, 60, 160, 120).index(), 4);
    }

    #[test]
    fn test_containing_boundaries() {
        // 160 / 3 = 53, 2 * 160 / 3 = 106; 120 / 3 = 40, 2 * 120 / 3 = 80
        assert_eq!(Region::containing(52, 39, 160, 120).index(), 0);
        assert_eq!(Region::containing(53, 39, 160, 120).index(), 1);
        assert_eq!(Region::containing(105, 40, 160, 120).index(), 4);
        assert_eq!(Region::containing(106, 80, 160, 120).index(), 8);
    }

    #[test]
    fn test_bounds_working_frame() {
        let b = Region::new(0).unwrap().bounds(160, 120);
        assert_eq!((b.left, b.top, b.right(), b.bottom()), (0, 0, 52, 39));

        let b = Region::new(8).unwrap().bounds(160, 120);
        assert_eq!((b.left, b.top, b.right(), b.bottom()), (106, 80, 159, 119));
        assert_eq!((b.width, b.height), (54, 40));
    }

    #[test]
    fn test_bounds_agree_with_containing() {
        for &(w, h) in &[(160u32, 120u32), (7, 5), (3, 3), (10, 1)] {
            for y in 0..h {
                for x in 0..w {
                    let region = Region::containing(x, y, w, h);
                    let owners: Vec<Region> = Region::ALL
                        .iter()
                        .copied()
                        .filter(|r| r.bounds(w, h).contains(x, y))
                        .collect();
                    assert_eq!(owners, vec![region], "pixel ({x},{y}) in {w}x{h}");
                }
            }
        }
    }

    #[test]
    fn test_tiny_frame_has_empty_bands() {
        assert!(Region::new(0).unwrap().bounds(1, 1).is_empty());
        assert!(!Region::new(8).unwrap().bounds(1, 1).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Region::new(3).unwrap().to_string(), "3");
    }
}
