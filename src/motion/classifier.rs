//! Frame-differencing classifier: which region changed the most.

use thiserror::Error;

use super::gray_frame::GrayFrame;
use super::region::{Region, REGION_COUNT};

/// Default per-pixel change threshold (0-255).
pub const DEFAULT_THRESHOLD: u8 = 100;

/// The two frames handed to the classifier had different sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("frame size changed from {previous:?} to {current:?}")]
pub struct FrameMismatch {
    pub previous: (u32, u32),
    pub current: (u32, u32),
}

/// Per-region count of pixels whose brightness moved by at least the threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeTally {
    counts: [u32; REGION_COUNT],
}

impl ChangeTally {
    /// Compare `current` against `previous` pixel by pixel.
    pub fn measure(
        previous: &GrayFrame,
        current: &GrayFrame,
        threshold: u8,
    ) -> Result<Self, FrameMismatch> {
        if !previous.same_size(current) {
            return Err(FrameMismatch {
                previous: (previous.width(), previous.height()),
                current: (current.width(), current.height()),
            });
        }

        let width = current.width();
        let height = current.height();
        let mut tally = ChangeTally::default();
        if width == 0 {
            return Ok(tally);
        }

        let rows = previous
            .pixels()
            .chunks_exact(width as usize)
            .zip(current.pixels().chunks_exact(width as usize));

        for (y, (prev_row, cur_row)) in rows.enumerate() {
            for (x, (&before, &after)) in prev_row.iter().zip(cur_row).enumerate() {
                if before.abs_diff(after) >= threshold {
                    let region = Region::containing(x as u32, y as u32, width, height);
                    tally.counts[region.index()] += 1;
                }
            }
        }

        Ok(tally)
    }

    pub fn count(&self, region: Region) -> u32 {
        self.counts[region.index()]
    }

    pub fn counts(&self) -> &[u32; REGION_COUNT] {
        &self.counts
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Region with the highest count, lowest index on ties, `None` if all zero.
    pub fn winner(&self) -> Option<Region> {
        let mut best: Option<(Region, u32)> = None;
        for region in Region::ALL {
            let count = self.count(region);
            if count == 0 {
                continue;
            }
            // strict comparison keeps the first region seen on a tie
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((region, count));
            }
        }
        best.map(|(region, _)| region)
    }
}

/// Region that changed the most between two working frames.
///
/// Pure function of its inputs: a pixel counts toward the region that
/// contains it when `|current - previous| >= threshold`.
pub fn classify(
    previous: &GrayFrame,
    current: &GrayFrame,
    threshold: u8,
) -> Result<Option<Region>, FrameMismatch> {
    Ok(ChangeTally::measure(previous, current, threshold)?.winner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank() -> GrayFrame {
        GrayFrame::filled(160, 120, 0)
    }

    #[test]
    fn test_identical_frames_have_no_winner() {
        let frame = GrayFrame::filled(160, 120, 77);
        let tally = ChangeTally::measure(&frame, &frame, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(tally.total(), 0);
        assert_eq!(tally.winner(), None);
    }

    #[test]
    fn test_block_in_top_left() {
        let mut current = blank();
        current.fill_rect(15, 15, 10, 10, 200);
        let winner = classify(&blank(), &current, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(winner, Region::new(0));
    }

    #[test]
    fn test_delta_below_threshold_ignored() {
        let mut current = blank();
        current.fill_rect(100, 80, 10, 10, 99);
        assert_eq!(classify(&blank(), &current, 100).unwrap(), None);

        current.fill_rect(100, 80, 10, 10, 100);
        assert_eq!(classify(&blank(), &current, 100).unwrap(), Region::new(8));
    }

    #[test]
    fn test_darkening_counts_as_change() {
        let previous = GrayFrame::filled(160, 120, 250);
        let mut current = previous.clone();
        current.fill_rect(60, 50, 5, 5, 10);
        assert_eq!(classify(&previous, &current, 100).unwrap(), Region::new(4));
    }

    #[test]
    fn test_tie_goes_to_lower_index() {
        let mut current = blank();
        current.fill_rect(15, 15, 10, 10, 200);
        current.fill_rect(130, 15, 10, 10, 200);
        let tally = ChangeTally::measure(&blank(), &current, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(tally.count(Region::new(0).unwrap()), 100);
        assert_eq!(tally.count(Region::new(2).unwrap()), 100);
        assert_eq!(tally.winner(), Region::new(0));
    }

    #[test]
    fn test_larger_change_wins_regardless_of_position() {
        let mut current = blank();
        current.fill_rect(0, 0, 5, 5, 255);
        current.fill_rect(120, 90, 20, 20, 255);
        assert_eq!(
            classify(&blank(), &current, DEFAULT_THRESHOLD).unwrap(),
            Region::new(8)
        );
    }

    #[test]
    fn test_zero_threshold_counts_every_pixel() {
        let frame = GrayFrame::filled(9, 9, 5);
        let tally = ChangeTally::measure(&frame, &frame, 0).unwrap();
        assert_eq!(tally.total(), 81);
        assert!(tally.counts().iter().all(|&c| c == 9));
        assert_eq!(tally.winner(), Region::new(0));
    }

    #[test]
    fn test_size_mismatch_is_an_error() {
        let err = classify(&GrayFrame::filled(4, 4, 0), &GrayFrame::filled(4, 3, 0), 1);
        assert_eq!(
            err,
            Err(FrameMismatch {
                previous: (4, 4),
                current: (4, 3)
            })
        );
    }
}
