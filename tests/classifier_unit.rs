//! Tests for motion classification from camera-sized frames.
//!
//! These go through the same path the motion loop uses:
//! - RGB frame to grayscale working frame
//! - Thresholded differencing into the 3x3 tally
//! - Winner selection and tie-break

use motion_keys::camera::Frame;
use motion_keys::motion::{
    classify, ChangeTally, GrayFrame, Region, DEFAULT_THRESHOLD, REGION_COUNT, WORKING_HEIGHT,
    WORKING_WIDTH,
};

const CAM_W: u32 = 640;
const CAM_H: u32 = 480;

/// Solid camera frame.
fn solid(value: u8) -> Vec<u8> {
    vec![value; (CAM_W * CAM_H * 3) as usize]
}

/// Paint an RGB rectangle into a camera-sized buffer.
fn paint(data: &mut [u8], x: u32, y: u32, w: u32, h: u32, rgb: [u8; 3]) {
    for row in y..(y + h).min(CAM_H) {
        for col in x..(x + w).min(CAM_W) {
            let idx = ((row * CAM_W + col) * 3) as usize;
            data[idx..idx + 3].copy_from_slice(&rgb);
        }
    }
}

fn working(data: Vec<u8>, sequence: u64) -> GrayFrame {
    let frame = Frame::from_rgb(data, CAM_W, CAM_H, sequence);
    GrayFrame::from_frame(&frame, WORKING_WIDTH, WORKING_HEIGHT).unwrap()
}

// ==================== Working Frame Tests ====================

#[test]
fn test_working_frame_size() {
    let gray = working(solid(0), 0);
    assert_eq!(gray.width(), 160);
    assert_eq!(gray.height(), 120);
    assert_eq!(gray.pixels().len(), 160 * 120);
}

#[test]
fn test_incomplete_frame_has_no_working_frame() {
    let frame = Frame::from_rgb(vec![0; 12], CAM_W, CAM_H, 0);
    assert!(GrayFrame::from_frame(&frame, WORKING_WIDTH, WORKING_HEIGHT).is_none());
}

// ==================== Classification Tests ====================

#[test]
fn test_still_scene_has_no_winner() {
    let mut data = solid(30);
    paint(&mut data, 200, 100, 120, 90, [250, 10, 10]);
    let a = working(data.clone(), 0);
    let b = working(data, 1);
    assert_eq!(classify(&a, &b, DEFAULT_THRESHOLD).unwrap(), None);
}

#[test]
fn test_hand_in_each_region() {
    let cell_w = CAM_W / 3;
    let cell_h = CAM_H / 3;
    let previous = working(solid(0), 0);

    for region in Region::ALL {
        let mut data = solid(0);
        let x = region.col() * cell_w + 40;
        let y = region.row() * cell_h + 40;
        paint(&mut data, x, y, 60, 60, [255, 255, 255]);

        let current = working(data, 1);
        assert_eq!(
            classify(&previous, &current, DEFAULT_THRESHOLD).unwrap(),
            Some(region),
            "block placed in region {}",
            region
        );
    }
}

#[test]
fn test_dim_change_stays_below_threshold() {
    let previous = working(solid(50), 0);
    let mut data = solid(50);
    // +90 brightness is below the default threshold of 100
    paint(&mut data, 0, 0, CAM_W, CAM_H, [140, 140, 140]);
    let current = working(data, 1);
    assert_eq!(classify(&previous, &current, DEFAULT_THRESHOLD).unwrap(), None);

    // a lower threshold picks it up; every region ties, so region 0 wins
    assert_eq!(classify(&previous, &current, 60).unwrap(), Region::new(0));
}

#[test]
fn test_bigger_movement_wins() {
    let previous = working(solid(0), 0);
    let mut data = solid(0);
    paint(&mut data, 20, 20, 40, 40, [255, 255, 255]); // region 0, small
    paint(&mut data, 460, 340, 120, 120, [255, 255, 255]); // region 8, large
    let current = working(data, 1);

    let tally = ChangeTally::measure(&previous, &current, DEFAULT_THRESHOLD).unwrap();
    let big = tally.count(Region::new(8).unwrap());
    let small = tally.count(Region::new(0).unwrap());
    assert!(big > small, "{} vs {}", big, small);
    assert_eq!(tally.winner(), Region::new(8));
}

#[test]
fn test_tie_break_is_stable() {
    let previous = working(solid(0), 0);
    let mut data = solid(0);
    paint(&mut data, 40, 40, 80, 80, [255, 255, 255]); // region 0
    paint(&mut data, 480, 40, 80, 80, [255, 255, 255]); // region 2
    let current = working(data, 1);

    for _ in 0..10 {
        assert_eq!(
            classify(&previous, &current, DEFAULT_THRESHOLD).unwrap(),
            Region::new(0)
        );
    }
}

#[test]
fn test_tally_counts_only_changed_regions() {
    let previous = working(solid(0), 0);
    let mut data = solid(0);
    paint(&mut data, 240, 180, 120, 100, [255, 255, 255]); // centre
    let current = working(data, 1);

    let tally = ChangeTally::measure(&previous, &current, DEFAULT_THRESHOLD).unwrap();
    let centre = Region::new(4).unwrap();
    assert!(tally.count(centre) > 0);
    assert_eq!(tally.total(), tally.count(centre));
    assert_eq!(tally.counts().len(), REGION_COUNT);
}

#[test]
fn test_mismatched_working_sizes_rejected() {
    let a = GrayFrame::filled(160, 120, 0);
    let b = GrayFrame::filled(80, 60, 0);
    assert!(classify(&a, &b, DEFAULT_THRESHOLD).is_err());
}

// ==================== Partition Tests ====================

#[test]
fn test_partition_is_exhaustive_for_odd_sizes() {
    for (w, h) in [(160, 120), (7, 5), (100, 33), (1, 1)] {
        let mut owned = [0u32; REGION_COUNT];
        for y in 0..h {
            for x in 0..w {
                let region = Region::containing(x, y, w, h);
                assert!(region.bounds(w, h).contains(x, y));
                owned[region.index()] += 1;
            }
        }
        assert_eq!(owned.iter().sum::<u32>(), w * h);
    }
}
