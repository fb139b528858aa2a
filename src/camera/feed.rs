//! Last-write-wins frame hand-off between the capture thread and its readers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use super::types::Frame;

/// Anything that can hand out the most recent camera frame.
///
/// Readers never block on the producer. `None` means nothing has been
/// captured yet; a frame whose `sequence` a reader has already seen means
/// the producer has not published since. Frames are shared, so polling
/// never copies pixel data.
pub trait FrameSource: Send {
    fn latest(&self) -> Option<Arc<Frame>>;
}

/// Cloneable read/write handle onto a single-slot frame buffer.
///
/// The capture thread is the only writer. Every clone reads the same slot,
/// so the motion loop and the display loop see the same frames without
/// touching the device themselves.
#[derive(Debug, Clone, Default)]
pub struct FrameFeed {
    slot: Arc<Mutex<Option<Arc<Frame>>>>,
    next_sequence: Arc<AtomicU64>,
}

impl FrameFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish RGB data as the newest frame, replacing whatever was there.
    ///
    /// Returns the sequence number assigned to the frame.
    pub fn publish(&self, data: Vec<u8>, width: u32, height: u32) -> u64 {
        let sequence = self.next_sequence.fetch_add(1, Ordering::SeqCst);
        let frame = Arc::new(Frame::from_rgb(data, width, height, sequence));
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(frame);
        }
        sequence
    }

    /// Drop the buffered frame (used when the device goes away).
    pub fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

impl FrameSource for FrameFeed {
    fn latest(&self) -> Option<Arc<Frame>> {
        let slot = self.slot.lock().ok()?;
        slot.as_ref().map(Arc::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_feed_has_no_frame() {
        let feed = FrameFeed::new();
        assert!(feed.latest().is_none());
    }

    #[test]
    fn test_publish_overwrites_previous_frame() {
        let feed = FrameFeed::new();
        let first = feed.publish(vec![1, 1, 1], 1, 1);
        let second = feed.publish(vec![2, 2, 2], 1, 1);
        assert_eq!(first + 1, second);

        let frame = feed.latest().unwrap();
        assert_eq!(frame.sequence, second);
        assert_eq!(frame.data, vec![2, 2, 2]);
    }

    #[test]
    fn test_clones_share_the_slot() {
        let writer = FrameFeed::new();
        let reader = writer.clone();
        writer.publish(vec![9, 9, 9], 1, 1);
        assert_eq!(reader.latest().unwrap().data, vec![9, 9, 9]);

        writer.clear();
        assert!(reader.latest().is_none());
    }

    #[test]
    fn test_reading_does_not_consume() {
        let feed = FrameFeed::new();
        feed.publish(vec![5, 5, 5], 1, 1);
        let a = feed.latest().unwrap();
        let b = feed.latest().unwrap();
        assert_eq!(a.sequence, b.sequence);
    }

    #[test]
    fn test_readers_share_one_buffer() {
        let feed = FrameFeed::new();
        feed.publish(vec![7; 4 * 4 * 3], 4, 4);
        let a = feed.latest().unwrap();
        let b = feed.clone().latest().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        // slot plus the two readers
        assert_eq!(Arc::strong_count(&a), 3);

        // a newer frame replaces the slot without touching what readers hold
        feed.publish(vec![8; 4 * 4 * 3], 4, 4);
        assert_eq!(Arc::strong_count(&a), 2);
        assert_eq!(a.data[0], 7);
    }
}
