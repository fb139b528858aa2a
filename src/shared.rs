//! State the motion loop and the display loop hand each other.
//!
//! Every field has exactly one writer. Readers may see a value one cycle
//! stale, and the fields are not ordered relative to each other.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicU8, Ordering};
use std::sync::Mutex;

use crate::motion::Region;

const NO_REGION: u8 = u8::MAX;

#[derive(Debug)]
pub struct SharedState {
    /// Last winning region, written by the motion loop.
    region: AtomicU8,
    /// Set once by whoever ends the session (display loop or Ctrl+C).
    stop: AtomicBool,
    /// Number of successful dispatches, written by the motion loop.
    presses: AtomicU64,
    /// Name of the last key pressed, for the status line.
    last_key: Mutex<Option<&'static str>>,
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            region: AtomicU8::new(NO_REGION),
            stop: AtomicBool::new(false),
            presses: AtomicU64::new(0),
            last_key: Mutex::new(None),
        }
    }

    pub fn region(&self) -> Option<Region> {
        Region::new(self.region.load(Ordering::Relaxed) as usize)
    }

    pub fn set_region(&self, region: Option<Region>) {
        let value = region.map_or(NO_REGION, |r| r.index() as u8);
        self.region.store(value, Ordering::Relaxed);
    }

    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }

    pub fn record_press(&self, key_name: &'static str) {
        self.presses.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut last) = self.last_key.lock() {
            *last = Some(key_name);
        }
    }

    pub fn presses(&self) -> u64 {
        self.presses.load(Ordering::Relaxed)
    }

    pub fn last_key(&self) -> Option<&'static str> {
        self.last_key.lock().ok().and_then(|last| *last)
    }
}
