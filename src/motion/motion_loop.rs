//! The analysis loop: capture, classify, dispatch, remember.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::Rng;

use super::classifier::{classify, DEFAULT_THRESHOLD};
use super::gray_frame::{GrayFrame, WORKING_HEIGHT, WORKING_WIDTH};
use super::region::Region;
use crate::camera::FrameSource;
use crate::keys::{DispatchError, Dispatcher, Key, KeyInjector, KeyMap};
use crate::shared::SharedState;

/// Tunables for the motion loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionSettings {
    /// Minimum per-pixel brightness change that counts as motion
    pub threshold: u8,
    /// Working frame width
    pub working_width: u32,
    /// Working frame height
    pub working_height: u32,
    /// Sleep between polls when no new frame is available
    pub idle: Duration,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            working_width: WORKING_WIDTH,
            working_height: WORKING_HEIGHT,
            idle: Duration::from_millis(5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// No previous frame yet.
    Priming,
    /// Comparing each new frame against the previous one.
    Running,
    /// Stop flag observed; terminal.
    Stopped,
}

/// What one call to [`MotionLoop::step`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The stop flag was set.
    Stopped,
    /// No new usable frame; previous frame kept.
    Skipped,
    /// Frame stored as the first (or a fresh) comparison baseline.
    Primed,
    /// Frames compared, nothing crossed the threshold.
    NoMotion,
    /// Region won and its key was pressed.
    Dispatched { region: Region, key: Key },
    /// Region won but the key could not be pressed.
    DispatchFailed { region: Region, error: DispatchError },
}

/// Counters reported when the loop exits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionStats {
    pub compared: u64,
    pub skipped: u64,
    pub dispatched: u64,
    pub failed: u64,
}

pub struct MotionLoop<S, I, R = StdRng> {
    source: S,
    keymap: KeyMap,
    dispatcher: Dispatcher<I, R>,
    shared: Arc<SharedState>,
    settings: MotionSettings,
    state: LoopState,
    previous: Option<GrayFrame>,
    last_sequence: Option<u64>,
    stats: MotionStats,
}

impl<S, I, R> MotionLoop<S, I, R>
where
    S: FrameSource,
    I: KeyInjector,
    R: Rng,
{
    pub fn new(
        source: S,
        keymap: KeyMap,
        dispatcher: Dispatcher<I, R>,
        shared: Arc<SharedState>,
        settings: MotionSettings,
    ) -> Self {
        Self {
            source,
            keymap,
            dispatcher,
            shared,
            settings,
            state: LoopState::Priming,
            previous: None,
            last_sequence: None,
            stats: MotionStats::default(),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn stats(&self) -> MotionStats {
        self.stats
    }

    pub fn dispatcher(&self) -> &Dispatcher<I, R> {
        &self.dispatcher
    }

    /// Run one cycle.
    ///
    /// The stop flag is only checked here, between cycles; a dispatch in
    /// progress always finishes.
    pub fn step(&mut self) -> CycleOutcome {
        if self.state == LoopState::Stopped || self.shared.should_stop() {
            self.state = LoopState::Stopped;
            return CycleOutcome::Stopped;
        }

        let Some(current) = self.next_working_frame() else {
            self.stats.skipped += 1;
            return CycleOutcome::Skipped;
        };

        let Some(previous) = self.previous.take() else {
            self.previous = Some(current);
            self.state = LoopState::Running;
            return CycleOutcome::Primed;
        };

        let winner = match classify(&previous, &current, self.settings.threshold) {
            Ok(winner) => winner,
            Err(mismatch) => {
                log::debug!("re-priming motion loop: {}", mismatch);
                self.previous = Some(current);
                return CycleOutcome::Primed;
            }
        };
        self.stats.compared += 1;
        self.shared.set_region(winner);

        let outcome = match winner {
            None => CycleOutcome::NoMotion,
            Some(region) => self.dispatch(region),
        };

        self.previous = Some(current);
        outcome
    }

    /// Cycle until the stop flag is seen.
    pub fn run(mut self) -> MotionStats {
        log::debug!("motion loop started with {:?}", self.settings);
        loop {
            match self.step() {
                CycleOutcome::Stopped => break,
                CycleOutcome::Skipped => thread::sleep(self.settings.idle),
                _ => {}
            }
        }
        log::debug!("motion loop stopped: {:?}", self.stats);
        self.stats
    }

    /// Pull the newest frame if it's one we haven't compared yet.
    fn next_working_frame(&mut self) -> Option<GrayFrame> {
        let frame = self.source.latest()?;
        if self.last_sequence == Some(frame.sequence) {
            log::trace!("no new frame since #{}", frame.sequence);
            return None;
        }
        self.last_sequence = Some(frame.sequence);

        let working = GrayFrame::from_frame(
            &frame,
            self.settings.working_width,
            self.settings.working_height,
        );
        if working.is_none() {
            log::trace!("frame #{} is incomplete, skipping", frame.sequence);
        }
        working
    }

    fn dispatch(&mut self, region: Region) -> CycleOutcome {
        let action = self.keymap.resolve(region);
        match self.dispatcher.fire(&action) {
            Ok(key) => {
                self.stats.dispatched += 1;
                self.shared.record_press(key.name());
                log::info!("Pressed {} (region {})", key, region);
                CycleOutcome::Dispatched { region, key }
            }
            Err(error) => {
                self.stats.failed += 1;
                log::warn!("region {}: {}", region, error);
                CycleOutcome::DispatchFailed { region, error }
            }
        }
    }
}
