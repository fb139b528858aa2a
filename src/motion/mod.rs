//! Motion detection: working frames, the 3x3 region grid, the
//! frame-differencing classifier, and the loop that drives key dispatch.

mod classifier;
mod gray_frame;
mod motion_loop;
mod region;

pub use classifier::{classify, ChangeTally, FrameMismatch, DEFAULT_THRESHOLD};
pub use gray_frame::{GrayFrame, WORKING_HEIGHT, WORKING_WIDTH};
pub use motion_loop::{CycleOutcome, LoopState, MotionLoop, MotionSettings, MotionStats};
pub use region::{Bounds, Region, REGION_COUNT};
