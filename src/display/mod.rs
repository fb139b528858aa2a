//! Terminal preview: ASCII camera view, region overlay and status bar.

mod ascii;
mod display_loop;
mod overlay;
mod raw_mode;
mod status;

pub use ascii::{calculate_dimensions, map_to_chars, AsciiFrame, CharSet};
pub use display_loop::{compose, is_quit_key, DisplayLoop, DisplaySettings};
pub use overlay::draw_region_box;
pub use raw_mode::ScreenGuard;
pub use status::Status;
