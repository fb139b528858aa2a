//! Camera frame to ASCII art conversion for the terminal preview.

use crate::camera::Frame;
use crate::pixels::{downsample, to_grayscale};

/// Standard ASCII density ramp (10 levels).
/// Characters ordered from darkest (space) to brightest (@).
pub const STANDARD_CHARSET: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Block character set (5 levels).
pub const BLOCKS_CHARSET: &[char] = &[' ', '░', '▒', '▓', '█'];

/// Minimal character set (4 levels) for a clean look.
pub const MINIMAL_CHARSET: &[char] = &[' ', '.', ':', '#'];

/// Terminal characters are roughly twice as tall as they are wide.
pub const DEFAULT_CHAR_ASPECT_RATIO: f32 = 2.0;

/// Character set used to draw the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CharSet {
    #[default]
    Standard,
    Blocks,
    Minimal,
}

impl CharSet {
    pub fn chars(&self) -> &'static [char] {
        match self {
            CharSet::Standard => STANDARD_CHARSET,
            CharSet::Blocks => BLOCKS_CHARSET,
            CharSet::Minimal => MINIMAL_CHARSET,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Standard => "standard",
            CharSet::Blocks => "blocks",
            CharSet::Minimal => "minimal",
        }
    }

    /// Parse a charset name as written in the settings file.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "standard" => Some(CharSet::Standard),
            "blocks" => Some(CharSet::Blocks),
            "minimal" => Some(CharSet::Minimal),
            _ => None,
        }
    }
}

/// Map brightness values to characters from `charset`.
///
/// Lower brightness maps to earlier (darker) characters. With `invert`,
/// brightness is flipped first for light terminals.
pub fn map_to_chars(brightness: &[u8], charset: &[char], invert: bool) -> Vec<char> {
    if charset.is_empty() {
        return vec![' '; brightness.len()];
    }

    let levels = charset.len();
    brightness
        .iter()
        .map(|&b| {
            let b = if invert { 255 - b } else { b };
            charset[(b as usize * (levels - 1)) / 255]
        })
        .collect()
}

/// Character grid size that fits `max_cols` x `max_rows` while keeping the
/// image's aspect ratio on screen.
pub fn calculate_dimensions(
    img_width: u32,
    img_height: u32,
    max_cols: u16,
    max_rows: u16,
) -> (u16, u16) {
    if img_width == 0 || img_height == 0 || max_cols == 0 || max_rows == 0 {
        return (0, 0);
    }

    let aspect = img_width as f32 / img_height as f32;

    // Try full width first, then constrain by height
    let mut cols = max_cols as f32;
    let mut rows = cols / aspect / DEFAULT_CHAR_ASPECT_RATIO;
    if rows > max_rows as f32 {
        rows = max_rows as f32;
        cols = rows * aspect * DEFAULT_CHAR_ASPECT_RATIO;
    }

    (
        (cols.round() as u16).clamp(1, max_cols),
        (rows.round() as u16).clamp(1, max_rows),
    )
}

/// A frame rendered to characters, plus which cells belong to the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiFrame {
    pub chars: Vec<char>,
    pub highlight: Vec<bool>,
    pub width: u16,
    pub height: u16,
}

impl AsciiFrame {
    /// Render `frame` into a `cols` x `rows` character grid.
    pub fn render(frame: &Frame, cols: u16, rows: u16, charset: CharSet, invert: bool) -> Self {
        let gray = to_grayscale(frame);
        let brightness = downsample(&gray, frame.width, frame.height, cols as u32, rows as u32);
        let chars = map_to_chars(&brightness, charset.chars(), invert);
        let highlight = vec![false; chars.len()];
        Self {
            chars,
            highlight,
            width: cols,
            height: rows,
        }
    }

    /// Row `y` as a slice of characters with its highlight mask.
    pub fn row(&self, y: u16) -> Option<(&[char], &[bool])> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        let end = start + self.width as usize;
        Some((self.chars.get(start..end)?, self.highlight.get(start..end)?))
    }

    /// Each row joined into a string, for tests and logging.
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.height)
            .filter_map(|y| self.row(y))
            .map(|(chars, _)| chars.iter().collect())
            .collect()
    }
}
