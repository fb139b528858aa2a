//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::display::CharSet;

/// Turn camera motion into key presses
#[derive(Parser, Debug)]
#[command(name = "motion-keys")]
#[command(version, about = "Press keys by moving in front of a camera", long_about = None)]
#[command(after_help = "REGIONS:
    0 1 2
    3 4 5     each region maps to one key (see `motion-keys keymap show`)
    6 7 8

EXAMPLES:
    motion-keys                      # preview + key presses
    motion-keys --no-preview         # headless, Ctrl+C to stop
    motion-keys --keymap game.cfg    # custom region table
    motion-keys --threshold 60       # more sensitive")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Camera device index (from list-cameras)
    #[arg(long)]
    pub camera: Option<u32>,

    /// Per-pixel brightness change needed to count as motion (0-255)
    #[arg(long, short)]
    pub threshold: Option<u8>,

    /// Key map override file
    #[arg(long, short)]
    pub keymap: Option<PathBuf>,

    /// How long each key is held down, in milliseconds
    #[arg(long)]
    pub hold_ms: Option<u64>,

    /// Run without the terminal preview
    #[arg(long)]
    pub no_preview: bool,

    /// Mirror camera horizontally
    #[arg(long, conflicts_with = "no_mirror")]
    pub mirror: bool,

    /// Don't mirror the camera
    #[arg(long)]
    pub no_mirror: bool,

    /// ASCII character set for the preview
    #[arg(long)]
    pub charset: Option<CharSet>,

    /// Invert brightness (for light terminals)
    #[arg(long)]
    pub invert: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available cameras
    ListCameras,
    /// Key map inspection
    Keymap {
        #[command(subcommand)]
        action: KeymapAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum KeymapAction {
    /// Show the effective region table
    Show,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

impl Args {
    /// Apply command-line overrides on top of file settings.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(device) = self.camera {
            config.camera.device = device;
        }
        if let Some(threshold) = self.threshold {
            config.motion.threshold = threshold;
        }
        if let Some(path) = &self.keymap {
            config.keys.file = Some(path.clone());
        }
        if let Some(hold_ms) = self.hold_ms {
            config.keys.hold_ms = hold_ms;
        }
        if self.no_preview {
            config.display.preview = false;
        }
        if self.mirror {
            config.camera.mirror = true;
        } else if self.no_mirror {
            config.camera.mirror = false;
        }
        if let Some(charset) = self.charset {
            config.display.charset = Some(charset.name().to_string());
        }
        if self.invert {
            config.display.invert = true;
        }
    }
}
