//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing and subcommand handlers.

mod args;
mod commands;

pub use args::{Args, Command, ConfigAction, KeymapAction};
pub use commands::{
    handle_config_action, handle_keymap_action, init_config, list_cameras, load_keymap,
};
