//! motion-keys library crate.
//!
//! Watches a camera, finds which of nine screen regions moved the most
//! between frames, and presses the key mapped to that region.

pub mod camera;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod keys;
pub mod motion;
pub mod pixels;
pub mod shared;
