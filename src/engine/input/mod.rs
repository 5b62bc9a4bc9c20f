//! Input handling module
//! This module collects keyboard and mouse events into per-frame snapshots.

pub mod handler;

pub use handler::{FrameInput, InputHandler};
