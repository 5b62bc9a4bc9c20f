//! Per-frame animation: tweens and delayed calls.

pub mod timer;
pub mod tween;

pub use timer::Timers;
pub use tween::{Tween, Tweens};
