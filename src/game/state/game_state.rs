//! Frame timing and display toggles.

use std::time::{Duration, Instant};

use log::info;

pub struct GameState {
    pub show_fps: bool,
    pub fullscreen: bool,
    last_frame: Instant,
    last_fps_report: Instant,
    frame_count: u32,
    last_fps: u32,
}

/// Longest step fed to the simulation, so a stall does not teleport cards.
const MAX_FRAME_DELTA: f32 = 0.1;

impl GameState {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            show_fps: false,
            fullscreen: false,
            last_frame: now,
            last_fps_report: now,
            frame_count: 0,
            last_fps: 0,
        }
    }

    /// Marks the start of a frame and returns the seconds since the previous one.
    pub fn begin_frame(&mut self) -> f32 {
        self.begin_frame_at(Instant::now())
    }

    fn begin_frame_at(&mut self, now: Instant) -> f32 {
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;

        if now.duration_since(self.last_fps_report) >= Duration::from_secs(1) {
            self.last_fps = self.frame_count;
            self.frame_count = 0;
            self.last_fps_report = now;
            if self.show_fps {
                info!("FPS: {}", self.last_fps);
            }
        }
        dt.min(MAX_FRAME_DELTA)
    }

    pub fn toggle_fps_display(&mut self) {
        self.show_fps = !self.show_fps;
        info!("Show FPS: {}", self.show_fps);
    }

    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        self.fullscreen
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
