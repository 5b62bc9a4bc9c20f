use std::collections::HashSet;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;
use log::debug;

/// Input gathered since the previous frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Raw pointer motion; x grows to the right, y grows downwards.
    pub mouse_delta: (f32, f32),
    pub left_pressed: bool,
    pub keys_pressed: HashSet<KeyCode>,
}

impl FrameInput {
    pub fn was_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }
}

#[derive(Debug, Default)]
pub struct InputHandler {
    held_keys: HashSet<KeyCode>,
    frame: FrameInput,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_keyboard_input_event(&mut self, keycode: KeyCode, pressed: bool) {
        if pressed {
            // Key repeat arrives as further presses; only the first counts.
            if self.held_keys.insert(keycode) {
                self.frame.keys_pressed.insert(keycode);
            }
        } else {
            self.held_keys.remove(&keycode);
        }
    }

    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left && state == ElementState::Pressed {
            debug!("Left mouse button pressed");
            self.frame.left_pressed = true;
        }
    }

    pub fn handle_mouse_motion(&mut self, delta: (f64, f64)) {
        self.frame.mouse_delta.0 += delta.0 as f32;
        self.frame.mouse_delta.1 += delta.1 as f32;
    }

    /// Forgets held keys, e.g. when focus is lost and releases will never arrive.
    pub fn clear_held(&mut self) {
        self.held_keys.clear();
    }

    /// Hands out everything collected this frame and starts a fresh one.
    pub fn take_frame(&mut self) -> FrameInput {
        std::mem::take(&mut self.frame)
    }
}
