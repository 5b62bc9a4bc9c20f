//! Window management implementation.

use std::sync::Arc;

use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{CursorGrabMode, Fullscreen, Window};
use log::{debug, error, warn};

pub struct WindowManager {
    pub window: Option<Arc<Window>>,
    pub size: Option<PhysicalSize<u32>>,
    cursor_locked: bool,
}

impl WindowManager {
    pub fn new() -> Self {
        Self {
            window: None,
            size: None,
            cursor_locked: false,
        }
    }

    pub fn create_window(
        &mut self,
        event_loop: &ActiveEventLoop,
        title: &str,
        width: u32,
        height: u32,
    ) -> Result<Arc<Window>, Box<dyn std::error::Error>> {
        let attributes = Window::default_attributes()
            .with_title(title)
            .with_inner_size(LogicalSize::new(width, height));
        let window = event_loop.create_window(attributes).map_err(|e| {
            error!("Failed to create window: {:?}", e);
            e
        })?;

        let window = Arc::new(window);
        self.size = Some(window.inner_size());
        self.window = Some(window.clone());
        Ok(window)
    }

    pub fn set_window_size(&mut self, size: PhysicalSize<u32>) {
        self.size = Some(size);
    }

    /// Grabs and hides the cursor, or releases and shows it.
    /// Platforms without a locked mode fall back to confining the cursor to the window.
    pub fn set_cursor_locked(&mut self, locked: bool) {
        let Some(window) = &self.window else { return };
        if locked {
            if let Err(e) = window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
            {
                warn!("Failed to grab cursor: {:?}", e);
            }
            window.set_cursor_visible(false);
            debug!("Cursor locked and hidden");
        } else {
            if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
                warn!("Failed to release cursor: {:?}", e);
            }
            window.set_cursor_visible(true);
            debug!("Cursor unlocked and visible");
        }
        self.cursor_locked = locked;
    }

    /// Whether the window currently holds the cursor. Focus loss releases it.
    pub fn is_cursor_locked(&self) -> bool {
        self.cursor_locked
    }

    pub fn handle_focus_lost(&mut self) {
        self.cursor_locked = false;
    }

    pub fn set_fullscreen(&self, fullscreen: bool) {
        if let Some(window) = &self.window {
            if fullscreen {
                window.set_fullscreen(Some(Fullscreen::Borderless(None)));
                debug!("Entered fullscreen mode");
            } else {
                window.set_fullscreen(None);
                debug!("Exited fullscreen mode");
            }
        }
    }

    pub fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    pub fn get_window(&self) -> Option<&Arc<Window>> {
        self.window.as_ref()
    }

    pub fn get_size(&self) -> Option<PhysicalSize<u32>> {
        self.size
    }
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}
