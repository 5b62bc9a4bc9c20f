//! First-person mouse-look with click-to-select and a crosshair.

use glam::{Quat, Vec3};
use log::{debug, info, warn};

use crate::engine::input::FrameInput;
use crate::engine::{raycast, Ray, RaycastHit, Scene};
use crate::game::cards::CardEngine;
use crate::game::config::ViewConfig;
use crate::game::world::camera::Camera;
use winit::keyboard::KeyCode;

/// Unity-style `repeat`: wraps `t` into [0, length).
fn repeat(t: f32, length: f32) -> f32 {
    (t - (t / length).floor() * length).clamp(0.0, length)
}

/// Interpolates between two angles in degrees along the shorter arc. `t` is clamped to [0, 1].
pub fn lerp_angle(a: f32, b: f32, t: f32) -> f32 {
    let mut delta = repeat(b - a, 360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    a + delta * t.clamp(0.0, 1.0)
}

/// Rotation for a pitch (positive looks down) and yaw (positive turns right), both in degrees.
pub fn look_rotation(pitch: f32, yaw: f32) -> Quat {
    Quat::from_rotation_y(-yaw.to_radians()) * Quat::from_rotation_x(-pitch.to_radians())
}

/// What the window layer has to do after a view update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewRequests {
    /// `Some(true)` to grab and hide the cursor, `Some(false)` to release it.
    pub cursor_lock: Option<bool>,
    pub select: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crosshair {
    pub center: (f32, f32),
    pub size: f32,
    pub color: [f32; 4],
}

pub struct ControlledView {
    pub camera: Camera,
    settings: ViewConfig,
    vertical_rotation: f32,
    horizontal_rotation: f32,
    target_vertical_rotation: f32,
    target_horizontal_rotation: f32,
    is_cursor_locked: bool,
}

impl ControlledView {
    pub fn new(settings: ViewConfig) -> Self {
        let mut camera = Camera::new();
        camera.position = settings.camera_position;
        camera.fov_y = settings.fov_degrees.to_radians();
        let (pitch, yaw) = settings.camera_euler;
        camera.rotation = look_rotation(pitch, yaw);
        Self {
            camera,
            settings,
            vertical_rotation: 0.0,
            horizontal_rotation: 0.0,
            target_vertical_rotation: 0.0,
            target_horizontal_rotation: 0.0,
            is_cursor_locked: false,
        }
    }

    /// Seeds current and target angles from the camera's starting orientation.
    /// Returns the cursor state the window should adopt.
    pub fn start(&mut self) -> ViewRequests {
        let (mut pitch, yaw) = self.settings.camera_euler;
        pitch = pitch.rem_euclid(360.0);
        if pitch > 180.0 {
            pitch -= 360.0;
        }
        self.target_vertical_rotation = pitch;
        self.target_horizontal_rotation = yaw;
        self.vertical_rotation = pitch;
        self.horizontal_rotation = yaw;

        let mut requests = ViewRequests::default();
        if self.settings.lock_cursor {
            self.is_cursor_locked = true;
            requests.cursor_lock = Some(true);
        }
        requests
    }

    /// `window_holds_cursor` is whether the window actually has the cursor grabbed right now.
    pub fn update(&mut self, dt: f32, input: &FrameInput, window_holds_cursor: bool) -> ViewRequests {
        let mut requests = ViewRequests::default();

        if self.settings.lock_cursor && self.is_cursor_locked && !window_holds_cursor {
            requests.cursor_lock = Some(true);
        }

        if self.is_cursor_locked {
            let scale = self.settings.mouse_sensitivity * dt * 60.0;
            let mouse_x = input.mouse_delta.0 * scale;
            let mouse_y = input.mouse_delta.1 * scale;

            self.target_horizontal_rotation += mouse_x;
            // Screen y grows downwards, so dragging up lowers the pitch and looks up.
            self.target_vertical_rotation += mouse_y;
            let limit = self.settings.vertical_rotation_limit;
            self.target_vertical_rotation = self.target_vertical_rotation.clamp(-limit, limit);

            if self.settings.use_smoothing && self.settings.smoothing > 0.0 {
                let t = self.settings.smoothing * dt;
                self.horizontal_rotation = lerp_angle(self.horizontal_rotation, self.target_horizontal_rotation, t);
                self.vertical_rotation = lerp_angle(self.vertical_rotation, self.target_vertical_rotation, t);
            } else {
                self.horizontal_rotation = self.target_horizontal_rotation;
                self.vertical_rotation = self.target_vertical_rotation;
            }

            self.camera.rotation = look_rotation(self.vertical_rotation, self.horizontal_rotation);

            if input.left_pressed {
                requests.select = true;
            }
        }

        if input.was_pressed(KeyCode::Escape) {
            self.is_cursor_locked = !self.is_cursor_locked;
            requests.cursor_lock = Some(self.is_cursor_locked);
            debug!("Cursor lock toggled to {}", self.is_cursor_locked);
        }

        requests
    }

    /// Casts from the centre of the screen. Clicking any part of a card still in the deck
    /// deals the player a card.
    pub fn handle_selection(
        &self,
        scene: &mut Scene,
        card_engine: &mut CardEngine,
        screen: (f32, f32),
    ) -> Option<RaycastHit> {
        let ray = self.center_ray(screen);
        let hit = raycast(scene, &ray, self.settings.selection_range, self.settings.selectable_layers)?;

        let name = scene.get(hit.object).map(|o| o.name.as_str()).unwrap_or("<unknown>");
        info!("Hit object: {}", name);
        self.on_object_selected(scene, &hit);

        if let Some(parent) = scene.parent(hit.object) {
            if card_engine.is_deck_card(parent) {
                if let Err(e) = card_engine.give_player_card(scene) {
                    warn!("Could not deal a card: {}", e);
                }
            }
        }
        Some(hit)
    }

    fn on_object_selected(&self, scene: &Scene, hit: &RaycastHit) {
        if let Some(object) = scene.get(hit.object) {
            debug!(
                "Selected: {} at position {:?} (normal {:?})",
                object.name, hit.point, hit.normal
            );
        }
    }

    pub fn center_ray(&self, screen: (f32, f32)) -> Ray {
        let (width, height) = screen;
        self.camera.screen_point_to_ray(width * 0.5, height * 0.5, width, height)
    }

    pub fn crosshair(&self, screen: (f32, f32)) -> Option<Crosshair> {
        if !(self.settings.show_crosshair && self.is_cursor_locked) {
            return None;
        }
        Some(Crosshair {
            center: (screen.0 * 0.5, screen.1 * 0.5),
            size: self.settings.crosshair_size,
            color: self.settings.crosshair_color,
        })
    }

    pub fn is_cursor_locked(&self) -> bool {
        self.is_cursor_locked
    }

    /// Current (pitch, yaw) in degrees.
    pub fn rotation(&self) -> (f32, f32) {
        (self.vertical_rotation, self.horizontal_rotation)
    }

    /// Target (pitch, yaw) in degrees.
    pub fn target_rotation(&self) -> (f32, f32) {
        (self.target_vertical_rotation, self.target_horizontal_rotation)
    }

    pub fn settings(&self) -> &ViewConfig {
        &self.settings
    }

    pub fn look_direction(&self) -> Vec3 {
        self.camera.forward()
    }
}
