//! Runtime settings. Defaults reproduce the table as it was first laid out.

use glam::Vec3;

use crate::engine::LayerMask;

pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    pub clear_color: [f64; 3],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("Card Table"),
            width: 1280,
            height: 720,
            vsync: true,
            clear_color: [0.05, 0.06, 0.08],
        }
    }
}

/// Mouse-look, selection and crosshair settings.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    pub mouse_sensitivity: f32,
    /// Degrees above and below the horizon.
    pub vertical_rotation_limit: f32,
    pub lock_cursor: bool,
    pub smoothing: f32,
    pub use_smoothing: bool,
    pub selection_range: f32,
    pub selectable_layers: LayerMask,
    pub crosshair_color: [f32; 4],
    /// Pixels.
    pub crosshair_size: f32,
    pub show_crosshair: bool,
    pub camera_position: Vec3,
    /// Initial pitch and yaw in degrees; positive pitch looks down.
    pub camera_euler: (f32, f32),
    pub fov_degrees: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 2.0,
            vertical_rotation_limit: 80.0,
            lock_cursor: true,
            smoothing: 10.0,
            use_smoothing: true,
            selection_range: 10.0,
            selectable_layers: LayerMask::ALL,
            crosshair_color: [1.0, 1.0, 1.0, 1.0],
            crosshair_size: 3.0,
            show_crosshair: true,
            camera_position: Vec3::new(3.0, 2.6, -3.2),
            camera_euler: (35.0, 180.0),
            fov_degrees: 60.0,
        }
    }
}

/// Geometry of the table, the deck and the hands.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Where the deck comes to rest once laid out.
    pub deck_position: Vec3,
    /// Height gained per card when stacking the deck.
    pub card_stack_step: f32,
    /// Width and length of a card.
    pub card_size: (f32, f32),
    pub table_size: Vec3,
    pub table_center: Vec3,
    pub player_hand_origin: Vec3,
    pub computer_hand_origin: Vec3,
    /// Direction successive hand slots are laid out in.
    pub slot_direction: Vec3,
    pub slot_spacing: f32,
    pub card_layer: u32,
    pub card_back_color: [f32; 4],
    pub card_face_color: [f32; 4],
    pub red_suit_tint: [f32; 4],
    pub black_suit_tint: [f32; 4],
    pub table_color: [f32; 4],
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            deck_position: Vec3::new(4.0, 0.976, 0.0),
            card_stack_step: 0.002,
            card_size: (0.63, 0.88),
            table_size: Vec3::new(9.0, 0.1, 5.0),
            table_center: Vec3::new(2.5, 0.926, 0.0),
            player_hand_origin: Vec3::new(3.8, 0.976, -1.3),
            computer_hand_origin: Vec3::new(3.8, 0.976, 1.3),
            slot_direction: Vec3::NEG_X,
            slot_spacing: 0.7,
            card_layer: 8,
            card_back_color: [0.55, 0.08, 0.12, 1.0],
            card_face_color: [0.95, 0.95, 0.92, 1.0],
            red_suit_tint: [0.85, 0.1, 0.1, 1.0],
            black_suit_tint: [0.1, 0.1, 0.12, 1.0],
            table_color: [0.05, 0.35, 0.15, 1.0],
        }
    }
}

/// Timing of the deal sequence, in seconds.
#[derive(Debug, Clone)]
pub struct DealConfig {
    /// Wait between starting a round and the opening deal.
    pub deal_delay: f32,
    /// Stagger between cards of the opening deal.
    pub deal_interval: f32,
    pub move_duration: f32,
    /// The computer keeps drawing below this total.
    pub computer_stands_on: u32,
    pub rng_seed: Option<u64>,
}

impl Default for DealConfig {
    fn default() -> Self {
        Self {
            deal_delay: 1.0,
            deal_interval: 0.3,
            move_duration: 0.5,
            computer_stands_on: 17,
            rng_seed: None,
        }
    }
}

#[derive(Default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub view: ViewConfig,
    pub table: TableConfig,
    pub deal: DealConfig,
}
