//! Game-specific logic and features.

pub mod cards;
pub mod config;
pub mod error;
pub mod player;
pub mod state;
pub mod world;

// Re-export commonly used types
pub use cards::{CardEngine, CardValue, Hand, RoundOutcome, Seat, Suit};
pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use player::ControlledView;
pub use world::{app::App, camera::Camera, session::TableSession};
