//! A blackjack table in 3D: a deck that deals into two hands, and a first-person
//! view that picks cards off the deck with a click.

pub mod engine;
pub mod game;

// Re-export main types for convenience
pub use game::{App, GameConfig};
