//! Cards, hands and the deck manager.

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{standard_deck, CardValue, Suit};
pub use deck::{face_up_rotation, CardEngine, RoundOutcome, Seat};
pub use hand::{hand_total, Hand};
