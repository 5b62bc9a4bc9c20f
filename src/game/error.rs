use thiserror::Error;

use crate::engine::ObjectId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("the deck has no cards left")]
    DeckEmpty,
    #[error("no round is in session")]
    NotInSession,
    #[error("the opening hands have not been dealt yet")]
    DealPending,
    #[error("card {0:?} has no back child")]
    MissingCardBack(ObjectId),
    #[error("card value {0} is outside 2..=11")]
    InvalidCardValue(u8),
    #[error("object {0:?} does not exist")]
    UnknownObject(ObjectId),
    #[error("object {0:?} is not a card")]
    NotACard(ObjectId),
}

pub type GameResult<T> = Result<T, GameError>;
