use std::fmt;

use glam::Vec3;

use crate::game::error::{GameError, GameResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Heart,
    Spade,
    Club,
    Diamond,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Heart, Suit::Spade, Suit::Club, Suit::Diamond];

    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Heart | Suit::Diamond)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Heart => "Hearts",
            Suit::Spade => "Spades",
            Suit::Club => "Clubs",
            Suit::Diamond => "Diamonds",
        };
        f.write_str(name)
    }
}

pub const MIN_CARD_VALUE: u8 = 2;
pub const MAX_CARD_VALUE: u8 = 11;
pub const ACE_VALUE: u8 = 11;

/// Game data carried by a card object.
#[derive(Debug, Clone, PartialEq)]
pub struct CardValue {
    value: u8,
    pub suit: Suit,
    pub rank_name: &'static str,
    /// Where the card rests inside the deck, relative to the deck object.
    pub card_position: Vec3,
}

impl CardValue {
    pub fn new(value: u8, suit: Suit, rank_name: &'static str) -> GameResult<Self> {
        if !(MIN_CARD_VALUE..=MAX_CARD_VALUE).contains(&value) {
            return Err(GameError::InvalidCardValue(value));
        }
        Ok(Self {
            value,
            suit,
            rank_name,
            card_position: Vec3::ZERO,
        })
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_ace(&self) -> bool {
        self.value == ACE_VALUE
    }
}

impl fmt::Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank_name, self.suit)
    }
}

static RANKS: [(&str, u8); 13] = [
    ("Two", 2),
    ("Three", 3),
    ("Four", 4),
    ("Five", 5),
    ("Six", 6),
    ("Seven", 7),
    ("Eight", 8),
    ("Nine", 9),
    ("Ten", 10),
    ("Jack", 10),
    ("Queen", 10),
    ("King", 10),
    ("Ace", ACE_VALUE),
];

/// The 52 cards of a blackjack deck, suit by suit.
pub fn standard_deck() -> Vec<CardValue> {
    Suit::ALL
        .iter()
        .flat_map(|suit| {
            RANKS.iter().map(move |(name, value)| CardValue {
                value: *value,
                suit: *suit,
                rank_name: *name,
                card_position: Vec3::ZERO,
            })
        })
        .collect()
}
