use crate::engine::ObjectId;
use crate::game::cards::card::ACE_VALUE;

pub const BLACKJACK: u32 = 21;

/// Blackjack total: aces count 11 until that would bust, then 1.
pub fn hand_total<I>(values: I) -> u32
where
    I: IntoIterator<Item = u8>,
{
    let mut total = 0u32;
    let mut soft_aces = 0;
    for value in values {
        total += value as u32;
        if value == ACE_VALUE {
            soft_aces += 1;
        }
    }
    while total > BLACKJACK && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }
    total
}

/// Card objects held by one side of the table, in the order they were dealt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hand {
    cards: Vec<ObjectId>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: ObjectId) {
        debug_assert!(!self.cards.contains(&card), "card dealt twice into the same hand");
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[ObjectId] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: ObjectId) -> bool {
        self.cards.contains(&card)
    }

    /// Empties the hand, returning its cards.
    pub fn clear(&mut self) -> Vec<ObjectId> {
        std::mem::take(&mut self.cards)
    }
}
