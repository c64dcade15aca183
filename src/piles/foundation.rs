//! Foundations: one ascending same-suit pile per suit.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::core::error::{EngineError, EngineResult};

/// A per-suit pile built strictly Ace to King.
///
/// `push` trusts the caller; use `accepts` (or the validator) first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Foundation {
    suit: Suit,
    cards: Vec<Card>,
}

impl Foundation {
    /// Create an empty foundation for `suit`.
    #[must_use]
    pub fn new(suit: Suit) -> Self {
        Self {
            suit,
            cards: Vec::with_capacity(13),
        }
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Cards bottom (Ace) to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// True if `card` is the next card this pile needs.
    #[must_use]
    pub fn accepts(&self, card: Card) -> bool {
        if card.suit != self.suit {
            return false;
        }
        match self.top_card() {
            None => card.rank == Rank::ACE,
            Some(top) => top.rank.is_one_below(card.rank),
        }
    }

    /// Place `card` on top. The caller has already checked `accepts`.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> EngineResult<Card> {
        self.cards.pop().ok_or(EngineError::EmptyFoundation(self.suit))
    }

    /// True once the King is on top.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.top_card().is_some_and(Card::is_king)
    }
}
