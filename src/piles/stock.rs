//! Stock and waste: the face-down reserve and the face-up discard.
//!
//! Both piles are LIFO with the top at the end of the `Vec`. Drawing moves
//! one card from stock to waste. Drawing from an empty stock turns the whole
//! waste back over into the stock instead, which restores the original
//! stock order.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::error::{EngineError, EngineResult};

/// What a draw did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// One card moved from stock to waste.
    Drew(Card),
    /// The stock was empty; this many waste cards went back to the stock.
    Recycled(usize),
    /// Both piles were empty.
    Nothing,
}

/// The stock/waste pair.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockWaste {
    stock: Vec<Card>,
    waste: Vec<Card>,
}

impl StockWaste {
    /// Create from a stock (last element on top) with an empty waste.
    #[must_use]
    pub fn new(stock: Vec<Card>) -> Self {
        Self {
            stock,
            waste: Vec::new(),
        }
    }

    /// Create from explicit piles, both with the top at the end.
    #[must_use]
    pub fn from_piles(stock: Vec<Card>, waste: Vec<Card>) -> Self {
        Self { stock, waste }
    }

    #[must_use]
    pub fn has_stock(&self) -> bool {
        !self.stock.is_empty()
    }

    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    #[must_use]
    pub fn waste_len(&self) -> usize {
        self.waste.len()
    }

    #[must_use]
    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    #[must_use]
    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    #[must_use]
    pub fn waste_top(&self) -> Option<Card> {
        self.waste.last().copied()
    }

    /// Remove the top waste card.
    pub fn pop_waste(&mut self) -> EngineResult<Card> {
        self.waste.pop().ok_or(EngineError::EmptyWaste)
    }

    /// Draw one card, recycle the waste, or do nothing.
    pub fn draw(&mut self) -> DrawOutcome {
        if let Some(card) = self.stock.pop() {
            self.waste.push(card);
            return DrawOutcome::Drew(card);
        }
        if self.waste.is_empty() {
            return DrawOutcome::Nothing;
        }
        let count = self.waste.len();
        self.stock.extend(self.waste.drain(..).rev());
        DrawOutcome::Recycled(count)
    }
}
