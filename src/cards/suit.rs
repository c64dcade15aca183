//! Suits, card colors and per-suit storage.
//!
//! ## Suit
//!
//! Closed set of the four French suits. Each suit has a fixed one-character
//! glyph and a fixed color.
//!
//! ## SuitMap
//!
//! Fixed per-suit storage backed by an array for O(1) access.
//! Supports iteration and indexing by `Suit`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Card color. Tableau runs must alternate colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

/// One of the four suits.
///
/// The declaration order is the foundation order: Clubs, Diamonds, Hearts, Spades.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in foundation order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Position of this suit in `Suit::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// One-character glyph used in card text.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    /// Color of every card of this suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Diamonds | Suit::Hearts => Color::Red,
        }
    }

    /// Look up a suit by its glyph.
    #[must_use]
    pub fn from_glyph(glyph: char) -> Option<Suit> {
        Suit::ALL.into_iter().find(|s| s.glyph() == glyph)
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Per-suit data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use klondike_engine::cards::{Suit, SuitMap};
///
/// let mut counts: SuitMap<u32> = SuitMap::new(|_| 0);
/// counts[Suit::Hearts] += 2;
///
/// assert_eq!(counts[Suit::Hearts], 2);
/// assert_eq!(counts[Suit::Spades], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuitMap<T> {
    data: [T; 4],
}

impl<T> SuitMap<T> {
    /// Create a new SuitMap with values from a factory function.
    pub fn new(factory: impl Fn(Suit) -> T) -> Self {
        Self {
            data: Suit::ALL.map(factory),
        }
    }

    /// Get a reference to a suit's data.
    #[must_use]
    pub fn get(&self, suit: Suit) -> &T {
        &self.data[suit.index()]
    }

    /// Get a mutable reference to a suit's data.
    pub fn get_mut(&mut self, suit: Suit) -> &mut T {
        &mut self.data[suit.index()]
    }

    /// Iterate over (Suit, &T) pairs in foundation order.
    pub fn iter(&self) -> impl Iterator<Item = (Suit, &T)> {
        Suit::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over the stored values in foundation order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T: Default> Default for SuitMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Suit> for SuitMap<T> {
    type Output = T;

    fn index(&self, suit: Suit) -> &Self::Output {
        self.get(suit)
    }
}

impl<T> IndexMut<Suit> for SuitMap<T> {
    fn index_mut(&mut self, suit: Suit) -> &mut Self::Output {
        self.get_mut(suit)
    }
}
