//! Card values: rank, suit and the standard 52-card deck.
//!
//! Cards are plain `Copy` values with no identity beyond `(suit, rank)`.
//! Color and display text are derived from the fields on demand.

use serde::{Deserialize, Serialize};

use super::suit::{Color, Suit};

/// Number of ranks in a suit.
pub const RANKS_PER_SUIT: u8 = 13;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Card rank from Ace (1) to King (13).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank, returning `None` outside 1..=13.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= RANKS_PER_SUIT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Numeric value (1 = Ace, 13 = King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// All ranks from Ace to King.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=RANKS_PER_SUIT).map(Rank)
    }

    /// The next rank up, or `None` for a King.
    #[must_use]
    pub const fn next(self) -> Option<Rank> {
        Rank::new(self.0 + 1)
    }

    /// True if this rank is exactly one below `other`.
    #[must_use]
    pub const fn is_one_below(self, other: Rank) -> bool {
        self.0 + 1 == other.0
    }

    /// Display text: `A`, `2`..`10`, `J`, `Q`, `K`.
    #[must_use]
    pub fn display_text(self) -> String {
        match self.0 {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            n => n.to_string(),
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("rank {} outside 1..=13", value))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_text())
    }
}

/// An immutable playing card.
///
/// ```
/// use klondike_engine::cards::{Card, Color, Rank, Suit};
///
/// let card = Card::new(Suit::Hearts, Rank::QUEEN);
/// assert_eq!(card.color(), Color::Red);
/// assert_eq!(card.to_string(), "QH");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub fn display_rank(self) -> String {
        self.rank.display_text()
    }

    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.rank.value() == Rank::ACE.value()
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        self.rank.value() == Rank::KING.value()
    }

    /// Tableau stacking rule: this card may sit on `target` if it is exactly
    /// one rank lower and of the opposite color.
    #[must_use]
    pub fn stacks_on(self, target: Card) -> bool {
        self.rank.is_one_below(target.rank) && self.color() != target.color()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Build an unshuffled deck: Clubs Ace..King, then Diamonds, Hearts, Spades.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::all().map(move |rank| Card::new(suit, rank)))
        .collect()
}
