//! Card values: suits, ranks, colors and the standard deck.
//!
//! ## Key Types
//!
//! - `Suit`: Closed set of four suits with glyph and color
//! - `Rank`: Ace (1) through King (13)
//! - `Card`: Immutable `(suit, rank)` value
//! - `SuitMap`: Fixed per-suit storage (used for foundations)

pub mod suit;
pub mod card;

pub use suit::{Color, Suit, SuitMap};
pub use card::{standard_deck, Card, Rank, DECK_SIZE, RANKS_PER_SUIT};
