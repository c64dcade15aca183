//! # klondike-engine
//!
//! Game-state and move-legality engine for one-card-draw Klondike patience.
//!
//! ## Design Principles
//!
//! 1. **Structured moves only**: The engine takes a `Move { source, destination }`.
//!    Parsing player input and rendering the board belong to the caller.
//!
//! 2. **Validate, then execute**: Illegal player moves are a `false` from the
//!    validator, never an error. Errors are reserved for contract violations.
//!
//! 3. **One owner**: `GameState` owns every pile; each card is in exactly one
//!    place at all times.
//!
//! ## Example
//!
//! ```
//! use klondike_engine::{GameBuilder, KlondikeRules, RulesEngine};
//!
//! let mut state = GameBuilder::new().seed(2024).build();
//!
//! // Play the first legal move if there is one, otherwise draw
//! match KlondikeRules.legal_moves(&state).first() {
//!     Some(&mv) => {
//!         state.play(mv).unwrap();
//!     }
//!     None => {
//!         state.draw();
//!     }
//! }
//!
//! assert!(state.verify_conservation());
//! ```
//!
//! ## Modules
//!
//! - `cards`: Suits, ranks, cards and the standard deck
//! - `piles`: Tableau lanes, foundations, stock and waste
//! - `core`: Game state, moves, configuration, RNG, errors
//! - `rules`: Move validation and execution

pub mod cards;
pub mod piles;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{Card, Color, Rank, Suit, SuitMap};

pub use crate::piles::{
    DrawOutcome, Foundation, LaneId, LaneSlot, StockWaste, TableauLane, LANE_COUNT,
};

pub use crate::core::{
    Action, ActionRecord, EngineError, EngineResult, GameBuilder, GameConfig, GameRng, GameState,
    Location, Move,
};

pub use crate::rules::{KlondikeRules, RulesEngine};
