//! Klondike rules: move validation and execution.
//!
//! - `validator`: Pure legality checks over `GameState`
//! - `executor`: Single-relocation state transitions, refusing illegal moves
//! - `engine`: `RulesEngine` trait and `KlondikeRules`
//!
//! Execution always runs the validator first, so an illegal move fails
//! with `InvalidMove` instead of corrupting the piles.

pub mod engine;
pub mod executor;
pub mod validator;

pub use engine::{KlondikeRules, RulesEngine};
