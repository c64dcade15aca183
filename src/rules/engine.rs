//! Rules engine trait and the Klondike implementation.
//!
//! A shell drives the game through `RulesEngine`:
//! - `is_legal`: Would this move be accepted?
//! - `execute`: Apply a move, refusing any the validator rejects
//! - `is_won`: Are all foundations complete?
//! - `legal_moves`: Every currently accepted move (for hints)

use crate::core::action::{Location, Move};
use crate::core::error::EngineResult;
use crate::core::state::GameState;

use super::validator;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `is_legal` must never mutate and must not error
/// - `execute` must refuse, without mutating, any move `is_legal` rejects
/// - `legal_moves` has a default that filters every endpoint pair
pub trait RulesEngine {
    /// Check a proposed move.
    fn is_legal(&self, state: &GameState, mv: Move) -> bool;

    /// Apply a legal move, returning how many cards moved.
    fn execute(&self, state: &mut GameState, mv: Move) -> EngineResult<usize>;

    /// Check if the game has been won.
    fn is_won(&self, state: &GameState) -> bool;

    // === Convenience Methods ===

    /// Enumerate every legal move.
    ///
    /// Draws are not included; drawing is always available while the stock
    /// or waste holds cards.
    fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        let locations = Location::all();
        let mut moves = Vec::new();

        for &source in &locations {
            for &destination in &locations {
                let mv = Move::new(source, destination);
                if self.is_legal(state, mv) {
                    moves.push(mv);
                }
            }
        }

        moves
    }

    /// True if any move or draw can still change the board.
    fn can_progress(&self, state: &GameState) -> bool {
        let piles = state.stock_waste();
        piles.has_stock() || piles.waste_len() > 0 || !self.legal_moves(state).is_empty()
    }
}

/// Standard one-card-draw Klondike.
#[derive(Clone, Copy, Debug, Default)]
pub struct KlondikeRules;

impl RulesEngine for KlondikeRules {
    fn is_legal(&self, state: &GameState, mv: Move) -> bool {
        validator::is_legal(state, mv)
    }

    fn execute(&self, state: &mut GameState, mv: Move) -> EngineResult<usize> {
        state.execute(mv)
    }

    fn is_won(&self, state: &GameState) -> bool {
        state.is_won()
    }
}
