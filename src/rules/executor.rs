//! Move execution.
//!
//! Performs exactly one relocation per move. Every move is checked with the
//! validator first, so a rejected move fails with `InvalidMove` and nothing
//! changes.

use crate::cards::Card;
use crate::core::action::{Location, Move};
use crate::core::error::{EngineError, EngineResult};
use crate::core::state::GameState;

use super::validator;

/// Apply `mv` to `state`, returning how many cards moved.
///
/// Fails with `InvalidMove` whenever `validator::is_legal` rejects `mv`,
/// including empty sources and unknown lanes. Every failure leaves `state`
/// unchanged.
pub fn execute(state: &mut GameState, mv: Move) -> EngineResult<usize> {
    if !validator::is_legal(state, mv) {
        return Err(EngineError::InvalidMove(mv));
    }
    match (mv.source, mv.destination) {
        (_, Location::Waste) | (Location::Foundation(_), Location::Foundation(_)) => {
            Err(EngineError::InvalidMove(mv))
        }
        (Location::Lane(from), Location::Lane(to)) => {
            let (source, dest) = state.lane_pair_mut(from, to);
            source.transfer_run_to(dest)
        }
        (source, Location::Foundation(suit)) => {
            let card = take_top(state, source)?;
            state.foundation_mut(suit).push(card);
            Ok(1)
        }
        (source, Location::Lane(to)) => {
            let card = take_top(state, source)?;
            state.lane_mut(to).append(card);
            Ok(1)
        }
    }
}

/// Pop the top card of a single-card source.
fn take_top(state: &mut GameState, source: Location) -> EngineResult<Card> {
    match source {
        Location::Waste => state.piles_mut().pop_waste(),
        Location::Foundation(suit) => state.foundation_mut(suit).pop(),
        Location::Lane(id) => state.lane_mut(id).remove_top(),
    }
}
