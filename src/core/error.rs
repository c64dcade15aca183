//! Engine error taxonomy.
//!
//! Every variant is a caller contract violation: operating on an empty pile
//! the caller should have checked, or executing a move the validator would
//! reject. A player proposing an illegal move is not an error; the validator
//! answers `false` and the shell asks again.

use crate::cards::Suit;
use crate::core::action::Move;
use crate::piles::LaneId;

/// Errors raised by pile operations and move execution.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("{0} is empty")]
    EmptyLane(LaneId),

    #[error("foundation {0} is empty")]
    EmptyFoundation(Suit),

    #[error("waste is empty")]
    EmptyWaste,

    #[error("no open card in {from} continues onto {to}")]
    NoMovableRun { from: LaneId, to: LaneId },

    #[error("move {0} is not legal")]
    InvalidMove(Move),

    #[error("deck must hold each of the 52 cards exactly once: {0}")]
    InvalidDeck(String),
}

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;
