//! Move representation: a source and a destination location.
//!
//! The engine only accepts structured moves. Turning player text such as
//! `"7 3"` or `"P H"` into a `Move` is the shell's job.
//!
//! ## Example
//!
//! ```
//! use klondike_engine::cards::Suit;
//! use klondike_engine::core::{Location, Move};
//! use klondike_engine::piles::LaneId;
//!
//! // Waste onto the Hearts foundation
//! let to_foundation = Move::new(Location::Waste, Location::Foundation(Suit::Hearts));
//!
//! // Lane 7 onto lane 3
//! let lane_to_lane = Move::new(
//!     Location::Lane(LaneId::new(6)),
//!     Location::Lane(LaneId::new(2)),
//! );
//!
//! assert_eq!(to_foundation.to_string(), "P -> H");
//! assert_eq!(lane_to_lane.to_string(), "7 -> 3");
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Suit;
use crate::piles::LaneId;

/// One endpoint of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Top of the waste pile. Only ever a source.
    Waste,
    /// The foundation for one suit.
    Foundation(Suit),
    /// One of the seven tableau lanes.
    Lane(LaneId),
}

impl Location {
    /// All 12 endpoints: waste, the four foundations, the seven lanes.
    pub fn all() -> SmallVec<[Location; 12]> {
        let mut out = SmallVec::new();
        out.push(Location::Waste);
        out.extend(Suit::ALL.into_iter().map(Location::Foundation));
        out.extend(LaneId::all().map(Location::Lane));
        out
    }

    #[must_use]
    pub fn is_foundation(self) -> bool {
        matches!(self, Location::Foundation(_))
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Waste => write!(f, "P"),
            Location::Foundation(suit) => write!(f, "{}", suit),
            Location::Lane(lane) => write!(f, "{}", lane.number()),
        }
    }
}

/// A proposed relocation from `source` to `destination`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub source: Location,
    pub destination: Location,
}

impl Move {
    #[must_use]
    pub const fn new(source: Location, destination: Location) -> Self {
        Self { source, destination }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// Anything that changes the board: a stock draw or a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Draw,
    Move(Move),
}

impl From<Move> for Action {
    fn from(mv: Move) -> Self {
        Action::Move(mv)
    }
}

/// A recorded action with its position in the game.
///
/// Used for replay and debugging. History is append-only; there is no undo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Zero-based sequence number within the game.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, sequence: u32) -> Self {
        Self { action, sequence }
    }
}
