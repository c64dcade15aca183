//! Card piles owned by the game state.
//!
//! ## Key Types
//!
//! - `TableauLane`: One of seven columns with a hidden/open split
//! - `LaneId`: Lane identifier (displayed 1-based)
//! - `LaneSlot`: What a renderer sees at one row of a lane
//! - `Foundation`: Per-suit Ace-to-King pile
//! - `StockWaste`: Draw reserve plus waste, with recycling

pub mod lane;
pub mod foundation;
pub mod stock;

pub use lane::{LaneId, LaneSlot, TableauLane, LANE_COUNT};
pub use foundation::Foundation;
pub use stock::{DrawOutcome, StockWaste};
