//! Core engine types: state, moves, configuration, RNG and errors.
//!
//! `GameState` is the single owner of every pile. Everything else in this
//! module describes how a game is configured, dealt and changed.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord, Location, Move};
pub use config::{GameBuilder, GameConfig};
pub use error::{EngineError, EngineResult};
pub use rng::GameRng;
pub use state::GameState;
