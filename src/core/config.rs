//! Game configuration.
//!
//! A game is configured once at deal time:
//! - `seed`: shuffle seed; `None` draws a fresh one (stored in the state)
//! - `record_history`: keep an `ActionRecord` for every draw and move
//!
//! There are no rule variants to configure: the engine plays one-card-draw
//! Klondike with unlimited recycles.

use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Settings for a new game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Shuffle seed. `None` picks a random seed.
    pub seed: Option<u64>,

    /// Record every draw and executed move.
    pub record_history: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            record_history: true,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Turn action history off.
    #[must_use]
    pub fn without_history(mut self) -> Self {
        self.record_history = false;
        self
    }
}

/// Builder for dealing a new game.
///
/// ```
/// use klondike_engine::core::GameBuilder;
///
/// let state = GameBuilder::new().seed(42).build();
/// assert_eq!(state.seed(), Some(42));
/// assert!(!state.is_won());
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn record_history(mut self, record: bool) -> Self {
        self.config.record_history = record;
        self
    }

    /// The configuration built so far.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Shuffle and deal.
    pub fn build(self) -> GameState {
        GameState::new_game(&self.config)
    }
}
