//! Game state: every pile of one Klondike game.
//!
//! ## GameState
//!
//! Owns exactly:
//! - 7 tableau lanes
//! - 4 foundations, one per suit
//! - the stock/waste pair
//! - the action history (when enabled)
//!
//! Each of the 52 cards lives in exactly one pile. The state only changes
//! through `draw` and move execution; there are no shared or global piles.
//! One `GameState` is one game. Callers that share it across threads must
//! serialize access themselves.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord, Move};
use super::config::GameConfig;
use super::error::{EngineError, EngineResult};
use super::rng::GameRng;
use crate::cards::{Card, Suit, SuitMap, DECK_SIZE};
use crate::piles::{DrawOutcome, Foundation, LaneId, StockWaste, TableauLane, LANE_COUNT};
use crate::rules::{executor, validator, KlondikeRules, RulesEngine};

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Tableau lanes, indexed by `LaneId`.
    lanes: [TableauLane; LANE_COUNT],

    /// Foundations, indexed by suit.
    foundations: SuitMap<Foundation>,

    /// Stock and waste.
    piles: StockWaste,

    /// Shuffle seed, if this game was dealt from one.
    seed: Option<u64>,

    record_history: bool,

    /// Draws and moves applied so far.
    history: Vector<ActionRecord>,
}

impl GameState {
    /// Shuffle a fresh deck and deal it.
    ///
    /// Without a configured seed a random one is drawn and kept, so the deal
    /// can always be reproduced from `seed()`.
    #[must_use]
    pub fn new_game(config: &GameConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let seed = rng.seed();
        let deck = rng.for_context("deal").shuffled_deck();

        let mut state = Self::deal_cards(deck, config.record_history);
        state.seed = Some(seed);
        log::debug!("dealt new game from seed {}", seed);
        state
    }

    /// Deal a caller-supplied deck.
    ///
    /// The last card of `deck` is the top. Lane 1 gets one card, lane 2
    /// two, up to lane 7; the remaining 24 cards become the stock in deck
    /// order. Fails with `InvalidDeck` unless `deck` holds each card once.
    pub fn deal(deck: Vec<Card>) -> EngineResult<Self> {
        validate_deck(&deck)?;
        Ok(Self::deal_cards(deck, true))
    }

    fn deal_cards(mut deck: Vec<Card>, record_history: bool) -> Self {
        let lanes = std::array::from_fn(|i| {
            let cards: Vec<Card> = (0..=i).filter_map(|_| deck.pop()).collect();
            TableauLane::dealt(LaneId::new(i as u8), cards)
        });

        Self {
            lanes,
            foundations: SuitMap::new(Foundation::new),
            piles: StockWaste::new(deck),
            seed: None,
            record_history,
            history: Vector::new(),
        }
    }

    /// Build a state from explicit piles.
    ///
    /// No conservation check is made, so partial layouts are allowed. Lanes
    /// are reordered by their IDs, which must be the seven lanes once each.
    #[must_use]
    pub fn from_layout(
        mut lanes: [TableauLane; LANE_COUNT],
        foundations: SuitMap<Foundation>,
        piles: StockWaste,
    ) -> Self {
        lanes.sort_by_key(TableauLane::id);
        debug_assert!(
            lanes.iter().enumerate().all(|(i, lane)| lane.id().index() == i),
            "layout must hold each lane id exactly once"
        );
        Self {
            lanes,
            foundations,
            piles,
            seed: None,
            record_history: true,
            history: Vector::new(),
        }
    }

    /// Deal the game for `seed` and apply `actions` in order.
    ///
    /// Every move is validated; the first illegal one aborts the replay.
    pub fn replay(seed: u64, actions: impl IntoIterator<Item = Action>) -> EngineResult<Self> {
        let mut state = Self::new_game(&GameConfig::new().with_seed(seed));
        for action in actions {
            state.apply(action)?;
        }
        Ok(state)
    }

    // === Read-only access ===

    /// Shuffle seed, or `None` for a deal from an explicit deck or layout.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// # Panics
    ///
    /// Panics if `id` is not one of the seven lanes; see `get_lane`.
    #[must_use]
    pub fn lane(&self, id: LaneId) -> &TableauLane {
        &self.lanes[id.index()]
    }

    /// The lane for `id`, or `None` for an unknown lane.
    #[must_use]
    pub fn get_lane(&self, id: LaneId) -> Option<&TableauLane> {
        self.lanes.get(id.index())
    }

    #[must_use]
    pub fn lanes(&self) -> &[TableauLane] {
        &self.lanes
    }

    #[must_use]
    pub fn foundation(&self, suit: Suit) -> &Foundation {
        &self.foundations[suit]
    }

    #[must_use]
    pub fn foundations(&self) -> &SuitMap<Foundation> {
        &self.foundations
    }

    #[must_use]
    pub fn stock_waste(&self) -> &StockWaste {
        &self.piles
    }

    #[must_use]
    pub fn waste_top(&self) -> Option<Card> {
        self.piles.waste_top()
    }

    #[must_use]
    pub fn has_stock(&self) -> bool {
        self.piles.has_stock()
    }

    /// Recorded draws and moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Total cards across every pile.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.all_cards().count()
    }

    /// True if all 52 cards are present exactly once.
    #[must_use]
    pub fn verify_conservation(&self) -> bool {
        let mut seen = FxHashSet::default();
        self.all_cards().all(|card| seen.insert(card)) && seen.len() == DECK_SIZE
    }

    fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        let lanes = self.lanes.iter().flat_map(|l| l.cards().iter());
        let foundations = self.foundations.values().flat_map(|f| f.cards().iter());
        lanes
            .chain(foundations)
            .chain(self.piles.stock().iter())
            .chain(self.piles.waste().iter())
            .copied()
    }

    // === Play ===

    /// Draw from the stock, recycling the waste when the stock is empty.
    pub fn draw(&mut self) -> DrawOutcome {
        let outcome = self.piles.draw();
        match outcome {
            DrawOutcome::Drew(card) => log::debug!("drew {}", card),
            DrawOutcome::Recycled(count) => log::debug!("recycled {} waste card(s) into stock", count),
            DrawOutcome::Nothing => log::debug!("draw with empty stock and waste"),
        }
        if outcome != DrawOutcome::Nothing {
            self.record(Action::Draw);
        }
        outcome
    }

    /// Would `mv` be legal right now? Never mutates.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        validator::is_legal(self, mv)
    }

    /// Execute a move, returning the number of cards relocated.
    ///
    /// A move the validator rejects fails with `InvalidMove` and leaves the
    /// state untouched.
    pub fn execute(&mut self, mv: Move) -> EngineResult<usize> {
        let moved = executor::execute(self, mv)?;
        log::debug!("executed {} ({} card(s))", mv, moved);
        self.record(Action::Move(mv));
        Ok(moved)
    }

    /// Execute a player's move, logging a refusal.
    pub fn play(&mut self, mv: Move) -> EngineResult<usize> {
        self.execute(mv).map_err(|err| {
            log::warn!("refused move {}: {}", mv, err);
            err
        })
    }

    /// Apply a draw or a validated move.
    pub fn apply(&mut self, action: Action) -> EngineResult<()> {
        match action {
            Action::Draw => {
                self.draw();
            }
            Action::Move(mv) => {
                self.play(mv)?;
            }
        }
        Ok(())
    }

    /// Every move the validator currently accepts.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        KlondikeRules.legal_moves(self)
    }

    /// True once every foundation is complete.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.foundations.values().all(Foundation::is_complete)
    }

    fn record(&mut self, action: Action) {
        if self.record_history {
            let sequence = self.history.len() as u32;
            self.history.push_back(ActionRecord::new(action, sequence));
        }
    }

    // === Mutable access for the executor ===

    pub(crate) fn lane_mut(&mut self, id: LaneId) -> &mut TableauLane {
        &mut self.lanes[id.index()]
    }

    /// Two distinct lanes at once. `a` and `b` must differ.
    pub(crate) fn lane_pair_mut(
        &mut self,
        a: LaneId,
        b: LaneId,
    ) -> (&mut TableauLane, &mut TableauLane) {
        let (ai, bi) = (a.index(), b.index());
        debug_assert_ne!(ai, bi);
        if ai < bi {
            let (low, high) = self.lanes.split_at_mut(bi);
            (&mut low[ai], &mut high[0])
        } else {
            let (low, high) = self.lanes.split_at_mut(ai);
            (&mut high[0], &mut low[bi])
        }
    }

    pub(crate) fn foundation_mut(&mut self, suit: Suit) -> &mut Foundation {
        &mut self.foundations[suit]
    }

    pub(crate) fn piles_mut(&mut self) -> &mut StockWaste {
        &mut self.piles
    }
}

/// Check that `deck` is exactly the 52 distinct cards.
fn validate_deck(deck: &[Card]) -> EngineResult<()> {
    if deck.len() != DECK_SIZE {
        return Err(EngineError::InvalidDeck(format!(
            "expected {} cards, got {}",
            DECK_SIZE,
            deck.len()
        )));
    }
    let mut seen = FxHashSet::default();
    for &card in deck {
        if !seen.insert(card) {
            return Err(EngineError::InvalidDeck(format!("{} appears twice", card)));
        }
    }
    Ok(())
}
