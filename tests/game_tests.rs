//! Whole-game integration tests: dealing, drawing, recycling and replay.

use klondike_engine::cards::standard_deck;
use klondike_engine::{
    Action, DrawOutcome, EngineError, Foundation, GameBuilder, GameConfig, GameState,
    KlondikeRules, LaneId, Location, Move, RulesEngine, StockWaste, SuitMap, TableauLane,
};

/// Pick moves deterministically: first legal move every third step, else draw.
fn scripted_play(state: &mut GameState, steps: usize) {
    for step in 0..steps {
        let moves = KlondikeRules.legal_moves(state);
        if step % 3 == 0 && !moves.is_empty() {
            state.play(moves[0]).unwrap();
        } else {
            state.draw();
        }
    }
}

// =============================================================================
// Dealing
// =============================================================================

/// A fresh deal has the Klondike shape and all 52 cards.
#[test]
fn test_fresh_deal() {
    let state = GameBuilder::new().seed(42).build();

    for (i, lane) in state.lanes().iter().enumerate() {
        assert_eq!(lane.len(), i + 1);
        assert_eq!(lane.hidden_count(), i);
        assert_eq!(lane.open_cards().len(), 1);
    }
    assert_eq!(state.stock_waste().stock_len(), 24);
    assert!(state.has_stock());
    assert_eq!(state.waste_top(), None);
    for foundation in state.foundations().values() {
        assert!(foundation.is_empty());
    }
    assert!(state.verify_conservation());
    assert!(!state.is_won());
}

/// Different seeds give different deals; the same seed gives the same deal.
#[test]
fn test_seeded_deals() {
    let a = GameBuilder::new().seed(1).build();
    let b = GameBuilder::new().seed(1).build();
    let c = GameBuilder::new().seed(2).build();

    assert_eq!(a, b);
    assert_ne!(a.lanes(), c.lanes());
}

/// Dealing an explicit deck keeps the stock in deck order.
#[test]
fn test_deal_explicit_deck() {
    let deck = standard_deck();
    let state = GameState::deal(deck.clone()).unwrap();

    assert_eq!(state.seed(), None);
    assert_eq!(state.stock_waste().stock(), &deck[..24]);
}

// =============================================================================
// Drawing and Recycling
// =============================================================================

/// Draw moves the stock top to the waste.
#[test]
fn test_draw_one() {
    let mut state = GameBuilder::new().seed(7).build();
    let top = *state.stock_waste().stock().last().unwrap();

    assert_eq!(state.draw(), DrawOutcome::Drew(top));
    assert_eq!(state.waste_top(), Some(top));
    assert_eq!(state.stock_waste().stock_len(), 23);
    assert!(state.verify_conservation());
}

/// Recycling turns the waste back into the original stock order.
#[test]
fn test_recycle_replays_stock_in_order() {
    let mut state = GameBuilder::new().seed(7).build();

    let first_pass: Vec<_> = (0..24).map(|_| state.draw()).collect();
    assert!(!state.has_stock());
    assert_eq!(state.stock_waste().waste_len(), 24);

    assert_eq!(state.draw(), DrawOutcome::Recycled(24));
    assert_eq!(state.stock_waste().waste_len(), 0);
    assert_eq!(state.waste_top(), None);
    assert!(state.verify_conservation());

    let second_pass: Vec<_> = (0..24).map(|_| state.draw()).collect();
    assert_eq!(first_pass, second_pass);
}

/// Drawing with stock and waste both empty changes nothing.
#[test]
fn test_draw_on_empty_piles_is_noop() {
    let lanes: [TableauLane; 7] = std::array::from_fn(|i| TableauLane::new(LaneId::new(i as u8)));
    let mut state = GameState::from_layout(lanes, SuitMap::new(Foundation::new), StockWaste::default());
    let before = state.clone();

    assert_eq!(state.draw(), DrawOutcome::Nothing);
    assert_eq!(state, before);
    assert!(state.history().is_empty());
}

// =============================================================================
// History and Replay
// =============================================================================

/// Every draw and move lands in the history, in order.
#[test]
fn test_history_sequence_numbers() {
    let mut state = GameBuilder::new().seed(99).build();
    scripted_play(&mut state, 30);

    for (i, record) in state.history().iter().enumerate() {
        assert_eq!(record.sequence as usize, i);
    }
}

/// Replaying the recorded actions from the seed reproduces the game.
#[test]
fn test_replay_reproduces_state() {
    let mut state = GameBuilder::new().seed(2024).build();
    scripted_play(&mut state, 120);

    let actions: Vec<Action> = state.history().iter().map(|r| r.action).collect();
    let replayed = GameState::replay(2024, actions).unwrap();

    assert_eq!(replayed, state);
}

/// Replay stops at the first illegal move.
#[test]
fn test_replay_rejects_illegal_action() {
    // The waste is empty on a fresh deal, so nothing can leave it
    let illegal = Move::new(Location::Waste, Location::Lane(LaneId::new(0)));

    assert_eq!(
        GameState::replay(5, [Action::Move(illegal)]),
        Err(EngineError::InvalidMove(illegal))
    );
}

/// A long scripted game keeps every card exactly once.
#[test]
fn test_scripted_game_conserves_cards() {
    let config = GameConfig::new().with_seed(31337).without_history();
    let mut state = GameState::new_game(&config);

    for _ in 0..10 {
        scripted_play(&mut state, 50);
        assert!(state.verify_conservation());
    }
    assert!(state.history().is_empty());
}

/// A snapshot survives a JSON round trip.
#[test]
fn test_snapshot_serialization() {
    let mut state = GameBuilder::new().seed(8).build();
    scripted_play(&mut state, 20);

    let json = serde_json::to_string(&state).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, state);
    assert_eq!(restored.legal_moves(), state.legal_moves());
}
