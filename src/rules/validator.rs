//! Move legality.
//!
//! Pure functions over `GameState`; nothing here mutates. A rejected move
//! is a plain `false`, never an error.

use crate::cards::Card;
use crate::core::action::{Location, Move};
use crate::core::state::GameState;
use crate::piles::{LaneId, TableauLane};

/// True if `mv` may be executed in `state`.
///
/// A lane ID outside the seven lanes makes the move illegal.
#[must_use]
pub fn is_legal(state: &GameState, mv: Move) -> bool {
    let legal = match (mv.source, mv.destination) {
        (_, Location::Waste) => false,
        (source, destination) if source == destination => false,
        (Location::Foundation(_), Location::Foundation(_)) => false,
        (source, Location::Foundation(suit)) => {
            moving_card(state, source).is_some_and(|card| state.foundation(suit).accepts(card))
        }
        (Location::Lane(from), Location::Lane(to)) => lane_to_lane(state, from, to),
        (source, Location::Lane(to)) => match state.get_lane(to) {
            Some(dest) => moving_card(state, source).is_some_and(|card| fits_lane(dest, card)),
            None => false,
        },
    };
    if !legal {
        log::trace!("rejected {}", mv);
    }
    legal
}

/// The single card a non-run move would take from `source`.
fn moving_card(state: &GameState, source: Location) -> Option<Card> {
    match source {
        Location::Waste => state.waste_top(),
        Location::Foundation(suit) => state.foundation(suit).top_card(),
        Location::Lane(id) => state.get_lane(id)?.top_card().ok(),
    }
}

/// King onto an empty lane, otherwise one lower in the other color.
fn fits_lane(lane: &TableauLane, card: Card) -> bool {
    match lane.top_card() {
        Ok(top) => card.stacks_on(top),
        Err(_) => card.is_king(),
    }
}

fn lane_to_lane(state: &GameState, from: LaneId, to: LaneId) -> bool {
    let (Some(source), Some(dest)) = (state.get_lane(from), state.get_lane(to)) else {
        return false;
    };
    match dest.top_card() {
        // The whole open run moves onto an empty lane, so its head must be a King
        Err(_) => source.first_open_card().is_ok_and(Card::is_king),
        Ok(top) => source.run_cut_onto(Some(top)).is_some(),
    }
}
