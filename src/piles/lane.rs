//! Tableau lanes: the seven playing columns.
//!
//! A lane is one flat `Vec<Card>` (index 0 = bottom) plus `open_index`, the
//! position of the deepest face-up card. Cards below `open_index` are face
//! down. Keeping a single boundary index instead of two containers makes
//! the reveal rule a decrement.
//!
//! Invariants maintained by every operation:
//! - an empty lane has `open_index == 0`
//! - a non-empty lane has `open_index <= len - 1`, so its top card is face up
//!
//! Alternating colors inside the open portion are *not* an invariant. A
//! lane only has to satisfy the stacking rule at the moment cards land on it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::error::{EngineError, EngineResult};

/// Number of tableau lanes.
pub const LANE_COUNT: usize = 7;

/// Tableau lane identifier.
///
/// Stored 0-based; shown to players 1-based (`Lane 1` .. `Lane 7`).
///
/// `new` does not range-check, so a `Move` may name a lane that does not
/// exist; the validator rejects such moves. Deserialization only accepts
/// indices below `LANE_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LaneId(u8);

impl LaneId {
    /// Create a lane ID from a 0-based index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// True if this ID names one of the seven lanes.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.index() < LANE_COUNT
    }

    /// Create a lane ID from the 1-based number players use.
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        (1..=LANE_COUNT as u8).contains(&number).then(|| Self(number - 1))
    }

    /// 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 1-based number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// Iterate over all seven lane IDs.
    pub fn all() -> impl Iterator<Item = LaneId> {
        (0..LANE_COUNT as u8).map(LaneId)
    }
}

impl TryFrom<u8> for LaneId {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        let id = LaneId(index);
        if id.is_valid() {
            Ok(id)
        } else {
            Err(format!("lane index must be below {}, got {}", LANE_COUNT, index))
        }
    }
}

impl From<LaneId> for u8 {
    fn from(id: LaneId) -> u8 {
        id.0
    }
}

impl std::fmt::Display for LaneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lane {}", self.number())
    }
}

/// What a renderer sees at one row of a lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaneSlot {
    /// Past the top of the lane.
    Blank,
    FaceDown(Card),
    FaceUp(Card),
}

impl LaneSlot {
    /// The card, if the player is allowed to see it.
    #[must_use]
    pub fn visible_card(self) -> Option<Card> {
        match self {
            LaneSlot::FaceUp(card) => Some(card),
            LaneSlot::FaceDown(_) | LaneSlot::Blank => None,
        }
    }
}

/// One tableau column with a hidden/open split.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLane")]
pub struct TableauLane {
    id: LaneId,
    cards: Vec<Card>,
    open_index: usize,
}

/// Unchecked wire form of a lane; converted through `TryFrom`.
#[derive(Deserialize)]
struct RawLane {
    id: LaneId,
    cards: Vec<Card>,
    open_index: usize,
}

impl TryFrom<RawLane> for TableauLane {
    type Error = String;

    fn try_from(raw: RawLane) -> Result<Self, Self::Error> {
        let max_open = raw.cards.len().saturating_sub(1);
        if raw.open_index > max_open {
            return Err(format!(
                "{} has {} card(s) but open_index {}",
                raw.id,
                raw.cards.len(),
                raw.open_index
            ));
        }
        Ok(Self {
            id: raw.id,
            cards: raw.cards,
            open_index: raw.open_index,
        })
    }
}

impl TableauLane {
    /// Create an empty lane.
    #[must_use]
    pub fn new(id: LaneId) -> Self {
        Self {
            id,
            cards: Vec::new(),
            open_index: 0,
        }
    }

    /// Create a lane as dealt: only the last card face up.
    #[must_use]
    pub fn dealt(id: LaneId, cards: Vec<Card>) -> Self {
        let open_index = cards.len().saturating_sub(1);
        Self { id, cards, open_index }
    }

    /// Create a lane with an explicit split point.
    ///
    /// `open_index` is clamped so the top card is face up.
    #[must_use]
    pub fn with_open_index(id: LaneId, cards: Vec<Card>, open_index: usize) -> Self {
        let open_index = open_index.min(cards.len().saturating_sub(1));
        Self { id, cards, open_index }
    }

    #[must_use]
    pub fn id(&self) -> LaneId {
        self.id
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Index of the deepest face-up card.
    #[must_use]
    pub fn open_index(&self) -> usize {
        self.open_index
    }

    /// Number of face-down cards.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.open_index
    }

    /// All cards, bottom to top, regardless of face.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The face-up portion, bottom to top.
    #[must_use]
    pub fn open_cards(&self) -> &[Card] {
        self.cards.get(self.open_index..).unwrap_or(&[])
    }

    /// The top (last) card.
    pub fn top_card(&self) -> EngineResult<Card> {
        self.cards.last().copied().ok_or(EngineError::EmptyLane(self.id))
    }

    /// The deepest face-up card: the head of the longest movable run.
    pub fn first_open_card(&self) -> EngineResult<Card> {
        self.cards
            .get(self.open_index)
            .copied()
            .ok_or(EngineError::EmptyLane(self.id))
    }

    /// The card at `index` with its face, or `Blank` past the top.
    #[must_use]
    pub fn card_at(&self, index: usize) -> LaneSlot {
        match self.cards.get(index) {
            None => LaneSlot::Blank,
            Some(&card) if index < self.open_index => LaneSlot::FaceDown(card),
            Some(&card) => LaneSlot::FaceUp(card),
        }
    }

    /// Iterate over every slot, bottom to top.
    pub fn slots(&self) -> impl Iterator<Item = LaneSlot> + '_ {
        (0..self.cards.len()).map(|i| self.card_at(i))
    }

    /// Remove and return the top card, revealing the next one if the top
    /// was the only face-up card.
    pub fn remove_top(&mut self) -> EngineResult<Card> {
        let card = self.cards.pop().ok_or(EngineError::EmptyLane(self.id))?;
        if self.open_index == self.cards.len() {
            self.open_index = self.open_index.saturating_sub(1);
        }
        if self.cards.is_empty() {
            self.open_index = 0;
        }
        Ok(card)
    }

    /// Push a face-up card onto the top.
    pub fn append(&mut self, card: Card) {
        if self.cards.is_empty() {
            self.open_index = 0;
        }
        self.cards.push(card);
    }

    /// Where a run onto `target` would be cut.
    ///
    /// Scans the open portion from `open_index` upward and returns the first
    /// index whose card stacks on `target`, so the longest matching run wins.
    /// With no target (empty destination) the cut is `open_index`. Returns
    /// `None` for an empty lane or when no open card matches.
    #[must_use]
    pub fn run_cut_onto(&self, target: Option<Card>) -> Option<usize> {
        if self.cards.is_empty() {
            return None;
        }
        match target {
            None => Some(self.open_index),
            Some(target) => (self.open_index..self.cards.len())
                .find(|&i| self.cards[i].stacks_on(target)),
        }
    }

    /// Move the longest legal face-up run from this lane onto `dest`.
    ///
    /// Returns the number of cards moved. On error neither lane changes.
    /// Does not check the King rule for empty destinations; that is the
    /// validator's job.
    pub fn transfer_run_to(&mut self, dest: &mut TableauLane) -> EngineResult<usize> {
        if self.cards.is_empty() {
            return Err(EngineError::EmptyLane(self.id));
        }
        let target = dest.cards.last().copied();
        let cut = self
            .run_cut_onto(target)
            .ok_or(EngineError::NoMovableRun {
                from: self.id,
                to: dest.id,
            })?;

        let run: SmallVec<[Card; 13]> = self.cards.drain(cut..).collect();
        if cut == self.open_index {
            self.open_index = self.open_index.saturating_sub(1);
        }
        if self.cards.is_empty() {
            self.open_index = 0;
        }

        if dest.cards.is_empty() {
            dest.open_index = 0;
        }
        dest.cards.extend(run.iter().copied());

        log::trace!("moved {} card(s) from {} to {}", run.len(), self.id, dest.id);
        Ok(run.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn card(suit: Suit, rank: u8) -> Card {
        Card::new(suit, Rank::new(rank).unwrap())
    }

    #[test]
    fn test_lane_id_numbering() {
        let lane = LaneId::new(0);
        assert_eq!(lane.number(), 1);
        assert_eq!(format!("{}", lane), "Lane 1");

        assert_eq!(LaneId::from_number(7), Some(LaneId::new(6)));
        assert_eq!(LaneId::from_number(0), None);
        assert_eq!(LaneId::from_number(8), None);
        assert_eq!(LaneId::all().count(), LANE_COUNT);
    }

    #[test]
    fn test_dealt_lane_shows_only_top() {
        let lane = TableauLane::dealt(
            LaneId::new(2),
            vec![card(Suit::Clubs, 3), card(Suit::Hearts, 9), card(Suit::Spades, 12)],
        );

        assert_eq!(lane.open_index(), 2);
        assert_eq!(lane.card_at(0), LaneSlot::FaceDown(card(Suit::Clubs, 3)));
        assert_eq!(lane.card_at(2), LaneSlot::FaceUp(card(Suit::Spades, 12)));
        assert_eq!(lane.card_at(3), LaneSlot::Blank);
        assert_eq!(lane.first_open_card(), Ok(card(Suit::Spades, 12)));
    }

    #[test]
    fn test_empty_lane_errors() {
        let mut lane = TableauLane::new(LaneId::new(4));

        assert_eq!(lane.top_card(), Err(EngineError::EmptyLane(LaneId::new(4))));
        assert_eq!(lane.first_open_card(), Err(EngineError::EmptyLane(LaneId::new(4))));
        assert_eq!(lane.remove_top(), Err(EngineError::EmptyLane(LaneId::new(4))));
        assert_eq!(lane.card_at(0), LaneSlot::Blank);
    }

    #[test]
    fn test_remove_top_reveals_next_card() {
        let mut lane = TableauLane::dealt(
            LaneId::new(1),
            vec![card(Suit::Diamonds, 5), card(Suit::Clubs, 10)],
        );

        let removed = lane.remove_top().unwrap();
        assert_eq!(removed, card(Suit::Clubs, 10));
        assert_eq!(lane.open_index(), 0);
        assert_eq!(lane.card_at(0), LaneSlot::FaceUp(card(Suit::Diamonds, 5)));

        lane.remove_top().unwrap();
        assert!(lane.is_empty());
        assert_eq!(lane.open_index(), 0);
    }

    #[test]
    fn test_remove_top_keeps_split_with_longer_run() {
        let mut lane = TableauLane::with_open_index(
            LaneId::new(3),
            vec![card(Suit::Clubs, 2), card(Suit::Hearts, 9), card(Suit::Spades, 8)],
            1,
        );

        lane.remove_top().unwrap();
        assert_eq!(lane.open_index(), 1);
        assert_eq!(lane.hidden_count(), 1);
    }

    #[test]
    fn test_append_to_empty_lane_is_face_up() {
        let mut lane = TableauLane::new(LaneId::new(0));
        lane.append(card(Suit::Hearts, 13));

        assert_eq!(lane.open_index(), 0);
        assert_eq!(lane.card_at(0), LaneSlot::FaceUp(card(Suit::Hearts, 13)));
    }

    #[test]
    fn test_with_open_index_clamps() {
        let lane = TableauLane::with_open_index(
            LaneId::new(0),
            vec![card(Suit::Clubs, 1), card(Suit::Clubs, 2)],
            10,
        );
        assert_eq!(lane.open_index(), 1);
    }

    #[test]
    fn test_transfer_partial_run_keeps_split() {
        // Hidden 2C, open 10S 9H 8C; destination top 9D takes 8C only
        let mut source = TableauLane::with_open_index(
            LaneId::new(0),
            vec![
                card(Suit::Clubs, 2),
                card(Suit::Spades, 10),
                card(Suit::Hearts, 9),
                card(Suit::Clubs, 8),
            ],
            1,
        );
        let mut dest = TableauLane::dealt(LaneId::new(1), vec![card(Suit::Diamonds, 9)]);

        let moved = source.transfer_run_to(&mut dest).unwrap();

        assert_eq!(moved, 1);
        assert_eq!(source.len(), 3);
        assert_eq!(source.open_index(), 1);
        assert_eq!(dest.top_card(), Ok(card(Suit::Clubs, 8)));
    }

    #[test]
    fn test_transfer_whole_run_reveals() {
        let mut source = TableauLane::with_open_index(
            LaneId::new(0),
            vec![card(Suit::Clubs, 2), card(Suit::Spades, 7), card(Suit::Hearts, 6)],
            1,
        );
        let mut dest = TableauLane::dealt(LaneId::new(1), vec![card(Suit::Hearts, 8)]);

        let moved = source.transfer_run_to(&mut dest).unwrap();

        assert_eq!(moved, 2);
        assert_eq!(source.len(), 1);
        assert_eq!(source.open_index(), 0);
        assert_eq!(source.card_at(0), LaneSlot::FaceUp(card(Suit::Clubs, 2)));
        assert_eq!(
            dest.open_cards(),
            &[card(Suit::Hearts, 8), card(Suit::Spades, 7), card(Suit::Hearts, 6)]
        );
    }

    #[test]
    fn test_transfer_to_empty_lane_moves_entire_open_run() {
        let mut source = TableauLane::with_open_index(
            LaneId::new(5),
            vec![card(Suit::Clubs, 4), card(Suit::Spades, 13), card(Suit::Hearts, 12)],
            1,
        );
        let mut dest = TableauLane::new(LaneId::new(6));

        let moved = source.transfer_run_to(&mut dest).unwrap();

        assert_eq!(moved, 2);
        assert_eq!(dest.open_index(), 0);
        assert_eq!(dest.first_open_card(), Ok(card(Suit::Spades, 13)));
        assert_eq!(source.open_index(), 0);
        assert_eq!(source.len(), 1);
    }

    #[test]
    fn test_transfer_empties_source() {
        let mut source = TableauLane::dealt(LaneId::new(0), vec![card(Suit::Spades, 7)]);
        let mut dest = TableauLane::dealt(LaneId::new(1), vec![card(Suit::Diamonds, 8)]);

        source.transfer_run_to(&mut dest).unwrap();

        assert!(source.is_empty());
        assert_eq!(source.open_index(), 0);
        assert_eq!(dest.len(), 2);
    }

    #[test]
    fn test_transfer_without_match_leaves_lanes_untouched() {
        let mut source = TableauLane::dealt(
            LaneId::new(0),
            vec![card(Suit::Clubs, 1), card(Suit::Hearts, 7)],
        );
        let mut dest = TableauLane::dealt(LaneId::new(1), vec![card(Suit::Diamonds, 8)]);
        let source_before = source.clone();
        let dest_before = dest.clone();

        let err = source.transfer_run_to(&mut dest).unwrap_err();

        assert_eq!(
            err,
            EngineError::NoMovableRun {
                from: LaneId::new(0),
                to: LaneId::new(1)
            }
        );
        assert_eq!(source, source_before);
        assert_eq!(dest, dest_before);
    }

    #[test]
    fn test_transfer_from_empty_lane() {
        let mut source = TableauLane::new(LaneId::new(2));
        let mut dest = TableauLane::new(LaneId::new(3));

        assert_eq!(
            source.transfer_run_to(&mut dest),
            Err(EngineError::EmptyLane(LaneId::new(2)))
        );
    }

    #[test]
    fn test_run_cut_prefers_deepest_match() {
        // Open run 7S 6H 7C 6D: both 7S (index 0) and 7C (index 2) fit on 8H
        let lane = TableauLane::with_open_index(
            LaneId::new(0),
            vec![
                card(Suit::Spades, 7),
                card(Suit::Hearts, 6),
                card(Suit::Clubs, 7),
                card(Suit::Diamonds, 6),
            ],
            0,
        );

        assert_eq!(lane.run_cut_onto(Some(card(Suit::Hearts, 8))), Some(0));
        assert_eq!(lane.run_cut_onto(Some(card(Suit::Spades, 7))), Some(1));
        assert_eq!(lane.run_cut_onto(None), Some(0));
        assert_eq!(lane.run_cut_onto(Some(card(Suit::Clubs, 2))), None);
    }

    #[test]
    fn test_hidden_cards_never_cut() {
        // 7S is face down, so it cannot head a run onto 8H
        let lane = TableauLane::dealt(
            LaneId::new(0),
            vec![card(Suit::Spades, 7), card(Suit::Diamonds, 2)],
        );
        assert_eq!(lane.run_cut_onto(Some(card(Suit::Hearts, 8))), None);
    }

    #[test]
    fn test_lane_id_serde_rejects_unknown_lane() {
        let json = serde_json::to_string(&LaneId::new(6)).unwrap();
        assert_eq!(json, "6");
        assert_eq!(serde_json::from_str::<LaneId>(&json).unwrap(), LaneId::new(6));

        assert!(serde_json::from_str::<LaneId>("7").is_err());
        assert!(!LaneId::new(7).is_valid());
    }

    #[test]
    fn test_lane_serialization_round_trip() {
        let lane = TableauLane::with_open_index(
            LaneId::new(3),
            vec![card(Suit::Clubs, 2), card(Suit::Hearts, 9), card(Suit::Spades, 8)],
            1,
        );

        let json = serde_json::to_string(&lane).unwrap();
        let deserialized: TableauLane = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, lane);
    }

    #[test]
    fn test_malformed_lane_snapshot_is_rejected() {
        // One card, but the split claims five hidden cards
        let past_top = r#"{"id":0,"cards":[{"suit":"Clubs","rank":1}],"open_index":5}"#;
        assert!(serde_json::from_str::<TableauLane>(past_top).is_err());

        let empty_with_split = r#"{"id":0,"cards":[],"open_index":1}"#;
        assert!(serde_json::from_str::<TableauLane>(empty_with_split).is_err());

        let empty = r#"{"id":0,"cards":[],"open_index":0}"#;
        let lane: TableauLane = serde_json::from_str(empty).unwrap();
        assert!(lane.open_cards().is_empty());
    }

    #[test]
    fn test_remove_top_from_single_open_card() {
        let mut lane = TableauLane::with_open_index(
            LaneId::new(0),
            vec![card(Suit::Clubs, 2), card(Suit::Hearts, 9), card(Suit::Spades, 8)],
            2,
        );

        assert_eq!(lane.remove_top(), Ok(card(Suit::Spades, 8)));
        assert_eq!(lane.open_index(), 1);
        assert_eq!(lane.open_cards(), &[card(Suit::Hearts, 9)]);
    }
}
