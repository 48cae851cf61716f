//! Turn resolver state machine.
//!
//! ```text
//!            select(a)               select(b)
//!   Idle ────────────► OneSelected ────────────► Resolving
//!    ▲                                              │
//!    └──────────────── commit(resolution) ◄─────────┘
//! ```
//!
//! The resolver decides outcomes immediately but applies them only on
//! `commit`, which the engine schedules after the match or mismatch delay.
//! Until then the two cards stay face-up and further picks are refused, so
//! at most two unmatched cards are ever revealed at once.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::CardId;

/// Result of comparing two picked cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairOutcome {
    /// Same symbol: both cards lock face-up.
    Match,
    /// Different symbols: both cards flip back.
    Mismatch,
}

/// A decided but not yet applied pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    /// First card picked.
    pub first: CardId,
    /// Second card picked.
    pub second: CardId,
    /// What happens to both cards on commit.
    pub outcome: PairOutcome,
}

impl Resolution {
    /// Is this a matching pair?
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.outcome == PairOutcome::Match
    }
}

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No card picked.
    #[default]
    Idle,
    /// One card face-up, waiting for its partner.
    OneSelected(CardId),
    /// Two cards face-up, waiting for the scheduled commit.
    Resolving(Resolution),
}

/// Why a pick was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// No session has been started.
    NoSession,
    /// The id is not on the board.
    UnknownCard,
    /// The card is already face-up.
    AlreadyRevealed,
    /// The card is part of a found pair.
    AlreadyMatched,
    /// Two cards are waiting to resolve.
    ResolutionPending,
    /// Every pair has been found.
    SessionComplete,
}

/// What a pick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// First card of a pair turned face-up.
    Revealed(CardId),
    /// Second card turned face-up; the pair resolves after a delay.
    PairPending(Resolution),
    /// Nothing changed.
    Rejected(RejectReason),
}

impl SelectOutcome {
    /// Did the pick change state?
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, SelectOutcome::Rejected(_))
    }
}

/// Drives one session's turns over its deck.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TurnResolver {
    phase: TurnPhase,
}

impl TurnResolver {
    /// A resolver with nothing picked.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Is a pair waiting to commit?
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        matches!(self.phase, TurnPhase::Resolving(_))
    }

    /// Picked-but-unresolved cards, in pick order.
    #[must_use]
    pub fn selection(&self) -> SmallVec<[CardId; 2]> {
        match self.phase {
            TurnPhase::Idle => SmallVec::new(),
            TurnPhase::OneSelected(first) => smallvec::smallvec![first],
            TurnPhase::Resolving(r) => smallvec::smallvec![r.first, r.second],
        }
    }

    /// Pick a card.
    ///
    /// Reveals the card if it may be picked. On the second pick of a turn
    /// the pair is compared and the returned `Resolution` must later be
    /// passed to `commit`.
    pub fn select(&mut self, deck: &mut Vector<Card>, id: CardId) -> SelectOutcome {
        let first = match self.phase {
            TurnPhase::Idle => None,
            TurnPhase::OneSelected(first) => Some(first),
            TurnPhase::Resolving(_) => {
                return SelectOutcome::Rejected(RejectReason::ResolutionPending);
            }
        };

        let Some(card) = deck.get_mut(id.index()) else {
            return SelectOutcome::Rejected(RejectReason::UnknownCard);
        };
        if card.is_matched {
            return SelectOutcome::Rejected(RejectReason::AlreadyMatched);
        }
        if card.is_revealed {
            return SelectOutcome::Rejected(RejectReason::AlreadyRevealed);
        }
        card.reveal();

        match first {
            None => {
                self.phase = TurnPhase::OneSelected(id);
                SelectOutcome::Revealed(id)
            }
            Some(first) => {
                let outcome = match (deck.get(first.index()), deck.get(id.index())) {
                    (Some(a), Some(b)) if a.pairs_with(b) => PairOutcome::Match,
                    _ => PairOutcome::Mismatch,
                };
                let resolution = Resolution { first, second: id, outcome };
                self.phase = TurnPhase::Resolving(resolution);
                SelectOutcome::PairPending(resolution)
            }
        }
    }

    /// Apply a pending resolution and return to `Idle`.
    ///
    /// Returns false, changing nothing, if `resolution` is not the pair
    /// currently pending.
    pub fn commit(&mut self, deck: &mut Vector<Card>, resolution: Resolution) -> bool {
        if self.phase != TurnPhase::Resolving(resolution) {
            return false;
        }

        for id in [resolution.first, resolution.second] {
            if let Some(card) = deck.get_mut(id.index()) {
                match resolution.outcome {
                    PairOutcome::Match => card.mark_matched(),
                    PairOutcome::Mismatch => card.hide(),
                }
            }
        }
        self.phase = TurnPhase::Idle;
        true
    }
}
