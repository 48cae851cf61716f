//! Read model for the presentation layer.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{CardId, SessionId};
use crate::deck::Difficulty;

/// Everything a view needs to draw one frame.
///
/// Cloning is cheap: `cards` is a persistent vector that shares structure
/// with the live deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Session this snapshot was taken from.
    pub session_id: SessionId,
    /// Difficulty of the session.
    pub difficulty: Difficulty,
    /// Grid dimension N for an N×N layout.
    pub grid_size: usize,
    /// Cards in board order.
    pub cards: Vector<Card>,
    /// Picked-but-unresolved cards.
    pub selection: Vec<CardId>,
    /// Completed two-card picks.
    pub moves: u32,
    /// Pairs found.
    pub matches: u32,
    /// Pairs on the board.
    pub pairs_total: u32,
    /// Pairs still hidden.
    pub pairs_remaining: u32,
    /// Whole seconds of play.
    pub elapsed_seconds: u64,
    /// All pairs found.
    pub is_complete: bool,
}

impl SessionSnapshot {
    /// Look up a card.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Cards grouped into rows of `grid_size`.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&Card>> + '_ {
        let n = self.grid_size;
        (0..n).map(move |row| self.cards.iter().skip(row * n).take(n).collect())
    }
}
