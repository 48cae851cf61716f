//! Identifiers for cards and sessions.
//!
//! ## CardId
//!
//! A card's id is its position in the deck. The deck is never reordered
//! after it is built, so ids are stable for the whole session.
//!
//! ## SessionId
//!
//! Every start, reset or difficulty change creates a new session with a
//! fresh id. Deferred tasks carry the id of the session that scheduled
//! them, so a task outliving its session can be recognized and dropped.

use serde::{Deserialize, Serialize};

/// Position-stable identifier for a card within one session.
///
/// ```
/// use memory_engine::core::CardId;
///
/// let id = CardId::new(3);
/// assert_eq!(id.index(), 3);
/// assert_eq!(id.to_string(), "Card(3)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position of the card in the deck.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identity of one play-through, from start to reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    /// Create a new session ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The id that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}
