//! Engine events.
//!
//! Push-style notifications for the presentation layer. The engine
//! appends one event per visible state change; views call
//! `MemoryEngine::drain_events` after each intent or `advance` and
//! re-render what changed.
//!
//! Undrained events are bounded: the queue keeps the newest
//! `EVENT_BACKLOG` entries and is emptied whenever a session is replaced.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{CardId, SessionId};
use crate::deck::Difficulty;

/// Something the view should react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A new deck is on the table.
    SessionStarted {
        /// The new session.
        session: SessionId,
        /// Its difficulty.
        difficulty: Difficulty,
    },

    /// A card turned face-up.
    CardRevealed {
        /// The card.
        card: CardId,
    },

    /// A pair locked face-up.
    PairMatched {
        /// First card of the pair.
        first: CardId,
        /// Second card of the pair.
        second: CardId,
    },

    /// A mismatched pair turned face-down.
    PairHidden {
        /// First card of the pair.
        first: CardId,
        /// Second card of the pair.
        second: CardId,
    },

    /// The session clock advanced.
    Tick {
        /// Whole seconds elapsed.
        elapsed_seconds: u64,
    },

    /// Every pair has been found.
    Completed {
        /// Final move count.
        moves: u32,
        /// Final time.
        elapsed_seconds: u64,
    },
}

/// Most events kept between drains.
pub const EVENT_BACKLOG: usize = 256;

/// Bounded FIFO of undrained events. Oldest entries fall off first.
#[derive(Clone, Debug, Default)]
pub(crate) struct EventQueue {
    events: VecDeque<EngineEvent>,
    dropped: usize,
}

impl EventQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, event: EngineEvent) {
        if self.events.len() == EVENT_BACKLOG {
            self.events.pop_front();
            self.dropped += 1;
        }
        self.events.push_back(event);
    }

    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    /// Discard everything, e.g. when the session it describes is gone.
    pub(crate) fn clear(&mut self) {
        self.events.clear();
        self.dropped = 0;
    }

    pub(crate) fn drain(&mut self) -> Vec<EngineEvent> {
        if self.dropped > 0 {
            debug!(dropped = self.dropped, "events overflowed before drain");
            self.dropped = 0;
        }
        self.events.drain(..).collect()
    }
}
