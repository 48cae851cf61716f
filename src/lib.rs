//! # memory-engine
//!
//! Game-state engine for a single-player card-matching ("memory") game.
//!
//! A player turns over two face-down cards per turn. Matching symbols stay
//! face-up, mismatches flip back, and the game ends when every pair is
//! found. This crate holds the rules and timing only; drawing the board is
//! left to whatever presentation layer drives it.
//!
//! ## Design Principles
//!
//! 1. **One owner**: `MemoryEngine` owns the single active session. Views
//!    read snapshots and send intents; they never mutate state directly.
//!
//! 2. **Logical time**: Delayed effects (pair commits, clock ticks) are
//!    queued on a timeline the host advances. No threads, no sleeping,
//!    and tests run instantly.
//!
//! 3. **Session identity**: Every deferred task is tagged with the session
//!    that scheduled it, so a reset can never be undone by a stale commit.
//!
//! ## Modules
//!
//! - `core`: Ids, RNG, configuration, errors
//! - `cards`: Card values and the symbol catalog
//! - `deck`: Difficulty levels and the deck builder
//! - `turns`: Turn resolver state machine
//! - `clock`: Session clock
//! - `schedule`: Cancellable deferred tasks
//! - `session`: Session state, engine, snapshots, events

pub mod core;
pub mod cards;
pub mod deck;
pub mod turns;
pub mod clock;
pub mod schedule;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{CardId, EngineConfig, EngineError, GameRng, Result, SessionId};

pub use crate::cards::{Card, Symbol, SymbolCatalog};

pub use crate::deck::{build_deck, Difficulty};

pub use crate::turns::{PairOutcome, RejectReason, Resolution, SelectOutcome, TurnPhase};

pub use crate::clock::SessionClock;

pub use crate::schedule::{ScheduledTask, Scheduler};

pub use crate::session::{EngineEvent, MemoryEngine, Session, SessionSnapshot, EVENT_BACKLOG};
