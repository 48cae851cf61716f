//! The game engine.
//!
//! `MemoryEngine` owns the single active `Session` and everything that
//! happens to it over time. The presentation layer talks to it through
//! four intents and one clock call:
//!
//! - `start_session`, `reset_session`, `change_difficulty` replace the
//!   session and cancel anything the old one had scheduled.
//! - `select_card` picks a card; a completed pair schedules its commit.
//! - `advance` moves logical time forward, firing due commits and ticks.
//!
//! Every call runs to completion before the next, so no two mutations
//! ever interleave.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_engine::{CardId, Difficulty, EngineConfig, MemoryEngine};
//!
//! let mut engine = MemoryEngine::new(EngineConfig::default().with_seed(1)).unwrap();
//! engine.start_session(Difficulty::Easy).unwrap();
//!
//! engine.select_card(CardId::new(0));
//! engine.select_card(CardId::new(1));
//! engine.advance(Duration::from_secs(1));
//!
//! let snapshot = engine.snapshot().unwrap();
//! assert_eq!(snapshot.moves, 1);
//! assert!(snapshot.selection.is_empty());
//! ```

use std::time::Duration;

use tracing::{debug, info, warn};

use super::events::{EngineEvent, EventQueue};
use super::snapshot::SessionSnapshot;
use super::state::Session;
use crate::clock::SessionClock;
use crate::core::{CardId, EngineConfig, EngineError, GameRng, Result, SessionId};
use crate::deck::Difficulty;
use crate::schedule::{ScheduledTask, Scheduler};
use crate::turns::{PairOutcome, RejectReason, Resolution, SelectOutcome};

/// Deferred work the engine schedules for itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EngineTask {
    /// Apply a decided pair.
    Resolve(Resolution),
    /// Advance the session clock by one second.
    ClockTick,
}

/// Authoritative game state plus its timeline.
#[derive(Debug)]
pub struct MemoryEngine {
    config: EngineConfig,
    rng: GameRng,
    scheduler: Scheduler<EngineTask>,
    session: Option<Session>,
    last_session: SessionId,
    events: EventQueue,
}

impl MemoryEngine {
    /// Create an engine. Fails if the configuration is unusable.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(seed = rng.seed(), symbols = config.symbols.len(), "engine created");

        Ok(Self {
            config,
            rng,
            scheduler: Scheduler::new(),
            session: None,
            last_session: SessionId::new(0),
            events: EventQueue::new(),
        })
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The active session, if one was started.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Deferred tasks still queued.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending_count()
    }

    /// Events waiting for `drain_events`. Never exceeds `EVENT_BACKLOG`.
    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    // === Intents ===

    /// Deal a new deck and start the clock.
    ///
    /// Any previous session is discarded along with its pending commits
    /// and undrained events. If the deck cannot be built the previous
    /// session is left untouched.
    pub fn start_session(&mut self, difficulty: Difficulty) -> Result<SessionId> {
        let id = self.last_session.next();
        let mut session_rng = self.rng.fork();
        let session = Session::new(id, difficulty, &self.config.symbols, &mut session_rng)?;

        if let Some(old) = self.session.take() {
            let cancelled = self.scheduler.cancel_session(old.id());
            debug!(session = %old.id(), cancelled, "session replaced");
        }
        self.events.clear();

        self.last_session = id;
        self.session = Some(session);
        self.scheduler
            .schedule(id, SessionClock::TICK, EngineTask::ClockTick);
        self.events.push(EngineEvent::SessionStarted { session: id, difficulty });
        info!(session = %id, %difficulty, "session started");

        Ok(id)
    }

    /// Restart at the current difficulty with a fresh deck.
    pub fn reset_session(&mut self) -> Result<SessionId> {
        let difficulty = self
            .session
            .as_ref()
            .map(Session::difficulty)
            .ok_or(EngineError::NoSession)?;
        self.start_session(difficulty)
    }

    /// Restart at a different difficulty.
    pub fn change_difficulty(&mut self, difficulty: Difficulty) -> Result<SessionId> {
        self.start_session(difficulty)
    }

    /// Pick a card.
    ///
    /// Invalid picks are ignored and reported as `SelectOutcome::Rejected`.
    pub fn select_card(&mut self, id: CardId) -> SelectOutcome {
        let Some(session) = self.session.as_mut() else {
            return SelectOutcome::Rejected(RejectReason::NoSession);
        };

        let outcome = session.select(id);
        match outcome {
            SelectOutcome::Revealed(card) => {
                self.events.push(EngineEvent::CardRevealed { card });
            }
            SelectOutcome::PairPending(resolution) => {
                self.events.push(EngineEvent::CardRevealed { card: resolution.second });
                let delay = match resolution.outcome {
                    PairOutcome::Match => self.config.match_delay(),
                    PairOutcome::Mismatch => self.config.mismatch_delay(),
                };
                self.scheduler
                    .schedule(session.id(), delay, EngineTask::Resolve(resolution));
            }
            SelectOutcome::Rejected(reason) => {
                debug!(card = %id, ?reason, "selection ignored");
            }
        }
        outcome
    }

    /// Move logical time forward by `elapsed`.
    ///
    /// Fires every task that falls due, in order. Returns how many fired.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let until = self.scheduler.now() + elapsed;
        let mut fired = 0;
        while let Some(task) = self.scheduler.pop_due(until) {
            self.fire(task);
            fired += 1;
        }
        self.scheduler.advance_to(until);
        fired
    }

    // === Observation ===

    /// Snapshot of the active session.
    #[must_use]
    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        self.session.as_ref().map(Session::snapshot)
    }

    /// Take every event recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        self.events.drain()
    }

    // === Task handling ===

    fn fire(&mut self, scheduled: ScheduledTask<EngineTask>) {
        let session = match self.session.as_mut() {
            Some(session) if session.id() == scheduled.session => session,
            _ => {
                warn!(
                    task_session = %scheduled.session,
                    task = ?scheduled.task,
                    "discarding task from a superseded session"
                );
                return;
            }
        };

        match scheduled.task {
            EngineTask::Resolve(resolution) => {
                if !session.commit(resolution) {
                    return;
                }
                let (first, second) = (resolution.first, resolution.second);
                if resolution.is_match() {
                    debug!(session = %session.id(), %first, %second, "pair matched");
                    self.events.push(EngineEvent::PairMatched { first, second });
                } else {
                    debug!(session = %session.id(), %first, %second, "pair hidden");
                    self.events.push(EngineEvent::PairHidden { first, second });
                }

                if session.is_complete() {
                    let cancelled = self.scheduler.cancel_session(session.id());
                    debug!(session = %session.id(), cancelled, "clock stopped");
                    info!(
                        session = %session.id(),
                        moves = session.moves(),
                        elapsed = session.elapsed_seconds(),
                        "all pairs found"
                    );
                    self.events.push(EngineEvent::Completed {
                        moves: session.moves(),
                        elapsed_seconds: session.elapsed_seconds(),
                    });
                }
            }
            EngineTask::ClockTick => {
                if session.tick() {
                    let elapsed_seconds = session.elapsed_seconds();
                    self.events.push(EngineEvent::Tick { elapsed_seconds });
                    self.scheduler.schedule(
                        session.id(),
                        SessionClock::TICK,
                        EngineTask::ClockTick,
                    );
                }
            }
        }
    }
}
