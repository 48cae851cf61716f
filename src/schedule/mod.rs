//! Cancellable deferred tasks on a logical timeline.
//!
//! The engine never sleeps or spawns threads. Instead every delayed
//! effect (a pair locking, a pair flipping back, a clock tick) is queued
//! here with a due time, and the host drives time forward with
//! `Scheduler::pop_due`. Tasks fire in due-time order; tasks due at the
//! same instant fire in the order they were scheduled.
//!
//! Each task records the `SessionId` that scheduled it. A reset cancels
//! the old session's tasks outright, and callers still compare the id when
//! a task fires so nothing from a superseded session can touch new state.
//!
//! ```
//! use std::time::Duration;
//! use memory_engine::core::SessionId;
//! use memory_engine::schedule::Scheduler;
//!
//! let mut scheduler = Scheduler::new();
//! let session = SessionId::new(1);
//! scheduler.schedule(session, Duration::from_millis(500), "lock");
//! scheduler.schedule(session, Duration::from_millis(100), "tick");
//!
//! let until = Duration::from_secs(1);
//! assert_eq!(scheduler.pop_due(until).map(|t| t.task), Some("tick"));
//! assert_eq!(scheduler.pop_due(until).map(|t| t.task), Some("lock"));
//! assert!(scheduler.pop_due(until).is_none());
//! ```

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

use crate::core::SessionId;

/// A task that has come due.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledTask<T> {
    /// Session that scheduled the task.
    pub session: SessionId,
    /// Logical time the task was due.
    pub due: Duration,
    /// The task payload.
    pub task: T,
}

#[derive(Debug)]
struct Entry<T> {
    due: Duration,
    seq: u64,
    session: SessionId,
    task: T,
}

impl<T> Entry<T> {
    fn key(&self) -> (Duration, u64) {
        (self.due, self.seq)
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Min-heap of deferred tasks keyed by due time.
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Entry<T>>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            queue: BinaryHeap::new(),
        }
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of queued tasks.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Number of queued tasks belonging to `session`.
    #[must_use]
    pub fn pending_for(&self, session: SessionId) -> usize {
        self.queue.iter().filter(|Reverse(e)| e.session == session).count()
    }

    /// Due time of the earliest queued task.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(e)| e.due)
    }

    /// Queue `task` to fire `delay` after the current time.
    pub fn schedule(&mut self, session: SessionId, delay: Duration, task: T) {
        let entry = Entry {
            due: self.now + delay,
            seq: self.next_seq,
            session,
            task,
        };
        self.next_seq += 1;
        self.queue.push(Reverse(entry));
    }

    /// Drop every task scheduled by `session`. Returns how many were dropped.
    pub fn cancel_session(&mut self, session: SessionId) -> usize {
        let before = self.queue.len();
        self.queue.retain(|Reverse(e)| e.session != session);
        before - self.queue.len()
    }

    /// Pop the earliest task due at or before `until`.
    ///
    /// Logical time moves to the task's due time, so anything the task
    /// schedules is measured from when it fired. Returns `None` once no
    /// task is due; call `advance_to(until)` afterwards to settle the clock.
    pub fn pop_due(&mut self, until: Duration) -> Option<ScheduledTask<T>> {
        if self.next_due()? > until {
            return None;
        }
        let Reverse(entry) = self.queue.pop()?;
        self.now = self.now.max(entry.due);
        Some(ScheduledTask {
            session: entry.session,
            due: entry.due,
            task: entry.task,
        })
    }

    /// Move logical time forward. Time never runs backwards.
    pub fn advance_to(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }
}
