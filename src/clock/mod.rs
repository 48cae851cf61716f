//! Session clock.
//!
//! Counts whole seconds of play. The engine feeds it one tick every
//! `SessionClock::TICK` of logical time; the clock itself only decides
//! whether a tick counts. Once stopped (the board is cleared) it never advances again,
//! and a new session starts a new clock at zero.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Elapsed-time counter for one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClock {
    elapsed_seconds: u64,
    stopped: bool,
}

impl SessionClock {
    /// Logical time between ticks. One tick is one elapsed second.
    pub const TICK: Duration = Duration::from_secs(1);

    /// A running clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whole seconds elapsed.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Is the clock still counting?
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.stopped
    }

    /// Advance by one second. Returns false if the clock is stopped.
    pub fn tick(&mut self) -> bool {
        if self.stopped {
            return false;
        }
        self.elapsed_seconds += 1;
        true
    }

    /// Freeze the clock at its current value.
    pub fn stop(&mut self) {
        self.stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let clock = SessionClock::new();
        assert_eq!(clock.elapsed_seconds(), 0);
        assert!(clock.is_running());
    }

    #[test]
    fn test_tick() {
        let mut clock = SessionClock::new();
        assert!(clock.tick());
        assert!(clock.tick());
        assert_eq!(clock.elapsed_seconds(), 2);
    }

    #[test]
    fn test_stopped_clock_does_not_advance() {
        let mut clock = SessionClock::new();
        clock.tick();
        clock.stop();

        assert!(!clock.tick());
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed_seconds(), 1);
    }
}
