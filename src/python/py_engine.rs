//! Engine bindings for Python.

use std::time::Duration;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::{CardId, EngineConfig, EngineError};
use crate::deck::Difficulty;
use crate::session::{EngineEvent, MemoryEngine};

fn to_py_err(err: EngineError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn parse_difficulty(name: &str) -> PyResult<Difficulty> {
    name.parse().map_err(to_py_err)
}

/// Convert an event to a dict keyed by `kind` plus the event's fields.
fn event_to_dict<'py>(py: Python<'py>, event: &EngineEvent) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    match *event {
        EngineEvent::SessionStarted { session, difficulty } => {
            dict.set_item("kind", "session_started")?;
            dict.set_item("session", session.raw())?;
            dict.set_item("difficulty", difficulty.name())?;
        }
        EngineEvent::CardRevealed { card } => {
            dict.set_item("kind", "card_revealed")?;
            dict.set_item("card", card.raw())?;
        }
        EngineEvent::PairMatched { first, second } => {
            dict.set_item("kind", "pair_matched")?;
            dict.set_item("first", first.raw())?;
            dict.set_item("second", second.raw())?;
        }
        EngineEvent::PairHidden { first, second } => {
            dict.set_item("kind", "pair_hidden")?;
            dict.set_item("first", first.raw())?;
            dict.set_item("second", second.raw())?;
        }
        EngineEvent::Tick { elapsed_seconds } => {
            dict.set_item("kind", "tick")?;
            dict.set_item("elapsed_seconds", elapsed_seconds)?;
        }
        EngineEvent::Completed { moves, elapsed_seconds } => {
            dict.set_item("kind", "completed")?;
            dict.set_item("moves", moves)?;
            dict.set_item("elapsed_seconds", elapsed_seconds)?;
        }
    }
    Ok(dict)
}

/// Python wrapper for `MemoryEngine`.
///
/// Drive it from a UI loop: call `advance` with the real milliseconds
/// since the last frame, then read `drain_events()` or `cards()` and the
/// counters.
#[pyclass(name = "MemoryGame")]
pub struct PyMemoryGame {
    engine: MemoryEngine,
}

#[pymethods]
impl PyMemoryGame {
    /// Create a new game engine.
    ///
    /// # Arguments
    /// - match_delay_ms: How long a found pair stays pending before locking
    /// - mismatch_delay_ms: How long a wrong pair stays visible
    /// - seed: Fixed RNG seed, or None for a random deck every game
    /// - config_path: Optional TOML file; overrides the other arguments
    #[new]
    #[pyo3(signature = (
        match_delay_ms = 500,
        mismatch_delay_ms = 1000,
        seed = None,
        config_path = None
    ))]
    fn new(
        match_delay_ms: u64,
        mismatch_delay_ms: u64,
        seed: Option<u64>,
        config_path: Option<&str>,
    ) -> PyResult<Self> {
        let config = match config_path {
            Some(path) => EngineConfig::load(path).map_err(to_py_err)?,
            None => {
                let config = EngineConfig::default().with_delays(match_delay_ms, mismatch_delay_ms);
                match seed {
                    Some(seed) => config.with_seed(seed),
                    None => config,
                }
            }
        };
        let engine = MemoryEngine::new(config).map_err(to_py_err)?;
        Ok(Self { engine })
    }

    /// Start a session ("easy", "medium" or "hard"). Returns the session id.
    fn start(&mut self, difficulty: &str) -> PyResult<u64> {
        let difficulty = parse_difficulty(difficulty)?;
        let id = self.engine.start_session(difficulty).map_err(to_py_err)?;
        Ok(id.raw())
    }

    /// Restart with a fresh deck at the same difficulty.
    fn reset(&mut self) -> PyResult<u64> {
        let id = self.engine.reset_session().map_err(to_py_err)?;
        Ok(id.raw())
    }

    /// Restart at another difficulty.
    fn change_difficulty(&mut self, difficulty: &str) -> PyResult<u64> {
        let difficulty = parse_difficulty(difficulty)?;
        let id = self.engine.change_difficulty(difficulty).map_err(to_py_err)?;
        Ok(id.raw())
    }

    /// Pick a card. Returns False if the pick was ignored.
    fn select(&mut self, card_id: u32) -> bool {
        self.engine.select_card(CardId::new(card_id)).is_accepted()
    }

    /// Advance game time. Returns the number of deferred tasks that fired.
    fn advance(&mut self, millis: u64) -> usize {
        self.engine.advance(Duration::from_millis(millis))
    }

    /// Events since the last call, oldest first, as dicts with a `kind` key.
    fn drain_events<'py>(&mut self, py: Python<'py>) -> PyResult<Vec<Bound<'py, PyDict>>> {
        self.engine
            .drain_events()
            .iter()
            .map(|event| event_to_dict(py, event))
            .collect()
    }

    /// Cards as (id, symbol, is_revealed, is_matched) tuples in board order.
    fn cards(&self) -> Vec<(u32, String, bool, bool)> {
        self.engine
            .session()
            .map(|s| {
                s.cards()
                    .iter()
                    .map(|c| (c.id.raw(), c.symbol.to_string(), c.is_revealed, c.is_matched))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Grid dimension of the current session (0 before start).
    #[getter]
    fn grid_size(&self) -> usize {
        self.engine
            .session()
            .map_or(0, |s| s.difficulty().grid_size())
    }

    /// Completed two-card picks.
    #[getter]
    fn moves(&self) -> u32 {
        self.engine.session().map_or(0, |s| s.moves())
    }

    /// Pairs found.
    #[getter]
    fn matches(&self) -> u32 {
        self.engine.session().map_or(0, |s| s.matches())
    }

    /// Whole seconds of play.
    #[getter]
    fn elapsed_seconds(&self) -> u64 {
        self.engine.session().map_or(0, |s| s.elapsed_seconds())
    }

    /// All pairs found.
    #[getter]
    fn is_complete(&self) -> bool {
        self.engine.session().is_some_and(|s| s.is_complete())
    }

    fn __repr__(&self) -> String {
        match self.engine.session() {
            Some(s) => format!(
                "MemoryGame({}, moves={}, matches={}/{}, time={}s)",
                s.difficulty(),
                s.moves(),
                s.matches(),
                s.pairs_total(),
                s.elapsed_seconds()
            ),
            None => "MemoryGame(not started)".to_string(),
        }
    }
}
