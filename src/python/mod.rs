//! Python bindings for the memory game engine.
//!
//! Lets a Python presentation layer (pygame, Qt, a notebook) drive the
//! engine without reimplementing any rules.
//!
//! # Quick Start
//!
//! ```python
//! import memory_engine as me
//!
//! game = me.MemoryGame(seed=42)
//! game.start("easy")
//!
//! game.select(0)
//! game.select(1)
//! game.advance(1000)   # let the pair resolve
//!
//! for card_id, symbol, revealed, matched in game.cards():
//!     ...
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// memory_engine: game-state engine for a card-matching game.
#[pymodule]
fn memory_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMemoryGame>()?;
    Ok(())
}
