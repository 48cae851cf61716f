//! Core engine types: ids, RNG, configuration, errors.
//!
//! Everything here is independent of game rules. The deck builder, turn
//! resolver and session clock build on these pieces.

pub mod ids;
pub mod rng;
pub mod config;
pub mod error;

pub use ids::{CardId, SessionId};
pub use rng::GameRng;
pub use config::EngineConfig;
pub use error::{EngineError, Result};
