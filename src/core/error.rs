//! Engine error type.
//!
//! Only configuration and lifecycle problems are errors. Rejected card
//! selections are ordinary outcomes (see `turns::SelectOutcome`) and never
//! surface here.

use thiserror::Error;

/// Errors produced by the engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The symbol catalog cannot cover the requested deck.
    #[error("symbol catalog too small: need {required} symbols, have {available}")]
    CatalogTooSmall {
        /// Distinct symbols the deck needs.
        required: usize,
        /// Symbols the catalog holds.
        available: usize,
    },

    /// A symbol appears more than once in the catalog.
    #[error("duplicate symbol in catalog: {0:?}")]
    DuplicateSymbol(String),

    /// The match delay is not shorter than the mismatch delay.
    #[error("invalid timing: match delay {match_ms}ms must be shorter than mismatch delay {mismatch_ms}ms")]
    InvalidTiming {
        /// Configured match delay.
        match_ms: u64,
        /// Configured mismatch delay.
        mismatch_ms: u64,
    },

    /// Reset was requested before any session was started.
    #[error("no session has been started")]
    NoSession,

    /// A difficulty name did not parse.
    #[error("unknown difficulty: {0:?}")]
    UnknownDifficulty(String),

    /// The configuration file is not valid TOML for `EngineConfig`.
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    /// The configuration file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
