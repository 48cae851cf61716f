//! Engine configuration.
//!
//! Timing and content are data, not code: the engine reads resolution
//! delays and the symbol catalog from `EngineConfig`. The session clock is
//! not configurable; it always counts real seconds.
//! Configs can be built in code or loaded from TOML:
//!
//! ```toml
//! match_delay_ms = 400
//! mismatch_delay_ms = 900
//! seed = 7
//! symbols = ["A", "B", "C"]
//! ```
//!
//! Any field left out keeps its default. Unknown fields are rejected.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use crate::cards::SymbolCatalog;
use crate::deck::Difficulty;

/// Default delay before a matched pair locks.
pub const DEFAULT_MATCH_DELAY_MS: u64 = 500;

/// Default delay before a mismatched pair flips back.
pub const DEFAULT_MISMATCH_DELAY_MS: u64 = 1000;

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Delay between revealing a matching pair and locking it.
    pub match_delay_ms: u64,

    /// Delay between revealing a mismatched pair and hiding it again.
    /// Must be longer than `match_delay_ms`.
    pub mismatch_delay_ms: u64,

    /// Ordered symbol catalog. Decks use its first `pair_count` entries.
    pub symbols: SymbolCatalog,

    /// Fixed seed for reproducible decks. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            match_delay_ms: DEFAULT_MATCH_DELAY_MS,
            mismatch_delay_ms: DEFAULT_MISMATCH_DELAY_MS,
            symbols: SymbolCatalog::default(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Set both resolution delays.
    #[must_use]
    pub fn with_delays(mut self, match_delay_ms: u64, mismatch_delay_ms: u64) -> Self {
        self.match_delay_ms = match_delay_ms;
        self.mismatch_delay_ms = mismatch_delay_ms;
        self
    }

    /// Replace the symbol catalog.
    #[must_use]
    pub fn with_symbols(mut self, symbols: SymbolCatalog) -> Self {
        self.symbols = symbols;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Match delay as a `Duration`.
    #[must_use]
    pub fn match_delay(&self) -> Duration {
        Duration::from_millis(self.match_delay_ms)
    }

    /// Mismatch delay as a `Duration`.
    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    /// Check the configuration before any session is built.
    ///
    /// The catalog must hold distinct symbols, enough for the largest
    /// difficulty, and a match must lock faster than a mismatch hides.
    pub fn validate(&self) -> Result<()> {
        if self.match_delay_ms >= self.mismatch_delay_ms {
            return Err(EngineError::InvalidTiming {
                match_ms: self.match_delay_ms,
                mismatch_ms: self.mismatch_delay_ms,
            });
        }
        self.symbols.check_distinct()?;
        self.symbols.check_covers(Difficulty::largest())
    }
}
