//! Ordered symbol catalog.
//!
//! Decks are built from a prefix of the catalog: an 8-pair deck uses the
//! first 8 symbols, a 32-pair deck the first 32. The catalog is content
//! data, so it is checked up front instead of trusted.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::Symbol;
use crate::core::{EngineError, Result};
use crate::deck::Difficulty;

/// Built-in catalog, enough for every difficulty with room to spare.
pub const DEFAULT_SYMBOLS: [&str; 40] = [
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯",
    "🦁", "🐮", "🐷", "🐸", "🐵", "🐔", "🐧", "🐦", "🐤", "🦆",
    "🦅", "🦉", "🦇", "🐺", "🐗", "🐴", "🦄", "🐝", "🐛", "🦋",
    "🐌", "🐞", "🐢", "🐍", "🦎", "🐙", "🦑", "🦀", "🐡", "🐠",
];

/// Fixed ordered list of distinct card symbols.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolCatalog {
    symbols: Vec<Symbol>,
}

impl Default for SymbolCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOLS)
    }
}

impl SymbolCatalog {
    /// Create a catalog from symbols in order.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Is the catalog empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate symbols in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// The first `count` symbols.
    pub fn take(&self, count: usize) -> Result<&[Symbol]> {
        self.symbols.get(..count).ok_or(EngineError::CatalogTooSmall {
            required: count,
            available: self.symbols.len(),
        })
    }

    /// Fail if any symbol appears twice.
    pub fn check_distinct(&self) -> Result<()> {
        let mut seen = FxHashSet::default();
        for symbol in &self.symbols {
            if !seen.insert(symbol) {
                return Err(EngineError::DuplicateSymbol(symbol.to_string()));
            }
        }
        Ok(())
    }

    /// Fail if the catalog cannot supply a deck for `difficulty`.
    pub fn check_covers(&self, difficulty: Difficulty) -> Result<()> {
        self.take(difficulty.pair_count()).map(|_| ())
    }
}
