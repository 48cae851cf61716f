//! Card system: card values and the symbol catalog.
//!
//! ## Key Types
//!
//! - `Symbol`: Face value shared by exactly two cards
//! - `Card`: One board position with its reveal/match flags
//! - `SymbolCatalog`: Ordered, distinct symbols decks are drawn from

pub mod card;
pub mod catalog;

pub use card::{Card, Symbol};
pub use catalog::{SymbolCatalog, DEFAULT_SYMBOLS};
