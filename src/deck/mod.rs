//! Deck builder: difficulty levels and shuffled deck construction.
//!
//! A deck is an `im::Vector<Card>` so sessions can hand cheap snapshots
//! to the presentation layer without copying every card.

mod builder;
mod difficulty;

pub use builder::build_deck;
pub use difficulty::Difficulty;
