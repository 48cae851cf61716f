//! Shared helpers for integration tests.

#![allow(dead_code)]

use memory_engine::{CardId, Difficulty, EngineConfig, MemoryEngine};

pub const MATCH_MS: u64 = 500;
pub const MISMATCH_MS: u64 = 1000;

/// Engine with default delays, a fixed seed and a started session.
pub fn engine(difficulty: Difficulty) -> MemoryEngine {
    let config = EngineConfig::default()
        .with_delays(MATCH_MS, MISMATCH_MS)
        .with_seed(42);
    let mut engine = MemoryEngine::new(config).unwrap();
    engine.start_session(difficulty).unwrap();
    engine
}

/// Two selectable cards with the same symbol.
pub fn find_match(engine: &MemoryEngine) -> (CardId, CardId) {
    let cards = engine.snapshot().unwrap().cards;
    for a in cards.iter().filter(|c| c.is_selectable()) {
        if let Some(b) = cards.iter().find(|b| b.is_selectable() && a.pairs_with(b)) {
            return (a.id, b.id);
        }
    }
    panic!("no selectable pair left");
}

/// Two selectable cards with different symbols.
pub fn find_mismatch(engine: &MemoryEngine) -> (CardId, CardId) {
    let cards = engine.snapshot().unwrap().cards;
    for a in cards.iter().filter(|c| c.is_selectable()) {
        if let Some(b) = cards
            .iter()
            .find(|b| b.is_selectable() && b.symbol != a.symbol)
        {
            return (a.id, b.id);
        }
    }
    panic!("no selectable mismatch left");
}

/// Every pair on the board, as id tuples.
pub fn all_pairs(engine: &MemoryEngine) -> Vec<(CardId, CardId)> {
    let cards = engine.snapshot().unwrap().cards;
    let mut pairs = Vec::new();
    for a in cards.iter() {
        if let Some(b) = cards.iter().find(|b| b.id > a.id && a.pairs_with(b)) {
            pairs.push((a.id, b.id));
        }
    }
    pairs
}
