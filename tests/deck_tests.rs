//! Deck builder property tests.
//!
//! These tests verify deck construction across every difficulty:
//! - Size and pairing invariants
//! - Shuffle quality (statistical, not exact)
//! - Catalog validation

use std::collections::BTreeMap;

use proptest::prelude::*;

use memory_engine::cards::{Card, Symbol, SymbolCatalog};
use memory_engine::core::{EngineError, GameRng};
use memory_engine::deck::{build_deck, Difficulty};

fn symbol_counts<'a>(cards: impl Iterator<Item = &'a Card>) -> BTreeMap<Symbol, usize> {
    let mut counts = BTreeMap::new();
    for card in cards {
        *counts.entry(card.symbol.clone()).or_insert(0) += 1;
    }
    counts
}

fn any_difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

// =============================================================================
// Invariants
// =============================================================================

proptest! {
    /// Every deck has grid_size² cards and every symbol exactly twice.
    #[test]
    fn prop_deck_is_paired(difficulty in any_difficulty(), seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let deck = build_deck(difficulty, &SymbolCatalog::default(), &mut rng).unwrap();

        let n = difficulty.grid_size();
        prop_assert_eq!(deck.len(), n * n);

        let counts = symbol_counts(deck.iter());
        prop_assert_eq!(counts.len(), difficulty.pair_count());
        prop_assert!(counts.values().all(|&c| c == 2));
    }

    /// Every card starts face-down with an id equal to its position.
    #[test]
    fn prop_deck_starts_hidden(difficulty in any_difficulty(), seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let deck = build_deck(difficulty, &SymbolCatalog::default(), &mut rng).unwrap();

        for (i, card) in deck.iter().enumerate() {
            prop_assert_eq!(card.id.index(), i);
            prop_assert!(!card.is_revealed);
            prop_assert!(!card.is_matched);
        }
    }
}

// =============================================================================
// Shuffle
// =============================================================================

/// Repeated builds give different orders but the same symbols.
#[test]
fn test_repeated_builds_differ() {
    let catalog = SymbolCatalog::default();
    let mut rng = GameRng::new(2024);

    let decks: Vec<Vec<Symbol>> = (0..10)
        .map(|_| {
            build_deck(Difficulty::Easy, &catalog, &mut rng)
                .unwrap()
                .iter()
                .map(|c| c.symbol.clone())
                .collect()
        })
        .collect();

    let distinct: std::collections::BTreeSet<_> = decks.iter().collect();
    assert!(distinct.len() >= 9, "shuffles should almost never repeat");

    let mut reference = decks[0].clone();
    reference.sort();
    for deck in &decks[1..] {
        let mut sorted = deck.clone();
        sorted.sort();
        assert_eq!(sorted, reference);
    }
}

/// Each position sees many different symbols over many builds.
#[test]
fn test_positions_are_mixed() {
    let catalog = SymbolCatalog::default();
    let mut rng = GameRng::new(7);

    let mut seen_at_zero = std::collections::BTreeSet::new();
    for _ in 0..200 {
        let deck = build_deck(Difficulty::Easy, &catalog, &mut rng).unwrap();
        seen_at_zero.insert(deck[0].symbol.clone());
    }

    // 8 symbols, 200 draws: all should have landed in slot 0
    assert_eq!(seen_at_zero.len(), 8);
}

// =============================================================================
// Catalog validation
// =============================================================================

/// A catalog too small for the difficulty is a configuration error.
#[test]
fn test_small_catalog_fails() {
    let catalog = SymbolCatalog::new((0..20).map(|i| format!("s{i}")));
    let mut rng = GameRng::new(1);

    assert!(build_deck(Difficulty::Medium, &catalog, &mut rng).is_ok());

    let err = build_deck(Difficulty::Hard, &catalog, &mut rng).unwrap_err();
    assert!(matches!(
        err,
        EngineError::CatalogTooSmall { required: 32, available: 20 }
    ));
    assert!(err.to_string().contains("need 32"));
}

/// Exactly 32 symbols is enough for the largest board.
#[test]
fn test_exact_catalog_suffices() {
    let catalog = SymbolCatalog::new((0..32).map(|i| format!("s{i}")));
    let mut rng = GameRng::new(1);

    let deck = build_deck(Difficulty::Hard, &catalog, &mut rng).unwrap();
    assert_eq!(symbol_counts(deck.iter()).len(), 32);
}
