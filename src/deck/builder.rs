//! Deck construction.

use im::Vector;

use super::Difficulty;
use crate::cards::{Card, SymbolCatalog};
use crate::core::{CardId, GameRng, Result};

/// Build a shuffled deck for `difficulty`.
///
/// The first `pair_count` catalog symbols each appear on exactly two
/// cards. The order is a uniform random permutation, and ids are assigned
/// after shuffling so `deck[i].id == CardId(i)`. Every card starts
/// face-down and unmatched.
///
/// Fails with `EngineError::CatalogTooSmall` when the catalog cannot
/// supply enough symbols.
///
/// ```
/// use memory_engine::cards::SymbolCatalog;
/// use memory_engine::core::GameRng;
/// use memory_engine::deck::{build_deck, Difficulty};
///
/// let mut rng = GameRng::new(42);
/// let deck = build_deck(Difficulty::Easy, &SymbolCatalog::default(), &mut rng).unwrap();
/// assert_eq!(deck.len(), 16);
/// ```
pub fn build_deck(
    difficulty: Difficulty,
    catalog: &SymbolCatalog,
    rng: &mut GameRng,
) -> Result<Vector<Card>> {
    let symbols = catalog.take(difficulty.pair_count())?;

    let mut faces: Vec<_> = symbols
        .iter()
        .flat_map(|symbol| [symbol.clone(), symbol.clone()])
        .collect();
    rng.shuffle(&mut faces);

    Ok(faces
        .into_iter()
        .enumerate()
        .map(|(i, symbol)| Card::new(CardId::new(i as u32), symbol))
        .collect())
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashMap;

    use super::*;
    use crate::cards::Symbol;
    use crate::core::EngineError;

    fn symbol_counts(deck: &Vector<Card>) -> FxHashMap<Symbol, usize> {
        let mut counts = FxHashMap::default();
        for card in deck {
            *counts.entry(card.symbol.clone()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_deck_sizes() {
        let catalog = SymbolCatalog::default();
        let mut rng = GameRng::new(1);

        for difficulty in Difficulty::ALL {
            let deck = build_deck(difficulty, &catalog, &mut rng).unwrap();
            assert_eq!(deck.len(), difficulty.card_count());
        }
    }

    #[test]
    fn test_every_symbol_twice() {
        let catalog = SymbolCatalog::default();
        let mut rng = GameRng::new(2);
        let deck = build_deck(Difficulty::Medium, &catalog, &mut rng).unwrap();

        let counts = symbol_counts(&deck);
        assert_eq!(counts.len(), 18);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_uses_catalog_prefix() {
        let catalog = SymbolCatalog::default();
        let mut rng = GameRng::new(3);
        let deck = build_deck(Difficulty::Easy, &catalog, &mut rng).unwrap();

        let counts = symbol_counts(&deck);
        for symbol in catalog.iter().take(8) {
            assert_eq!(counts.get(symbol), Some(&2));
        }
        for symbol in catalog.iter().skip(8) {
            assert!(!counts.contains_key(symbol));
        }
    }

    #[test]
    fn test_ids_follow_positions() {
        let mut rng = GameRng::new(4);
        let deck = build_deck(Difficulty::Easy, &SymbolCatalog::default(), &mut rng).unwrap();

        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.id.index(), i);
            assert!(!card.is_revealed);
            assert!(!card.is_matched);
        }
    }

    #[test]
    fn test_same_seed_same_deck() {
        let catalog = SymbolCatalog::default();
        let a = build_deck(Difficulty::Hard, &catalog, &mut GameRng::new(99)).unwrap();
        let b = build_deck(Difficulty::Hard, &catalog, &mut GameRng::new(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_catalog_too_small() {
        let catalog = SymbolCatalog::new(["a", "b", "c"]);
        let mut rng = GameRng::new(5);

        let err = build_deck(Difficulty::Easy, &catalog, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            EngineError::CatalogTooSmall { required: 8, available: 3 }
        ));
    }
}
