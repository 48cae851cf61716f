//! Card values.
//!
//! A `Card` is a symbol plus two flags. The flags only move in the
//! directions the game allows:
//!
//! - `is_matched` goes false → true and never back.
//! - `is_revealed` may go up and down during a mismatch, but stays true
//!   once the card is matched.

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// A symbol printed on a card face. Exactly two cards share each symbol.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from any string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The symbol text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Position-stable id (the card's index in the deck).
    pub id: CardId,

    /// Face symbol.
    pub symbol: Symbol,

    /// Face-up, either pending resolution or permanently after a match.
    pub is_revealed: bool,

    /// Part of a confirmed pair. Terminal once set.
    pub is_matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            is_revealed: false,
            is_matched: false,
        }
    }

    /// Can this card be picked right now?
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.is_revealed && !self.is_matched
    }

    /// Turn the card face-up.
    pub fn reveal(&mut self) {
        self.is_revealed = true;
    }

    /// Turn the card face-down. Matched cards stay face-up.
    pub fn hide(&mut self) {
        if !self.is_matched {
            self.is_revealed = false;
        }
    }

    /// Lock the card as part of a found pair.
    pub fn mark_matched(&mut self) {
        self.is_matched = true;
        self.is_revealed = true;
    }

    /// Does this card share a symbol with `other`?
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.symbol == other.symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32, symbol: &str) -> Card {
        Card::new(CardId::new(id), Symbol::from(symbol))
    }

    #[test]
    fn test_new_card_face_down() {
        let c = card(0, "A");
        assert!(!c.is_revealed);
        assert!(!c.is_matched);
        assert!(c.is_selectable());
    }

    #[test]
    fn test_reveal_and_hide() {
        let mut c = card(0, "A");
        c.reveal();
        assert!(c.is_revealed);
        assert!(!c.is_selectable());

        c.hide();
        assert!(!c.is_revealed);
        assert!(c.is_selectable());
    }

    #[test]
    fn test_matched_card_stays_revealed() {
        let mut c = card(0, "A");
        c.reveal();
        c.mark_matched();
        c.hide();

        assert!(c.is_revealed);
        assert!(c.is_matched);
        assert!(!c.is_selectable());
    }

    #[test]
    fn test_pairs_with() {
        let a = card(0, "A");
        let b = card(1, "A");
        let c = card(2, "B");

        assert!(a.pairs_with(&b));
        assert!(!a.pairs_with(&c));
        assert!(!a.pairs_with(&a));
    }

    #[test]
    fn test_symbol_serializes_as_string() {
        let json = serde_json::to_string(&Symbol::from("🐶")).unwrap();
        assert_eq!(json, "\"🐶\"");
    }
}
