//! Session state.
//!
//! A `Session` owns one shuffled deck plus the counters that describe
//! progress through it. It knows nothing about time: the engine decides
//! when commits and ticks happen and calls in.

use im::Vector;
use smallvec::SmallVec;
use tracing::debug;

use super::snapshot::SessionSnapshot;
use crate::cards::{Card, SymbolCatalog};
use crate::clock::SessionClock;
use crate::core::{CardId, GameRng, Result, SessionId};
use crate::deck::{build_deck, Difficulty};
use crate::turns::{RejectReason, Resolution, SelectOutcome, TurnPhase, TurnResolver};

/// One play-through from start to reset.
#[derive(Clone, Debug)]
pub struct Session {
    id: SessionId,
    difficulty: Difficulty,
    deck: Vector<Card>,
    turns: TurnResolver,
    clock: SessionClock,
    moves: u32,
    matches: u32,
    is_complete: bool,
}

impl Session {
    /// Deal a fresh deck for `difficulty`.
    pub fn new(
        id: SessionId,
        difficulty: Difficulty,
        catalog: &SymbolCatalog,
        rng: &mut GameRng,
    ) -> Result<Self> {
        let deck = build_deck(difficulty, catalog, rng)?;
        Ok(Self::from_deck(id, difficulty, deck))
    }

    /// Wrap an already-built, face-down deck sized for `difficulty`.
    fn from_deck(id: SessionId, difficulty: Difficulty, deck: Vector<Card>) -> Self {
        debug_assert_eq!(deck.len(), difficulty.card_count());
        Self {
            id,
            difficulty,
            deck,
            turns: TurnResolver::new(),
            clock: SessionClock::new(),
            moves: 0,
            matches: 0,
            is_complete: false,
        }
    }

    // === Accessors ===

    /// Session identity.
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Difficulty the deck was built for.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Cards in board order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.deck
    }

    /// Look up a card.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.get(id.index())
    }

    /// Completed two-card picks.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Pairs found.
    #[must_use]
    pub fn matches(&self) -> u32 {
        self.matches
    }

    /// Whole seconds of play.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.clock.elapsed_seconds()
    }

    /// All pairs found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Current turn phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.turns.phase()
    }

    /// Picked-but-unresolved cards.
    #[must_use]
    pub fn selection(&self) -> SmallVec<[CardId; 2]> {
        self.turns.selection()
    }

    /// Pairs on the board.
    #[must_use]
    pub fn pairs_total(&self) -> u32 {
        (self.deck.len() / 2) as u32
    }

    // === Mutations ===

    /// Pick a card. Counts a move when it completes a pair.
    pub fn select(&mut self, id: CardId) -> SelectOutcome {
        if self.is_complete {
            return SelectOutcome::Rejected(RejectReason::SessionComplete);
        }

        let outcome = self.turns.select(&mut self.deck, id);
        if let SelectOutcome::PairPending(resolution) = outcome {
            self.moves += 1;
            debug!(
                session = %self.id,
                first = %resolution.first,
                second = %resolution.second,
                outcome = ?resolution.outcome,
                moves = self.moves,
                "pair selected"
            );
        }
        outcome
    }

    /// Apply a pending resolution.
    ///
    /// Returns false if `resolution` is not the pair currently pending.
    pub fn commit(&mut self, resolution: Resolution) -> bool {
        if !self.turns.commit(&mut self.deck, resolution) {
            return false;
        }
        if resolution.is_match() {
            self.matches += 1;
            self.check_completion();
        }
        true
    }

    /// Count one clock second. Returns false once the session is complete.
    pub fn tick(&mut self) -> bool {
        !self.is_complete && self.clock.tick()
    }

    /// Set the completion flag if every card is matched.
    fn check_completion(&mut self) {
        if !self.is_complete && self.deck.iter().all(|c| c.is_matched) {
            self.is_complete = true;
            self.clock.stop();
        }
    }

    /// Capture the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            difficulty: self.difficulty,
            grid_size: self.difficulty.grid_size(),
            cards: self.deck.clone(),
            selection: self.selection().to_vec(),
            moves: self.moves,
            matches: self.matches,
            pairs_total: self.pairs_total(),
            pairs_remaining: self.pairs_total() - self.matches,
            elapsed_seconds: self.elapsed_seconds(),
            is_complete: self.is_complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Symbol;

    /// Easy session over an unshuffled deck: cards 2k and 2k+1 pair up.
    fn session() -> Session {
        let deck = (0..16u32)
            .map(|i| Card::new(CardId::new(i), Symbol::from(format!("S{}", i / 2))))
            .collect();
        Session::from_deck(SessionId::new(1), Difficulty::Easy, deck)
    }

    fn pick_pair(session: &mut Session, a: u32, b: u32) -> Resolution {
        session.select(CardId::new(a));
        match session.select(CardId::new(b)) {
            SelectOutcome::PairPending(r) => r,
            other => panic!("expected pending pair, got {other:?}"),
        }
    }

    #[test]
    fn test_new_session_from_catalog() {
        let mut rng = GameRng::new(42);
        let session =
            Session::new(SessionId::new(3), Difficulty::Easy, &SymbolCatalog::default(), &mut rng)
                .unwrap();

        assert_eq!(session.id(), SessionId::new(3));
        assert_eq!(session.cards().len(), 16);
        assert_eq!(session.pairs_total(), 8);
        assert_eq!(session.moves(), 0);
        assert_eq!(session.elapsed_seconds(), 0);
        assert!(!session.is_complete());
    }

    #[test]
    fn test_first_pick_is_not_a_move() {
        let mut session = session();
        session.select(CardId::new(0));
        assert_eq!(session.moves(), 0);
    }

    #[test]
    fn test_match_counts_on_commit() {
        let mut session = session();
        let r = pick_pair(&mut session, 0, 1);

        assert_eq!(session.moves(), 1);
        assert_eq!(session.matches(), 0);

        assert!(session.commit(r));
        assert_eq!(session.matches(), 1);
        assert!(!session.is_complete());
    }

    #[test]
    fn test_mismatch_never_counts() {
        let mut session = session();
        let r = pick_pair(&mut session, 0, 2);
        assert!(session.commit(r));

        assert_eq!(session.moves(), 1);
        assert_eq!(session.matches(), 0);
        assert!(!session.card(CardId::new(0)).unwrap().is_revealed);
    }

    #[test]
    fn test_completion_stops_clock() {
        let mut session = session();
        assert!(session.tick());

        for k in 0..8 {
            assert!(!session.is_complete());
            let r = pick_pair(&mut session, 2 * k, 2 * k + 1);
            session.commit(r);
        }

        assert!(session.is_complete());
        assert!(!session.tick());
        assert_eq!(session.elapsed_seconds(), 1);
        assert_eq!(
            session.select(CardId::new(0)),
            SelectOutcome::Rejected(RejectReason::SessionComplete)
        );
    }

    #[test]
    fn test_double_commit_counts_once() {
        let mut session = session();
        let r = pick_pair(&mut session, 0, 1);

        assert!(session.commit(r));
        assert!(!session.commit(r));
        assert_eq!(session.matches(), 1);
    }

    #[test]
    fn test_snapshot() {
        let mut session = session();
        session.select(CardId::new(2));

        let snap = session.snapshot();
        assert_eq!(snap.session_id, SessionId::new(1));
        assert_eq!(snap.selection, vec![CardId::new(2)]);
        assert_eq!(snap.pairs_total, 8);
        assert_eq!(snap.pairs_remaining, 8);
        assert!(snap.card(CardId::new(2)).unwrap().is_revealed);
    }

    #[test]
    fn test_snapshot_rows_fill_grid() {
        let mut session = session();
        let r = pick_pair(&mut session, 0, 1);
        session.commit(r);

        let snap = session.snapshot();
        assert_eq!(snap.pairs_remaining, 7);
        let rows: Vec<_> = snap.rows().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.len() == 4));
    }
}
