//! Difficulty levels.
//!
//! A difficulty only selects the grid dimension; everything else
//! (pair count, deck size) follows from it.

use serde::{Deserialize, Serialize};

use crate::core::EngineError;

/// Grid size selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 4×4 grid, 8 pairs.
    #[default]
    Easy,
    /// 6×6 grid, 18 pairs.
    Medium,
    /// 8×8 grid, 32 pairs.
    Hard,
}

impl Difficulty {
    /// Every supported difficulty, smallest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The difficulty needing the most symbols.
    #[must_use]
    pub const fn largest() -> Self {
        Difficulty::Hard
    }

    /// Grid dimension N for an N×N board.
    #[must_use]
    pub const fn grid_size(self) -> usize {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Medium => 6,
            Difficulty::Hard => 8,
        }
    }

    /// Total cards on the board.
    #[must_use]
    pub const fn card_count(self) -> usize {
        self.grid_size() * self.grid_size()
    }

    /// Pairs to find.
    #[must_use]
    pub const fn pair_count(self) -> usize {
        self.card_count() / 2
    }

    /// Lowercase name used in configs and UIs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.grid_size();
        write!(f, "{} ({n}x{n})", self.name())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::UnknownDifficulty(s.to_string()))
    }
}
