//! Game configuration.
//!
//! Deal sizes and the scoring policy live here rather than as literals in
//! the engine logic. The defaults reproduce the standard game: a 12-card
//! opening board dealt 3 at a time, +3 for a match, -1 for a completed
//! selection that is not a Set.

use serde::{Deserialize, Serialize};

/// Tunable game parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rounds of dealing performed by a new game (opening board =
    /// `initial_deal_rounds * cards_per_deal` cards).
    pub initial_deal_rounds: usize,

    /// Cards placed per deal round.
    pub cards_per_deal: usize,

    /// Score awarded for a valid match.
    pub match_reward: i64,

    /// Score deducted when a completed 3-card selection is not a Set.
    pub mismatch_penalty: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_deal_rounds: 4,
            cards_per_deal: 3,
            match_reward: 3,
            mismatch_penalty: 1,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of opening deal rounds.
    #[must_use]
    pub fn with_initial_deal_rounds(mut self, rounds: usize) -> Self {
        self.initial_deal_rounds = rounds;
        self
    }

    /// Set the per-round deal size.
    #[must_use]
    pub fn with_cards_per_deal(mut self, cards: usize) -> Self {
        self.cards_per_deal = cards;
        self
    }

    /// Set the reward for a valid match.
    #[must_use]
    pub fn with_match_reward(mut self, reward: i64) -> Self {
        self.match_reward = reward;
        self
    }

    /// Set the penalty for an invalid completed selection.
    #[must_use]
    pub fn with_mismatch_penalty(mut self, penalty: i64) -> Self {
        self.mismatch_penalty = penalty;
        self
    }

    /// Size of the opening board.
    #[must_use]
    pub fn initial_board_size(&self) -> usize {
        self.initial_deal_rounds * self.cards_per_deal
    }
}
