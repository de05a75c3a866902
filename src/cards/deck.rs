//! The draw deck.
//!
//! Built complete (all 81 cards) and shuffled once per game. Top of the
//! deck is the end of the vec, so drawing is a pop; deal order is shuffle
//! order.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::rng::GameRng;

/// Ordered draw pile.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a complete 81-card deck and shuffle it.
    #[must_use]
    pub fn full_shuffled(rng: &mut GameRng) -> Self {
        let mut cards = Card::full_deck();
        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// Draw the top card. `None` when the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Number of cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// True when no cards are left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards still in the deck, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
