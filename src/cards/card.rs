//! Card values and full-deck enumeration.
//!
//! A `Card` is an immutable combination of one value from each of the four
//! attributes. Equality and hashing are structural: two cards with the same
//! attribute values are the same card, which is what lets selections and the
//! matched pile be plain hash sets.

use serde::{Deserialize, Serialize};

use super::attributes::{Color, Count, Shading, Shape};

/// Number of distinct cards: 3 shapes x 3 colors x 3 shadings x 3 counts.
pub const DECK_SIZE: usize = 81;

/// A single card.
///
/// `Copy` by design: four fieldless enums, cheaper to copy than to point at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub shape: Shape,
    pub color: Color,
    pub shading: Shading,
    pub count: Count,
}

impl Card {
    /// Create a card from its four attribute values.
    #[must_use]
    pub const fn new(shape: Shape, color: Color, shading: Shading, count: Count) -> Self {
        Self { shape, color, shading, count }
    }

    /// All 81 cards, one per attribute combination, in enumeration order.
    #[must_use]
    pub fn full_deck() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for &shape in &Shape::ALL {
            for &color in &Color::ALL {
                for &shading in &Shading::ALL {
                    for &count in &Count::ALL {
                        cards.push(Card::new(shape, color, shading, count));
                    }
                }
            }
        }
        cards
    }
}
