//! Cards: attribute enums, the `Card` value, and the draw deck.

pub mod attributes;
pub mod card;
pub mod deck;

pub use attributes::{Color, Count, Shading, Shape};
pub use card::{Card, DECK_SIZE};
pub use deck::Deck;
