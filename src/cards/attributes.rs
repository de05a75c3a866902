//! The four card attributes.
//!
//! Every card carries exactly one value of each attribute. All four are
//! closed three-value enums; the rules never order them, only compare them
//! for equality.
//!
//! Each enum exposes an `ALL` constant so deck construction and tests can
//! enumerate the full value space without a hand-maintained list at every
//! call site.

use serde::{Deserialize, Serialize};

/// Glyph drawn on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Triangle,
    Circle,
    Square,
}

impl Shape {
    /// All shape values, in enumeration order.
    pub const ALL: [Shape; 3] = [Shape::Triangle, Shape::Circle, Shape::Square];
}

/// Glyph color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Purple,
}

impl Color {
    /// All color values, in enumeration order.
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Purple];
}

/// Glyph fill style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shading {
    Solid,
    Striped,
    Outlined,
}

impl Shading {
    /// All shading values, in enumeration order.
    pub const ALL: [Shading; 3] = [Shading::Solid, Shading::Striped, Shading::Outlined];
}

/// Number of glyphs on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Count {
    One = 1,
    Two = 2,
    Three = 3,
}

impl Count {
    /// All count values, in enumeration order.
    pub const ALL: [Count; 3] = [Count::One, Count::Two, Count::Three];

    /// Numeric value (1-3), for presentation layers that render glyphs.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}
