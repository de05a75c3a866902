//! The visible board: an ordered sequence of card slots.
//!
//! A slot holds at most one card. Matching a triplet empties its slots in
//! place rather than compacting the sequence, so slot indices stay stable
//! for presentation layout; empty slots are refilled by later deals. The
//! board only grows across a game (new slots are appended when a deal finds
//! no gaps), and only a reset shrinks it.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Ordered card slots.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Board {
    slots: Vec<Option<Card>>,
}

impl Board {
    /// Create an empty board with no slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All slots in order. Presentation layers re-read this after every
    /// engine mutation.
    #[must_use]
    pub fn slots(&self) -> &[Option<Card>] {
        &self.slots
    }

    /// Total slot count, occupied or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when the board has no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Iterate over the cards currently on the board, in slot order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots.iter().filter_map(|slot| *slot)
    }

    /// Whether the card currently occupies some slot.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.slot_of(card).is_some()
    }

    /// Index of the slot holding the card, if it is on the board.
    #[must_use]
    pub fn slot_of(&self, card: Card) -> Option<usize> {
        self.slots.iter().position(|slot| *slot == Some(card))
    }

    /// Place a card into the lowest-index empty slot, appending a new slot
    /// at the end if every existing slot is occupied. Returns the slot
    /// index used.
    pub fn place(&mut self, card: Card) -> usize {
        if let Some(index) = self.slots.iter().position(|slot| slot.is_none()) {
            self.slots[index] = Some(card);
            index
        } else {
            self.slots.push(Some(card));
            self.slots.len() - 1
        }
    }

    /// Empty the slot holding the card. Returns false (and changes nothing)
    /// if the card is not on the board.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.slot_of(card) {
            Some(index) => {
                self.slots[index] = None;
                true
            }
            None => false,
        }
    }

    /// Drop all slots. Only a game reset does this.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
