//! The Set rule: when do three cards match?
//!
//! A triplet is a Set when, for every one of the four attributes taken
//! independently, the three cards are either all identical or all mutually
//! distinct in that attribute. "Two same, one different" on any attribute
//! rejects the whole triplet.
//!
//! `is_valid_set` is pure and total: any three cards (including duplicates,
//! which a well-formed selection can never produce) yield an answer, and
//! permuting the triplet never changes it.

use crate::board::Board;
use crate::cards::Card;

/// All-same or all-different over three values of one attribute.
fn attribute_ok<T: Eq>(a: T, b: T, c: T) -> bool {
    let all_same = a == b && b == c;
    let all_diff = a != b && b != c && a != c;
    all_same || all_diff
}

/// Whether three cards form a valid Set.
#[must_use]
pub fn is_valid_set(cards: [Card; 3]) -> bool {
    let [a, b, c] = cards;
    attribute_ok(a.shape, b.shape, c.shape)
        && attribute_ok(a.color, b.color, c.color)
        && attribute_ok(a.shading, b.shading, c.shading)
        && attribute_ok(a.count, b.count, c.count)
}

/// Find any valid Set among the cards currently on the board.
///
/// Scans occupied slots in index order and returns the first valid triplet,
/// or `None` when the board holds no Set (the signal that a stuck player
/// must deal, or that the game is over once the deck is empty too).
#[must_use]
pub fn find_set(board: &Board) -> Option<[Card; 3]> {
    let cards: Vec<Card> = board.cards().collect();

    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            for k in (j + 1)..cards.len() {
                let trio = [cards[i], cards[j], cards[k]];
                if is_valid_set(trio) {
                    return Some(trio);
                }
            }
        }
    }
    None
}
