//! Properties of the Set validity rule.
//!
//! Beyond the fixed ground-truth cases in the unit tests, these check the
//! structural properties the rule must hold over the whole card space:
//! permutation invariance, the unique-third-card theorem, and the known
//! total count of Sets among all 81 cards.

use proptest::prelude::*;
use set_engine::{is_valid_set, Card, Color, Count, Shading, Shape, DECK_SIZE};

fn card_strategy() -> impl Strategy<Value = Card> {
    (0..3usize, 0..3usize, 0..3usize, 0..3usize).prop_map(|(s, c, sh, n)| {
        Card::new(Shape::ALL[s], Color::ALL[c], Shading::ALL[sh], Count::ALL[n])
    })
}

proptest! {
    #[test]
    fn prop_permutation_invariant(
        a in card_strategy(),
        b in card_strategy(),
        c in card_strategy(),
    ) {
        let expected = is_valid_set([a, b, c]);
        for trio in [
            [a, b, c],
            [a, c, b],
            [b, a, c],
            [b, c, a],
            [c, a, b],
            [c, b, a],
        ] {
            prop_assert_eq!(is_valid_set(trio), expected);
        }
    }

    #[test]
    fn prop_total_over_duplicates(a in card_strategy(), b in card_strategy()) {
        // Never panics, and the degenerate cases have fixed answers:
        // three copies of one card are all-same on every attribute.
        prop_assert!(is_valid_set([a, a, a]));
        // Two copies plus a different card always leave some attribute
        // two-same-one-different.
        if a != b {
            prop_assert!(!is_valid_set([a, a, b]));
        }
    }

    #[test]
    fn prop_unique_third_card(a in card_strategy(), b in card_strategy()) {
        prop_assume!(a != b);

        // For any two distinct cards, exactly one card completes a Set.
        let completions = Card::full_deck()
            .into_iter()
            .filter(|&x| x != a && x != b && is_valid_set([a, b, x]))
            .count();
        prop_assert_eq!(completions, 1);
    }
}

#[test]
fn test_total_set_count_over_full_deck() {
    // Each of the 81*80/2 distinct pairs has a unique completion, and each
    // Set is counted once per its three pairs: 3240 / 3 = 1080.
    let deck = Card::full_deck();
    let mut valid = 0usize;

    for i in 0..DECK_SIZE {
        for j in (i + 1)..DECK_SIZE {
            for k in (j + 1)..DECK_SIZE {
                if is_valid_set([deck[i], deck[j], deck[k]]) {
                    valid += 1;
                }
            }
        }
    }

    assert_eq!(valid, 1080);
}
