//! The game engine: deck, board, selection, and match resolution.
//!
//! `GameEngine` is a synchronous state machine. Presentation layers call
//! `deal_cards` and `toggle_select` and re-read the exposed state after
//! every mutation; the engine pushes no events. Edge cases (selecting an
//! off-board card, dealing from an empty deck) are absorbed as no-ops or
//! partial operations, never errors.
//!
//! One instance per game session. Calls must be serialized per instance:
//! `toggle_select` reads, mutates, then evaluates, and that sequence is not
//! safe under interleaving.

use im::HashSet as ImHashSet;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::board::Board;
use crate::cards::{Card, Deck};
use crate::core::{GameConfig, GameRng};
use crate::rules::{find_set, is_valid_set};

/// State machine for one game of Set.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    rng: GameRng,
    deck: Deck,
    board: Board,
    /// Currently selected cards; at most 3 between completed toggles.
    selection: ImHashSet<Card>,
    /// Cards removed from the board by valid matches.
    matched: FxHashSet<Card>,
    score: i64,
    /// Set when the most recent completed selection was not a Set; cleared
    /// by the next selection change.
    mismatch: bool,
}

impl GameEngine {
    /// Create an engine with the given configuration and seed, and deal the
    /// opening board.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut engine = Self {
            config,
            rng: GameRng::new(seed),
            deck: Deck::default(),
            board: Board::new(),
            selection: ImHashSet::new(),
            matched: FxHashSet::default(),
            score: 0,
            mismatch: false,
        };
        engine.new_game();
        engine
    }

    /// Create an engine with default configuration and a random seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        let rng = GameRng::from_entropy();
        let seed = rng.seed();
        Self::new(GameConfig::default(), seed)
    }

    /// Reset everything and deal a fresh opening board.
    ///
    /// Rebuilds and reshuffles the deck (continuing the engine's RNG
    /// stream, so a seeded session stays reproducible across resets) and
    /// clears board, selection, matched pile, score, and the mismatch flag.
    pub fn new_game(&mut self) {
        self.deck = Deck::full_shuffled(&mut self.rng);
        self.board.clear();
        self.selection.clear();
        self.matched.clear();
        self.score = 0;
        self.mismatch = false;

        for _ in 0..self.config.initial_deal_rounds {
            self.deal_cards();
        }
    }

    // === Dealing ===

    /// Deal up to `cards_per_deal` cards from the top of the deck.
    ///
    /// Empty slots are refilled first in ascending index order; only once
    /// no gaps remain are new slots appended. Stops early when the deck
    /// runs out; a partial (or empty) deal is not an error. Returns the
    /// cards dealt, in placement order.
    pub fn deal_cards(&mut self) -> SmallVec<[Card; 3]> {
        let mut dealt = SmallVec::new();
        while dealt.len() < self.config.cards_per_deal {
            let Some(card) = self.deck.draw() else {
                break;
            };
            self.board.place(card);
            dealt.push(card);
        }
        dealt
    }

    // === Selection & match resolution ===

    /// Toggle selection of a card on the board.
    ///
    /// No-op if the card does not currently occupy a slot. With fewer than
    /// 3 cards selected this toggles membership; with 3 already selected
    /// (a resolved mismatch still on display) any toggle starts a fresh
    /// selection holding just the tapped card. Completing a third pick
    /// resolves the match immediately: a valid Set moves the three cards
    /// off the board into the matched pile and rewards the score, an
    /// invalid one raises the mismatch flag and deducts the penalty while
    /// leaving the cards selected for the caller to render.
    pub fn toggle_select(&mut self, card: Card) {
        if !self.board.contains(card) {
            return;
        }

        if self.selection.len() == 3 {
            self.selection.clear();
            self.selection.insert(card);
        } else if self.selection.contains(&card) {
            self.selection.remove(&card);
        } else {
            self.selection.insert(card);
        }

        self.mismatch = false;
        if self.selection.len() == 3 {
            self.resolve_match();
        }
    }

    fn resolve_match(&mut self) {
        let picked: SmallVec<[Card; 3]> = self.selection.iter().copied().collect();
        let &[a, b, c] = picked.as_slice() else {
            return;
        };

        if is_valid_set([a, b, c]) {
            for card in [a, b, c] {
                self.board.remove(card);
                self.matched.insert(card);
            }
            self.selection.clear();
            self.score += self.config.match_reward;
        } else {
            self.mismatch = true;
            self.score -= self.config.mismatch_penalty;
        }
    }

    // === Read accessors ===

    /// The board slots, in order.
    #[must_use]
    pub fn board(&self) -> &[Option<Card>] {
        self.board.slots()
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Whether the card is currently selected.
    #[must_use]
    pub fn is_selected(&self, card: Card) -> bool {
        self.selection.contains(&card)
    }

    /// Whether the card has been removed by a valid match.
    #[must_use]
    pub fn is_matched(&self, card: Card) -> bool {
        self.matched.contains(&card)
    }

    /// The current selection (0-3 cards, all on the board).
    #[must_use]
    pub fn selection(&self) -> &ImHashSet<Card> {
        &self.selection
    }

    /// True while a completed-but-invalid selection is on display.
    #[must_use]
    pub fn last_match_failed(&self) -> bool {
        self.mismatch
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Cards removed by valid matches so far.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    /// The configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Any valid Set currently on the board, or `None` if the player must
    /// deal (or, with the deck empty, the game is over).
    #[must_use]
    pub fn find_set(&self) -> Option<[Card; 3]> {
        find_set(&self.board)
    }

    /// Whether the board currently holds at least one valid Set.
    #[must_use]
    pub fn has_available_set(&self) -> bool {
        self.find_set().is_some()
    }
}
