//! # set-engine
//!
//! Game-state engine for the single-player pattern-matching card game Set:
//! 81 cards, four attributes of three values each, and a match rule that
//! accepts a triplet only when every attribute is all-same or all-different
//! across it.
//!
//! ## Design Principles
//!
//! 1. **Pull-based**: The engine pushes no events. Callers mutate via
//!    `deal_cards` / `toggle_select` and re-read state afterwards.
//!
//! 2. **No error channel**: Off-board selections and empty-deck deals are
//!    silent no-ops. The only user-visible failure is the domain one (a
//!    completed selection that is not a Set), surfaced as a transient flag.
//!
//! 3. **One instance per game**: State is owned by the `GameEngine` value,
//!    not a shared singleton, so test games run in isolation.
//!
//! ## Modules
//!
//! - `core`: deterministic RNG, configuration
//! - `cards`: attribute enums, `Card`, the draw deck
//! - `board`: ordered card slots with stable indices
//! - `rules`: the Set validity predicate and board scanning
//! - `engine`: the `GameEngine` state machine

pub mod board;
pub mod cards;
pub mod core;
pub mod engine;
pub mod rules;

// Re-export commonly used types
pub use crate::board::Board;
pub use crate::cards::{Card, Color, Count, Deck, Shading, Shape, DECK_SIZE};
pub use crate::core::{GameConfig, GameRng, GameRngState};
pub use crate::engine::GameEngine;
pub use crate::rules::{find_set, is_valid_set};
