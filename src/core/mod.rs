//! Core building blocks: RNG and configuration.

pub mod config;
pub mod rng;

pub use config::GameConfig;
pub use rng::{GameRng, GameRngState};
