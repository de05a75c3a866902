//! Match-validity rules.

pub mod matching;

pub use matching::{find_set, is_valid_set};
