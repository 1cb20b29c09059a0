//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Only the
//! four arrow keys drive the game; everything else is ignored apart from
//! the quit keys, which belong to the runner rather than the game.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
