//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. Which physical
//! key triggers which command is decided here and nowhere else; the engine only
//! ever sees actions.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
