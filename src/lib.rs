//! Blockfall: a terminal falling-block puzzle (workspace facade crate).
//!
//! The game rules live in `blockfall-core` and are re-exported here together with
//! the input mapping and terminal rendering crates. The runner's configuration and
//! event log are part of this crate.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod config;
pub mod event_log;

pub use config::AppConfig;
pub use event_log::{EventLog, LogRecord};
