//! Terminal rendering for blockfall.
//!
//! Rendering happens in two steps: [`GameView`] draws a [`GameSnapshot`](crate::core::GameSnapshot)
//! into a [`FrameBuffer`] without touching the terminal, and [`TerminalRenderer`] flushes
//! the framebuffer through crossterm, writing only what changed since the last frame.
//!
//! Board cells are drawn two columns wide to keep blocks roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
