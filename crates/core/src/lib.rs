//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block puzzle and nothing else.
//! It has **no dependencies** on terminals, files, or clocks, making it:
//!
//! - **Deterministic**: the same seed and the same event sequence produce the same game
//! - **Testable**: time is simulated, so timing rules are tested by advancing milliseconds
//! - **Portable**: any presentation layer can drive it
//! - **Fast**: tick, move, rotate, lock and render never allocate
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 settled grid with collision checks and row clearing
//! - [`shape`]: tetromino matrices and the clockwise quarter turn
//! - [`rng`]: seeded uniform (or 7-bag) piece generator and spawn placement
//! - [`timer`]: cancelable periodic drop timer over simulated time
//! - [`game_state`]: falling piece control, lock & clear, scoring, run state
//! - [`snapshot`]: copyable read-only views for rendering
//!
//! # Game Rules
//!
//! - Pieces spawn at row 0, horizontally centered; a blocked spawn ends the game
//! - Rotation is a plain matrix turn with no wall kicks; a colliding turn is discarded
//! - The piece falls one row per drop interval (1000ms by default); a failed fall locks it
//! - Each cleared row scores 100 points
//! - Pause stops the drop timer; game over is left only by a reset
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameEvent, GameState};
//! use blockfall_types::{GameAction, RunState};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.handle(GameEvent::Action(GameAction::MoveRight));
//! game.handle(GameEvent::Action(GameAction::Rotate));
//! game.handle(GameEvent::Tick { elapsed_ms: 1000 });
//! game.handle(GameEvent::Action(GameAction::HardDrop));
//!
//! assert_eq!(game.run_state(), RunState::Running);
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod shape;
pub mod snapshot;
pub mod timer;

pub use blockfall_types as types;

pub use board::Board;
pub use game_state::{EngineConfig, GameEvent, GameState, LockEvent, Tetromino};
pub use rng::{spawn_column, NextPiece, PieceGenerator, Randomizer};
pub use shape::Shape;
pub use snapshot::{overlay_piece, ActiveSnapshot, GameSnapshot, RenderGrid, EMPTY_GRID};
pub use timer::DropTimer;
