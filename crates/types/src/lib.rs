//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no I/O, so they can be used from the engine,
//! the terminal renderer and the input mapping alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn**: row 0, horizontally centered on the piece's width
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DROP_INTERVAL_MS` | 1000 | Automatic descent period |
//! | `HARD_DROP_GRACE_MS` | 50 | Delay between a hard drop and its lock (terminal runner) |
//! | `FRAME_MS` | 16 | Terminal frame period (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Color, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.color(), Color::rgb(0xa0, 0x00, 0xf0));
//!
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert_eq!(GameAction::from_str("teleport"), None);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::Serialize;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Automatic descent period (one row per second)
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Grace period between a hard drop and the lock, allowing a last move or rotation.
pub const HARD_DROP_GRACE_MS: u32 = 50;

/// Frame period of the terminal runner (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Points awarded per cleared row.
pub const LINE_CLEAR_SCORE: u32 = 100;

/// 24-bit RGB color identifier.
///
/// Settled board cells store the color of the piece that locked there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_hex()
    }
}

/// Cell on the board (None = empty, Some = color of the settled block)
pub type Cell = Option<Color>;

/// The seven tetromino piece kinds
///
/// Each kind is bound to one fixed display color:
/// - **I**: cyan, horizontal bar
/// - **O**: yellow, 2x2 square
/// - **T**: purple
/// - **S**: green
/// - **Z**: red (mirror of S)
/// - **J**: blue
/// - **L**: orange (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in canonical order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// Fixed display color of this kind.
    pub const fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::rgb(0x00, 0xf0, 0xf0),
            PieceKind::O => Color::rgb(0xf0, 0xf0, 0x00),
            PieceKind::T => Color::rgb(0xa0, 0x00, 0xf0),
            PieceKind::S => Color::rgb(0x00, 0xf0, 0x00),
            PieceKind::Z => Color::rgb(0xf0, 0x00, 0x00),
            PieceKind::J => Color::rgb(0x00, 0x00, 0xf0),
            PieceKind::L => Color::rgb(0xf0, 0xa0, 0x00),
        }
    }
}

/// Commands accepted by the game dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    MoveDown,
    Rotate,
    HardDrop,
    Pause,
    Reset,
}

impl GameAction {
    /// Parse action from its command name (case-insensitive).
    ///
    /// Unknown names return `None`; callers drop them.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "moveleft" | "left" => Some(GameAction::MoveLeft),
            "moveright" | "right" => Some(GameAction::MoveRight),
            "movedown" | "down" => Some(GameAction::MoveDown),
            "rotate" => Some(GameAction::Rotate),
            "harddrop" | "drop" => Some(GameAction::HardDrop),
            "pause" => Some(GameAction::Pause),
            "reset" => Some(GameAction::Reset),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::Pause => "pause",
            GameAction::Reset => "reset",
        }
    }
}

/// Lifecycle of a game.
///
/// `Running` and `Paused` toggle into each other; `GameOver` is only left by a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    #[default]
    Running,
    Paused,
    GameOver,
}

impl RunState {
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Running => "running",
            RunState::Paused => "paused",
            RunState::GameOver => "game_over",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_colors_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(a.color(), b.color(), "{:?} and {:?} share a color", a, b);
            }
        }
    }

    #[test]
    fn color_hex_formatting() {
        assert_eq!(PieceKind::I.color().to_hex(), "#00f0f0");
        assert_eq!(PieceKind::L.color().to_hex(), "#f0a000");
    }

    #[test]
    fn piece_kind_str_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn action_names_parse_back() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::MoveDown,
            GameAction::Rotate,
            GameAction::HardDrop,
            GameAction::Pause,
            GameAction::Reset,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
        assert_eq!(GameAction::from_str(""), None);
        assert_eq!(GameAction::from_str("hold"), None);
    }

    #[test]
    fn serializes_for_event_log() {
        assert_eq!(
            serde_json::to_string(&PieceKind::T.color()).unwrap(),
            "\"#a000f0\""
        );
        assert_eq!(serde_json::to_string(&PieceKind::Z).unwrap(), "\"Z\"");
        assert_eq!(
            serde_json::to_string(&RunState::GameOver).unwrap(),
            "\"game_over\""
        );
    }

    #[test]
    fn default_timing() {
        assert_eq!(DROP_INTERVAL_MS, 1000);
        assert_eq!(HARD_DROP_GRACE_MS, 50);
        assert_eq!(LINE_CLEAR_SCORE, 100);
    }
}
