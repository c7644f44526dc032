//! Snapshot module - read-only, copyable views for rendering
//!
//! A [`GameSnapshot`] holds the settled grid, the falling piece, its ghost row,
//! the preview piece, score, lines and run state. It is plain data, so a
//! presentation layer can keep one and refill it each frame with
//! [`GameState::snapshot_into`](crate::GameState::snapshot_into) without allocating.

use crate::game_state::Tetromino;
use crate::rng::NextPiece;
use crate::shape::Shape;
use crate::types::{Cell, Color, PieceKind, RunState, BOARD_HEIGHT, BOARD_WIDTH};

/// Row-major grid of cells, `grid[y][x]`.
pub type RenderGrid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

pub const EMPTY_GRID: RenderGrid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// Paint the in-bounds cells of `shape` at (x, y) onto `grid`.
pub fn overlay_piece(grid: &mut RenderGrid, shape: &Shape, x: i8, y: i8, color: Color) {
    for (dx, dy) in shape.cells() {
        let (px, py) = (x + dx, y + dy);
        if px >= 0 && px < BOARD_WIDTH as i8 && py >= 0 && py < BOARD_HEIGHT as i8 {
            grid[py as usize][px as usize] = Some(color);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            color: value.color,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only copy of everything a presentation layer draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Settled cells only; the falling piece is in `active`.
    pub board: RenderGrid,
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub next: Option<NextPiece>,
    pub score: u32,
    pub lines: u32,
    pub run_state: RunState,
    pub lock_pending: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: EMPTY_GRID,
            active: None,
            ghost_y: None,
            next: None,
            score: 0,
            lines: 0,
            run_state: RunState::Running,
            lock_pending: false,
        }
    }
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        self.run_state.is_running()
    }

    /// Settled board with the falling piece painted on top.
    pub fn render_board(&self) -> RenderGrid {
        let mut grid = self.board;
        if let Some(active) = self.active {
            overlay_piece(&mut grid, &active.shape, active.x, active.y, active.color);
        }
        grid
    }
}
