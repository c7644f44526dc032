//! Shape module - tetromino occupancy matrices and naive rotation
//!
//! A [`Shape`] is a small rectangular matrix of filled/empty cells, at most 4x4,
//! stored inline so it is `Copy` and never allocates. Shapes are immutable:
//! [`Shape::rotated`] returns a new matrix with swapped dimensions.
//!
//! Rotation is a plain clockwise quarter turn around the matrix, with no
//! wall kicks: the caller keeps the piece origin and only checks for a fit.

use crate::types::PieceKind;

/// Largest side of any shape matrix.
pub const MAX_SHAPE_SIDE: usize = 4;

const X: bool = true;
const E: bool = false;
const EMPTY_ROW: [bool; MAX_SHAPE_SIDE] = [E; MAX_SHAPE_SIDE];

const I_SHAPE: Shape = Shape {
    rows: 1,
    cols: 4,
    filled: [[X, X, X, X], EMPTY_ROW, EMPTY_ROW, EMPTY_ROW],
};
const O_SHAPE: Shape = Shape {
    rows: 2,
    cols: 2,
    filled: [[X, X, E, E], [X, X, E, E], EMPTY_ROW, EMPTY_ROW],
};
const T_SHAPE: Shape = Shape {
    rows: 2,
    cols: 3,
    filled: [[E, X, E, E], [X, X, X, E], EMPTY_ROW, EMPTY_ROW],
};
const S_SHAPE: Shape = Shape {
    rows: 2,
    cols: 3,
    filled: [[E, X, X, E], [X, X, E, E], EMPTY_ROW, EMPTY_ROW],
};
const Z_SHAPE: Shape = Shape {
    rows: 2,
    cols: 3,
    filled: [[X, X, E, E], [E, X, X, E], EMPTY_ROW, EMPTY_ROW],
};
const J_SHAPE: Shape = Shape {
    rows: 2,
    cols: 3,
    filled: [[X, E, E, E], [X, X, X, E], EMPTY_ROW, EMPTY_ROW],
};
const L_SHAPE: Shape = Shape {
    rows: 2,
    cols: 3,
    filled: [[E, E, X, E], [X, X, X, E], EMPTY_ROW, EMPTY_ROW],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    /// `filled[y][x]`; cells outside `rows x cols` are always false.
    filled: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl Shape {
    /// Canonical spawn orientation of a piece kind.
    pub const fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => I_SHAPE,
            PieceKind::O => O_SHAPE,
            PieceKind::T => T_SHAPE,
            PieceKind::S => S_SHAPE,
            PieceKind::Z => Z_SHAPE,
            PieceKind::J => J_SHAPE,
            PieceKind::L => L_SHAPE,
        }
    }

    /// Build a shape from rows of 0/1 values.
    ///
    /// Returns None for empty, ragged, or oversized input.
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height > MAX_SHAPE_SIDE || width == 0 || width > MAX_SHAPE_SIDE {
            return None;
        }

        let mut filled = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return None;
            }
            for (x, &v) in row.iter().enumerate() {
                filled[y][x] = v != 0;
            }
        }

        Some(Self {
            rows: height as u8,
            cols: width as u8,
            filled,
        })
    }

    /// Number of matrix rows.
    pub fn height(&self) -> u8 {
        self.rows
    }

    /// Number of matrix columns.
    pub fn width(&self) -> u8 {
        self.cols
    }

    pub fn is_filled(&self, x: u8, y: u8) -> bool {
        x < self.cols && y < self.rows && self.filled[y as usize][x as usize]
    }

    /// Offsets `(x, y)` of every filled cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows).flat_map(move |y| {
            (0..self.cols)
                .filter(move |&x| self.filled[y as usize][x as usize])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// Clockwise quarter turn: `new[x][rows - 1 - y] = old[y][x]`.
    pub fn rotated(&self) -> Self {
        let rows = self.rows as usize;
        let mut filled = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for y in 0..rows {
            for x in 0..self.cols as usize {
                filled[x][rows - 1 - y] = self.filled[y][x];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            filled,
        }
    }
}
