//! Board module - manages the settled grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the color of the
//! piece that locked there. Storage is a flat row-major array, so the board is
//! `Copy`-sized and never allocates.
//!
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows above the board (y < 0) are legal for a falling piece but never stored.

use arrayvec::ArrayVec;

use crate::shape::Shape;
use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is inside the board and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Color of the settled block at (x, y), if any
    pub fn occupied_cell_color(&self, x: i8, y: i8) -> Option<Color> {
        self.get(x, y).flatten()
    }

    /// Whether `shape` placed with its origin at (x, y) is collision-free.
    ///
    /// Every filled cell must be within the side walls and above the floor.
    /// Cells above the top edge are allowed; cells on the board must be empty.
    pub fn fits(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.cells().all(|(dx, dy)| {
            let px = x + dx;
            let py = y + dy;
            if px < 0 || px >= BOARD_WIDTH as i8 || py >= BOARD_HEIGHT as i8 {
                return false;
            }
            py < 0 || !self.is_occupied(px, py)
        })
    }

    /// Write the filled cells of `shape` at (x, y) with `color`.
    ///
    /// Cells above the top edge are dropped. Returns the number of cells written.
    pub fn commit(&mut self, shape: &Shape, x: i8, y: i8, color: Color) -> usize {
        let mut written = 0;
        for (dx, dy) in shape.cells() {
            if y + dy < 0 {
                continue;
            }
            if self.set(x + dx, y + dy, Some(color)) {
                written += 1;
            }
        }
        written
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|cell| cell.is_some())
    }

    /// Number of rows that contain at least one settled block.
    pub fn filled_row_count(&self) -> usize {
        self.cells
            .chunks_exact(WIDTH)
            .filter(|row| row.iter().any(|cell| cell.is_some()))
            .count()
    }

    /// Remove every full row, shift the rows above down and refill the top with empty rows.
    ///
    /// Returns the indices of the removed rows, bottom to top, as they were before the clear.
    /// Non-contiguous full rows are handled in a single bottom-up pass.
    pub fn clear_full_rows(&mut self) -> ArrayVec<u8, HEIGHT> {
        let mut cleared = ArrayVec::new();
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y as u8);
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * WIDTH;
                self.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
            }
        }

        self.cells[..write_y * WIDTH].fill(None);
        cleared
    }

    /// Clear completed rows and return how many were removed.
    pub fn clear_completed_rows(&mut self) -> usize {
        self.clear_full_rows().len()
    }

    /// Flat row-major view of the cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// Copy the settled cells into a 2D grid.
    pub fn write_grid(&self, out: &mut [[Cell; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.cells.chunks_exact(WIDTH)) {
            dst.copy_from_slice(src);
        }
    }

    /// Empty the whole board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from text rows, bottom-aligned.
    ///
    /// `.` is empty, any other character is a block of `color`.
    /// Rows beyond the board width are truncated.
    pub fn from_rows(rows: &[&str], color: Color) -> Self {
        let mut board = Self::new();
        let offset = HEIGHT.saturating_sub(rows.len());
        for (i, row) in rows.iter().take(HEIGHT).enumerate() {
            let y = (offset + i) as i8;
            for (x, ch) in row.chars().take(WIDTH).enumerate() {
                if ch != '.' {
                    board.set(x as i8, y, Some(color));
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    const RED: Color = PieceKind::Z.color();

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_fits_allows_cells_above_top() {
        let board = Board::new();
        let i = Shape::of(PieceKind::I).rotated();
        // Vertical I with three cells above the board.
        assert!(board.fits(&i, 0, -3));
        assert!(!board.fits(&i, 0, 17));
        assert!(board.fits(&i, 0, 16));
    }

    #[test]
    fn test_fits_rejects_walls_and_blocks() {
        let mut board = Board::new();
        let o = Shape::of(PieceKind::O);
        assert!(!board.fits(&o, -1, 0));
        assert!(!board.fits(&o, 9, 0));
        assert!(board.fits(&o, 8, 0));

        board.set(5, 5, Some(RED));
        assert!(!board.fits(&o, 4, 4));
        assert!(board.fits(&o, 6, 4));
    }

    #[test]
    fn test_commit_skips_rows_above_top() {
        let mut board = Board::new();
        let o = Shape::of(PieceKind::O);
        assert_eq!(board.commit(&o, 0, -1, RED), 2);
        assert!(board.is_occupied(0, 0));
        assert!(board.is_occupied(1, 0));
        assert!(!board.is_occupied(0, 1));
    }

    #[test]
    fn test_clear_non_contiguous_rows() {
        let mut board = Board::from_rows(
            &[
                "x.........",
                "xxxxxxxxxx",
                ".x........",
                "xxxxxxxxxx",
            ],
            RED,
        );

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 17]);

        // Survivors keep their relative order and sit at the bottom.
        assert!(board.is_occupied(1, 19));
        assert!(!board.is_occupied(0, 19));
        assert!(board.is_occupied(0, 18));
        assert_eq!(board.filled_row_count(), 2);
    }

    #[test]
    fn test_clear_every_row() {
        let mut board = Board::new();
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                board.set(x, y, Some(RED));
            }
        }
        assert_eq!(board.clear_completed_rows(), BOARD_HEIGHT as usize);
        assert_eq!(board, Board::new());
    }
}
