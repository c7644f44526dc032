//! Board tests: storage, collision and row clearing

use blockfall::core::{Board, Shape};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const CYAN: blockfall::types::Color = PieceKind::I.color();

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {})", x, y);
        }
    }
    assert_eq!(board.filled_row_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(CYAN)));
    assert_eq!(board.get(5, 10), Some(Some(CYAN)));
    assert_eq!(board.occupied_cell_color(5, 10), Some(CYAN));
    assert!(board.is_occupied(5, 10));

    assert!(!board.set(10, 10, Some(CYAN)));
    assert!(!board.is_occupied(10, 10));
}

#[test]
fn test_fits_checks_walls_floor_and_blocks() {
    let mut board = Board::new();
    let t = Shape::of(PieceKind::T);

    assert!(board.fits(&t, 0, 0));
    assert!(board.fits(&t, 7, 18));
    assert!(!board.fits(&t, 8, 0), "right wall");
    assert!(!board.fits(&t, -1, 0), "left wall");
    assert!(!board.fits(&t, 0, 19), "floor");

    board.set(1, 19, Some(CYAN));
    assert!(!board.fits(&t, 0, 18));
}

#[test]
fn test_commit_writes_piece_color() {
    let mut board = Board::new();
    let l = Shape::of(PieceKind::L);
    let orange = PieceKind::L.color();

    assert_eq!(board.commit(&l, 3, 18, orange), 4);
    assert_eq!(board.occupied_cell_color(5, 18), Some(orange));
    assert_eq!(board.occupied_cell_color(3, 19), Some(orange));
    assert_eq!(board.occupied_cell_color(3, 18), None);
}

#[test]
fn test_clear_with_no_full_rows_is_a_no_op() {
    let mut board = Board::from_rows(&["xxxxxxxxx.", "x.x.x.x.x."], CYAN);
    let before = board.clone();

    assert_eq!(board.clear_completed_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_shifts_rows_down() {
    let mut board = Board::from_rows(&["...x......", "xxxxxxxxxx", "x........."], CYAN);

    assert_eq!(board.clear_completed_rows(), 1);
    assert!(board.is_occupied(3, 18));
    assert!(board.is_occupied(0, 19));
    assert!(!board.is_occupied(3, 17));
    assert_eq!(board.filled_row_count(), 2);
}

#[test]
fn test_clear_four_rows_leaves_empty_rows_on_top() {
    let mut board = Board::from_rows(
        &[
            "xxxxxxxxxx",
            "xxxxxxxxxx",
            "xxxxxxxxxx",
            "xxxxxxxxxx",
        ],
        CYAN,
    );

    assert_eq!(board.clear_completed_rows(), 4);
    assert_eq!(board, Board::new());
}

#[test]
fn test_write_grid_matches_cells() {
    let board = Board::from_rows(&["x........x"], CYAN);
    let mut grid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    board.write_grid(&mut grid);

    assert_eq!(grid[19][0], Some(CYAN));
    assert_eq!(grid[19][9], Some(CYAN));
    assert_eq!(grid[19][5], None);
    assert_eq!(board.rows().count(), BOARD_HEIGHT as usize);
}
