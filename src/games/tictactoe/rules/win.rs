//! Win detection logic for tic-tac-toe.

use super::super::types::{Board, Mark, Square};
use tracing::instrument;

/// The 8 winning lines, in evaluation order: rows, columns, diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first fully uniform non-empty line in
/// row, column, diagonal order, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let sq = cell(board, a);
        if sq != Square::Empty && sq == cell(board, b) && sq == cell(board, c) {
            return match sq {
                Square::Occupied(mark) => Some(mark),
                Square::Empty => None,
            };
        }
    }

    None
}

fn cell(board: &Board, (row, col): (usize, usize)) -> Square {
    // LINES coordinates are always in bounds.
    board.get(row, col).unwrap_or(Square::Empty)
}
