//! Draw detection logic for tic-tac-toe.

use super::super::types::Board;
use super::win::check_winner;

/// Checks if every cell on the board is occupied.
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks if the game is a draw: full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
