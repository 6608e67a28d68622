//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the engine and tests can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Terminal classification of a board.
///
/// Always recomputed from the board, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner yet and at least one empty cell remains.
    InProgress,
    /// A full line belongs to this mark.
    Win(Mark),
    /// Every cell is occupied and no line is complete.
    Draw,
}

/// Evaluates a board: rows, then columns, then diagonals, then draw.
///
/// Short-circuits on the first complete line in that order. Pure and
/// deterministic.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        return Outcome::Win(winner);
    }
    if board.is_full() {
        return Outcome::Draw;
    }
    Outcome::InProgress
}
