//! Prompt construction for move requests.
//!
//! Two pieces make up a request: per-player standing instructions
//! (sent as the system prompt) and a fresh per-turn message carrying
//! the serialized board and whose turn it is.

use crate::games::tictactoe::{Board, Mark};

/// Builds the standing instructions for an agent playing `mark`.
///
/// Establishes the agent's own mark, the opponent's mark with an
/// instruction to block, the exact reply format, worked examples of all
/// nine coordinate pairs, a no-explanations rule, the 0-based indexing
/// note, and the win condition.
pub fn instructions_for(mark: Mark) -> String {
    let opponent = mark.opponent();
    [
        format!("You are a world class Tic-Tac-Toe player using the symbol '{mark}'."),
        format!(
            "Your opponent is using the symbol '{opponent}'. Block their potential winning moves."
        ),
        "Make your move in the format 'row, col' based on the current board state.".to_string(),
        "Examples: (0,0) (1,1) (2,2) (0,1) (0,2) (1,0) (1,2) (2,0) (2,1)".to_string(),
        "Do not include any explanations or extra text. Only provide the move.".to_string(),
        "Row and column indices start from 0.".to_string(),
        "To win, you must get three of your symbols in a row (horizontally, vertically, or diagonally)."
            .to_string(),
    ]
    .join("\n")
}

/// Builds the per-turn message: the board snapshot plus a reminder of
/// whose turn it is and the expected reply format.
pub fn turn_prompt(board: &Board, player_name: &str) -> String {
    format!(
        "Current board state:\n{}\n{}'s turn. Make your move in the format 'row, col'.",
        board.describe(),
        player_name
    )
}
