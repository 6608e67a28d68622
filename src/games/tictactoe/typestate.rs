//! Phase-typed game state for tic-tac-toe.
//!
//! Each phase is its own type: a finished game always has a
//! [`Termination`], and only an in-progress game accepts moves.
//! Rejected moves leave the game value untouched so the caller can
//! retry the same player.

use super::action::Move;
use super::rules::{Outcome, evaluate};
use super::types::{Board, BoardError, Mark};
use tracing::instrument;

/// Game ready to start. The board is always empty.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a new game in the idle phase.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game: board empty, turn counter zero, `first` to move.
    #[instrument(skip(self))]
    pub fn start(self, first: Mark) -> GameInProgress {
        GameInProgress {
            board: self.board,
            to_move: first,
            turns: 0,
        }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new()
    }
}

/// Game in progress: a board, the active mark, and the count of
/// accepted moves so far.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    board: Board,
    to_move: Mark,
    turns: usize,
}

impl GameInProgress {
    /// Applies a move for the active mark.
    ///
    /// On success the turn counter advances by one and either the
    /// opposing mark is to move or the game is finished. On failure
    /// `self` is unchanged: no cell written, no counter increment, no
    /// mark switch.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] or [`BoardError::CellOccupied`]
    /// for an illegal target.
    #[instrument(skip(self), fields(mark = %self.to_move, turn = self.turns))]
    pub fn apply(&self, mv: Move) -> Result<Transition, BoardError> {
        let mut board = self.board.clone();
        board.set(mv.row, mv.col, self.to_move)?;
        let turns = self.turns + 1;

        match evaluate(&board) {
            Outcome::Win(mark) => Ok(Transition::Finished(GameFinished {
                board,
                termination: Termination::Won(mark),
                turns,
            })),
            Outcome::Draw => Ok(Transition::Finished(GameFinished {
                board,
                termination: Termination::Draw,
                turns,
            })),
            Outcome::InProgress => Ok(Transition::Continued(GameInProgress {
                board,
                to_move: self.to_move.opponent(),
                turns,
            })),
        }
    }

    /// Returns the active mark.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the number of accepted moves so far.
    pub fn turns(&self) -> usize {
        self.turns
    }
}

/// Game finished: the outcome is always present.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    termination: Termination,
    turns: usize,
}

impl GameFinished {
    /// Returns how the game ended.
    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Returns the final board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the total number of accepted moves.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Discards the finished game and returns to the idle phase.
    pub fn restart(self) -> GameSetup {
        GameSetup::new()
    }
}

/// Result of applying a move.
#[derive(Debug)]
pub enum Transition {
    /// Game continues with the opposing mark to move.
    Continued(GameInProgress),
    /// Game reached a terminal state.
    Finished(GameFinished),
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// This mark completed a line.
    Won(Mark),
    /// The board filled with no winner.
    Draw,
    /// This mark exhausted its retry allowance without a legal move.
    Stalled(Mark),
}

impl Termination {
    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Termination::Won(mark) => Some(*mark),
            _ => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Termination::Draw)
    }
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Termination::Won(mark) => write!(f, "Player {} wins", mark),
            Termination::Draw => write!(f, "Draw"),
            Termination::Stalled(mark) => {
                write!(f, "Player {} stopped producing legal moves", mark)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_resets_counter_and_mark() {
        let game = GameSetup::new().start(Mark::X);
        assert_eq!(game.to_move(), Mark::X);
        assert_eq!(game.turns(), 0);
    }

    #[test]
    fn test_rejected_move_leaves_game_unchanged() {
        let game = GameSetup::new().start(Mark::X);
        let game = match game.apply(Move::new(1, 1)).expect("Valid move") {
            Transition::Continued(g) => g,
            Transition::Finished(_) => panic!("Game shouldn't finish after one move"),
        };

        let result = game.apply(Move::new(1, 1));
        assert_eq!(result.unwrap_err(), BoardError::CellOccupied(1, 1));
        // Same game value is still usable for the retry.
        assert_eq!(game.to_move(), Mark::O);
        assert_eq!(game.turns(), 1);
    }
}
