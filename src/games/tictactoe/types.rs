//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Board side length.
pub const SIZE: usize = 3;

/// Maximum number of moves a game can hold.
pub const MAX_MOVES: usize = SIZE * SIZE;

/// One of the two symbols a player places on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// X (goes first).
    X,
    /// O (goes second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

/// Errors raised by board access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Coordinates outside the grid.
    #[display("Cell ({}, {}) is off the board", _0, _1)]
    OutOfBounds(usize, usize),

    /// Legal coordinates, but the cell is already filled.
    #[display("Cell ({}, {}) is already occupied", _0, _1)]
    CellOccupied(usize, usize),
}

impl std::error::Error for BoardError {}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order and addressed by (row, col).
/// An occupied cell is never overwritten: `set` refuses both out-of-bounds
/// coordinates and occupied targets without touching the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; MAX_MOVES],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; MAX_MOVES],
        }
    }

    fn index(row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= SIZE || col >= SIZE {
            return Err(BoardError::OutOfBounds(row, col));
        }
        Ok(row * SIZE + col)
    }

    /// Returns the cell at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if either coordinate is outside
    /// `[0, 3)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Square, BoardError> {
        Ok(self.squares[Self::index(row, col)?])
    }

    /// Writes `mark` to the cell at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for coordinates outside the grid
    /// and [`BoardError::CellOccupied`] if the cell is already filled. The
    /// board is unchanged in both cases.
    pub fn set(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), BoardError> {
        let idx = Self::index(row, col)?;
        if self.squares[idx] != Square::Empty {
            return Err(BoardError::CellOccupied(row, col));
        }
        self.squares[idx] = mark.into();
        Ok(())
    }

    /// Returns all cells as a slice, row-major.
    pub fn squares(&self) -> &[Square; MAX_MOVES] {
        &self.squares
    }

    /// Checks whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                let symbol = match self.squares[row * SIZE + col] {
                    Square::Empty => ' ',
                    Square::Occupied(Mark::X) => 'X',
                    Square::Occupied(Mark::O) => 'O',
                };
                result.push(symbol);
                if col < SIZE - 1 {
                    result.push('|');
                }
            }
            if row < SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }

    /// Enumerates each cell with its coordinates, one line per row.
    ///
    /// This is the snapshot embedded verbatim in move-request prompts, so
    /// agents see an unambiguous 0-based coordinate system:
    ///
    /// ```text
    /// Row 0: (0,0) X | (0,1)   | (0,2) O
    /// ```
    pub fn describe(&self) -> String {
        let mut rows = Vec::with_capacity(SIZE);
        for row in 0..SIZE {
            let cells: Vec<String> = (0..SIZE)
                .map(|col| {
                    let symbol = match self.squares[row * SIZE + col] {
                        Square::Empty => ' ',
                        Square::Occupied(Mark::X) => 'X',
                        Square::Occupied(Mark::O) => 'O',
                    };
                    format!("({},{}) {}", row, col, symbol)
                })
                .collect();
            rows.push(format!("Row {}: {}", row, cells.join(" | ")));
        }
        rows.join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Mark> for Square {
    fn from(mark: Mark) -> Self {
        Square::Occupied(mark)
    }
}
