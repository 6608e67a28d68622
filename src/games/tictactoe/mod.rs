//! Tic-tac-toe engine: board model, outcome evaluation, move parsing,
//! and the phase-typed turn state machine.

mod action;
mod rules;
mod types;
mod typestate;

pub use action::{Move, ParseError};
pub use rules::{Outcome, check_winner, evaluate, is_draw, is_full};
pub use types::{Board, BoardError, MAX_MOVES, Mark, SIZE, Square};
pub use typestate::{GameFinished, GameInProgress, GameSetup, Termination, Transition};
