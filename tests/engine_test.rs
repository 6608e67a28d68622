//! Tests for the phase-typed game engine.

use tictactoe_arena::{
    BoardError, GameInProgress, GameSetup, MAX_MOVES, Mark, Move, Termination, Transition,
};

/// Applies a sequence of moves, panicking if the game finishes early.
fn play_all(game: GameInProgress, moves: &[(usize, usize)]) -> Transition {
    let mut game = game;
    for (i, &(row, col)) in moves.iter().enumerate() {
        match game.apply(Move::new(row, col)).expect("Valid move") {
            Transition::Continued(next) => game = next,
            finished @ Transition::Finished(_) => {
                assert_eq!(i, moves.len() - 1, "Game finished before the last move");
                return finished;
            }
        }
    }
    Transition::Continued(game)
}

#[test]
fn test_lifecycle_starts_with_x() {
    let game = GameSetup::new().start(Mark::X);
    assert_eq!(game.to_move(), Mark::X);
    assert_eq!(game.turns(), 0);
}

#[test]
fn test_marks_alternate_on_accepted_moves() {
    let game = GameSetup::new().start(Mark::X);

    let game = match game.apply(Move::new(0, 0)).expect("Valid move") {
        Transition::Continued(g) => g,
        Transition::Finished(_) => panic!("Game shouldn't finish"),
    };
    assert_eq!(game.to_move(), Mark::O);
    assert_eq!(game.turns(), 1);

    let game = match game.apply(Move::new(1, 1)).expect("Valid move") {
        Transition::Continued(g) => g,
        Transition::Finished(_) => panic!("Game shouldn't finish"),
    };
    assert_eq!(game.to_move(), Mark::X);
    assert_eq!(game.turns(), 2);
}

#[test]
fn test_rejected_move_consumes_no_turn() {
    let game = GameSetup::new().start(Mark::X);
    let game = match game.apply(Move::new(0, 0)).expect("Valid move") {
        Transition::Continued(g) => g,
        Transition::Finished(_) => panic!("Game shouldn't finish"),
    };

    // O tries the occupied cell, then an off-board one.
    assert_eq!(
        game.apply(Move::new(0, 0)).unwrap_err(),
        BoardError::CellOccupied(0, 0)
    );
    assert_eq!(
        game.apply(Move::new(3, 1)).unwrap_err(),
        BoardError::OutOfBounds(3, 1)
    );

    // Still O's turn, counter unchanged, board untouched.
    assert_eq!(game.to_move(), Mark::O);
    assert_eq!(game.turns(), 1);

    let game = match game.apply(Move::new(1, 1)).expect("Valid move") {
        Transition::Continued(g) => g,
        Transition::Finished(_) => panic!("Game shouldn't finish"),
    };
    assert_eq!(game.turns(), 2);
}

#[test]
fn test_win_detected_on_fifth_move() {
    // X takes the top row in turns 1, 3, 5; O plays row 1.
    let moves = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)];
    let result = play_all(GameSetup::new().start(Mark::X), &moves);

    match result {
        Transition::Finished(done) => {
            assert_eq!(done.termination(), Termination::Won(Mark::X));
            assert_eq!(done.termination().winner(), Some(Mark::X));
            assert_eq!(done.turns(), 5);
        }
        Transition::Continued(_) => panic!("Game should be finished"),
    }
}

#[test]
fn test_diagonal_win_for_o() {
    let moves = [
        (0, 1), // X
        (0, 0), // O
        (0, 2), // X
        (1, 1), // O
        (1, 0), // X
        (2, 2), // O wins the main diagonal
    ];
    let result = play_all(GameSetup::new().start(Mark::X), &moves);

    match result {
        Transition::Finished(done) => {
            assert_eq!(done.termination(), Termination::Won(Mark::O));
        }
        Transition::Continued(_) => panic!("Game should be finished"),
    }
}

#[test]
fn test_full_board_without_winner_is_draw() {
    // Final board: X O X / X O O / O X X
    let moves = [
        (0, 0), // X
        (0, 1), // O
        (0, 2), // X
        (1, 1), // O
        (1, 0), // X
        (1, 2), // O
        (2, 1), // X
        (2, 0), // O
        (2, 2), // X
    ];
    let result = play_all(GameSetup::new().start(Mark::X), &moves);

    match result {
        Transition::Finished(done) => {
            assert_eq!(done.termination(), Termination::Draw);
            assert!(done.termination().is_draw());
            assert_eq!(done.turns(), MAX_MOVES);
            assert!(done.board().is_full());
        }
        Transition::Continued(_) => panic!("Game should be finished"),
    }
}

#[test]
fn test_restart_returns_to_empty_idle_board() {
    let moves = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)];
    let done = match play_all(GameSetup::new().start(Mark::X), &moves) {
        Transition::Finished(done) => done,
        Transition::Continued(_) => panic!("Game should be finished"),
    };

    let fresh = done.restart().start(Mark::X);
    assert_eq!(fresh.turns(), 0);
    assert_eq!(fresh.to_move(), Mark::X);
    assert!(!fresh.board().is_full());
    assert!(fresh.board().squares().iter().all(|s| {
        *s == tictactoe_arena::Square::Empty
    }));
}
