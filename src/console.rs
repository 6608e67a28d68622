//! Console presentation for game events.

use crate::orchestrator::GameEvent;
use crate::games::tictactoe::Termination;
use tokio::sync::mpsc;

/// Prints the pre-game banner.
pub fn welcome() {
    println!("GREETINGS PROFESSOR FALKEN");
    println!();
    println!("A STRANGE GAME.");
    println!("THE ONLY WINNING MOVE IS NOT TO PLAY.");
    println!();
}

/// Consumes game events and renders them to stdout until the channel
/// closes.
pub async fn run(mut event_rx: mpsc::UnboundedReceiver<GameEvent>) {
    while let Some(event) = event_rx.recv().await {
        render(&event);
    }
}

fn render(event: &GameEvent) {
    match event {
        GameEvent::Board(board) => {
            println!("\n{}\n", board);
        }
        GameEvent::TurnStarted { player, mark } => {
            println!("{}'s turn ({}):", player, mark);
        }
        GameEvent::AgentReplied { player, response } => {
            println!("Agent {} response:\n{}", player, response.trim());
        }
        GameEvent::MoveParsed { mv, .. } => {
            println!("Extracted move: {}", mv);
        }
        GameEvent::MoveRejected { message, .. } => {
            println!("{}", message);
        }
        GameEvent::GameOver(termination) => {
            println!("\n=== Game Results ===");
            match termination {
                Termination::Won(mark) => println!("Winner: Player {}", mark),
                Termination::Draw => println!("Game over: it's a draw!"),
                Termination::Stalled(mark) => {
                    println!("Game stalled: Player {} stopped producing legal moves", mark)
                }
            }
        }
    }
}
