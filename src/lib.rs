//! Tic-Tac-Toe Arena - LLM agents battling on a 3x3 board.
//!
//! # Architecture
//!
//! - **Engine**: board model, outcome evaluation, move parsing, and a
//!   phase-typed turn state machine
//! - **Players**: move-proposing agents behind a text-in/text-out trait
//!   (LLM-backed or scripted)
//! - **Orchestrator**: drives the turn loop and narrates it over an
//!   event channel
//! - **Console**: renders events for an observer
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_arena::{Mark, Orchestrator, ScriptedPlayer};
//! use tokio::sync::mpsc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let (event_tx, _event_rx) = mpsc::unbounded_channel();
//!
//! let x = ScriptedPlayer::new("Player X", Mark::X, ["0, 0", "0, 1", "0, 2"]);
//! let o = ScriptedPlayer::new("Player O", Mark::O, ["1, 0", "1, 1"]);
//!
//! let mut orchestrator = Orchestrator::new(Box::new(x), Box::new(o), event_tx);
//! let termination = orchestrator.run().await?;
//! println!("{termination}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod agent_config;
mod games;
mod llm_client;
mod orchestrator;
mod players;

// Presentation and prompt construction stay addressable as modules.
pub mod console;
pub mod prompt;

// Crate-level exports - Agent configuration
pub use agent_config::{AgentConfig, ConfigError};

// Crate-level exports - LLM client
pub use llm_client::{DEFAULT_OLLAMA_URL, LlmClient, LlmConfig, LlmError, LlmProvider};

// Crate-level exports - Orchestration
pub use orchestrator::{GameEvent, Orchestrator};

// Crate-level exports - Players
pub use players::{AdapterError, AgentPlayer, Player, ScriptedPlayer};

// Crate-level exports - Game engine (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardError, GameFinished, GameInProgress, GameSetup, MAX_MOVES, Mark, Move, Outcome,
    ParseError, SIZE, Square, Termination, Transition, check_winner, evaluate, is_draw, is_full,
};
