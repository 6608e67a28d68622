//! Player trait and implementations.

mod agent;
mod scripted;

pub use agent::AgentPlayer;
pub use scripted::ScriptedPlayer;

use crate::games::tictactoe::Mark;
use derive_more::{Display, Error};
use tracing::error;

/// A move-proposing participant: given a text prompt describing the
/// current state, returns a free-text reply.
///
/// The core never sees how the reply is produced; it parses whatever
/// text comes back. Two instances exist per game and their marks are
/// always complementary.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Requests a move, returning the raw reply text.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError`] if no reply could be produced. The
    /// orchestrator treats this as a non-fatal per-turn error and
    /// re-prompts the same player.
    async fn request(&mut self, prompt: &str) -> Result<String, AdapterError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Returns the mark assigned to this player for the whole game.
    fn mark(&self) -> Mark;
}

/// The player's backend could not produce a response.
#[derive(Debug, Clone, Display, Error)]
#[display("Agent unavailable: {} at {}:{}", message, file, line)]
pub struct AdapterError {
    /// Error message.
    pub message: String,
    /// Line number where the error was created.
    pub line: u32,
    /// Source file where the error was created.
    pub file: &'static str,
}

impl AdapterError {
    /// Creates a new adapter error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        error!(error_message = %message, "Adapter error created");
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
