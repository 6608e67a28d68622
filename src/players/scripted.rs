//! Scripted player for tests and offline runs.

use super::{AdapterError, Player};
use crate::games::tictactoe::Mark;
use std::collections::VecDeque;
use tracing::debug;

/// Player that replays a fixed sequence of canned replies.
///
/// Once the script is exhausted, further requests fail with
/// [`AdapterError`], which the orchestrator treats like any other
/// unavailable backend.
pub struct ScriptedPlayer {
    name: String,
    mark: Mark,
    replies: VecDeque<String>,
}

impl ScriptedPlayer {
    /// Creates a scripted player serving `replies` in order.
    pub fn new<I, S>(name: impl Into<String>, mark: Mark, replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            mark,
            replies: replies.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait::async_trait]
impl Player for ScriptedPlayer {
    async fn request(&mut self, _prompt: &str) -> Result<String, AdapterError> {
        match self.replies.pop_front() {
            Some(reply) => {
                debug!(player = %self.name, reply = %reply, "Serving scripted reply");
                Ok(reply)
            }
            None => Err(AdapterError::new(format!(
                "{} has no scripted replies left",
                self.name
            ))),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }
}
