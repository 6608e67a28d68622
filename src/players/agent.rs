//! LLM-backed player.

use super::{AdapterError, Player};
use crate::agent_config::{AgentConfig, ConfigError};
use crate::games::tictactoe::Mark;
use crate::llm_client::LlmClient;
use crate::prompt;
use tracing::{debug, info, instrument};

/// Player that asks an LLM for each move.
///
/// The standing instructions (own mark, opponent, reply format) are the
/// system prompt; each turn's board snapshot arrives as the user message.
pub struct AgentPlayer {
    name: String,
    mark: Mark,
    instructions: String,
    client: LlmClient,
}

impl AgentPlayer {
    /// Creates a new agent player for `mark` backed by `client`.
    #[instrument(skip_all, fields(agent = %name.as_ref(), mark = %mark))]
    pub fn new(name: impl AsRef<str>, mark: Mark, client: LlmClient) -> Self {
        let name = name.as_ref().to_string();
        info!("Creating agent player");
        Self {
            instructions: prompt::instructions_for(mark),
            name,
            mark,
            client,
        }
    }

    /// Builds an agent player from a configuration file's contents.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the LLM configuration cannot be
    /// created (e.g., a missing API key).
    pub fn from_config(config: &AgentConfig, mark: Mark) -> Result<Self, ConfigError> {
        let llm_config = config.create_llm_config()?;
        Ok(Self::new(config.name(), mark, LlmClient::new(llm_config)))
    }

    /// Returns the standing instructions sent with every request.
    pub fn instructions(&self) -> &str {
        &self.instructions
    }
}

#[async_trait::async_trait]
impl Player for AgentPlayer {
    async fn request(&mut self, prompt: &str) -> Result<String, AdapterError> {
        debug!(agent = %self.name, "Requesting move from LLM");
        self.client
            .generate(&self.instructions, prompt)
            .await
            .map_err(|e| AdapterError::new(e.to_string()))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_uses_config_name() {
        // Ollama needs no API key, so config creation succeeds offline.
        let config = AgentConfig::new("Player X".to_string());
        let player = AgentPlayer::from_config(&config, Mark::X).expect("Config should build");
        assert_eq!(player.name(), "Player X");
        assert_eq!(player.mark(), Mark::X);
        assert!(player.instructions().contains("'X'"));
    }
}
