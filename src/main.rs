//! Tic-Tac-Toe Arena - two LLM agents, one board.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::path::Path;
use std::time::Duration;
use tictactoe_arena::{AgentConfig, AgentPlayer, Mark, Orchestrator, console};
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let x_config = load_player_config(&cli.player_x, "Player X", cli.x_model)?;
    let o_config = load_player_config(&cli.player_o, "Player O", cli.o_model)?;

    let player_x = AgentPlayer::from_config(&x_config, Mark::X)?;
    let player_o = AgentPlayer::from_config(&o_config, Mark::O)?;

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(console::run(event_rx));

    let mut orchestrator = Orchestrator::new(Box::new(player_x), Box::new(player_o), event_tx);
    if let Some(limit) = cli.retry_limit {
        orchestrator = orchestrator.with_retry_limit(limit);
    }
    if let Some(secs) = cli.move_timeout {
        orchestrator = orchestrator.with_move_timeout(Duration::from_secs(secs));
    }

    console::welcome();
    let termination = orchestrator.run().await?;

    // Dropping the orchestrator closes the channel so the renderer can
    // flush the remaining events and exit.
    drop(orchestrator);
    renderer.await?;

    info!(%termination, "Arena finished");
    Ok(())
}

/// Loads a player config, falling back to defaults when the file is
/// missing, and applies an optional model override.
#[instrument(skip(path, fallback_name), fields(path = %path.display()))]
fn load_player_config(
    path: &Path,
    fallback_name: &str,
    model_override: Option<String>,
) -> Result<AgentConfig> {
    let mut config = if path.exists() {
        AgentConfig::from_file(path)?
    } else {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        AgentConfig::new(fallback_name.to_string())
    };

    if let Some(model) = model_override {
        info!(model = %model, "Overriding model");
        config = config.with_model(model);
    }

    Ok(config)
}
