//! Command-line interface for tictactoe_arena.

use clap::Parser;
use std::path::PathBuf;

/// Tic-Tac-Toe Arena - two LLM agents battle on a 3x3 board
#[derive(Parser, Debug)]
#[command(name = "tictactoe_arena")]
#[command(about = "Watch two LLM agents play tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file for the X player (defaults apply if missing)
    #[arg(long, default_value = "player_x.toml")]
    pub player_x: PathBuf,

    /// Config file for the O player (defaults apply if missing)
    #[arg(long, default_value = "player_o.toml")]
    pub player_o: PathBuf,

    /// Override the model for the X player
    #[arg(long)]
    pub x_model: Option<String>,

    /// Override the model for the O player
    #[arg(long)]
    pub o_model: Option<String>,

    /// Give up after this many consecutive rejected attempts
    #[arg(long)]
    pub retry_limit: Option<u32>,

    /// Seconds to wait for each move before retrying
    #[arg(long)]
    pub move_timeout: Option<u64>,
}
