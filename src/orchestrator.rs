//! Turn orchestration between two players.
//!
//! The orchestrator owns the game state and drives the loop: render the
//! board, build a turn prompt, query the active player, parse the reply,
//! validate and apply the move, then evaluate the board. Malformed or
//! illegal moves never mutate the game; the same player is re-prompted.

use crate::games::tictactoe::{BoardError, GameSetup, Mark, Move, Termination, Transition};
use crate::players::{AdapterError, Player};
use crate::prompt;
use anyhow::Result;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from orchestrator to the presentation layer.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// Current board rendering.
    Board(String),
    /// A player's turn began.
    TurnStarted {
        /// Display name of the active player.
        player: String,
        /// Mark the player is placing.
        mark: Mark,
    },
    /// Raw reply received from the active player.
    AgentReplied {
        /// Display name of the active player.
        player: String,
        /// Unmodified reply text.
        response: String,
    },
    /// A move was extracted from the reply (not yet validated).
    MoveParsed {
        /// Display name of the active player.
        player: String,
        /// The extracted coordinates.
        mv: Move,
    },
    /// The attempt was rejected; the same player will retry.
    MoveRejected {
        /// Display name of the active player.
        player: String,
        /// Human-readable rejection message.
        message: String,
    },
    /// The game reached a terminal state.
    GameOver(Termination),
}

/// Why a turn attempt was rejected. All kinds are handled identically:
/// surface a message, leave the game untouched, re-prompt the same player.
#[derive(Debug)]
enum TurnError {
    Parse,
    Board(BoardError),
    Adapter(AdapterError),
}

impl std::fmt::Display for TurnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnError::Parse => {
                write!(f, "Invalid move! Please use the format 'row, col'.")
            }
            TurnError::Board(BoardError::CellOccupied(..)) => {
                write!(f, "Invalid move! Cell already occupied.")
            }
            TurnError::Board(err @ BoardError::OutOfBounds(..)) => {
                write!(f, "Invalid move! {}.", err)
            }
            TurnError::Adapter(err) => write!(f, "{}", err.message),
        }
    }
}

impl From<BoardError> for TurnError {
    fn from(err: BoardError) -> Self {
        TurnError::Board(err)
    }
}

impl From<AdapterError> for TurnError {
    fn from(err: AdapterError) -> Self {
        TurnError::Adapter(err)
    }
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
    retry_limit: Option<u32>,
    move_timeout: Option<Duration>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    ///
    /// By default a persistently malformed agent retries forever; see
    /// [`Orchestrator::with_retry_limit`] and
    /// [`Orchestrator::with_move_timeout`] for the bounded variants.
    pub fn new(
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            player_x,
            player_o,
            event_tx,
            retry_limit: None,
            move_timeout: None,
        }
    }

    /// Caps consecutive rejected attempts per turn; reaching the cap ends
    /// the game as [`Termination::Stalled`] for the active mark.
    pub fn with_retry_limit(mut self, limit: u32) -> Self {
        self.retry_limit = Some(limit);
        self
    }

    /// Bounds each move request; expiry is treated as a non-fatal
    /// adapter failure and retried.
    pub fn with_move_timeout(mut self, timeout: Duration) -> Self {
        self.move_timeout = Some(timeout);
        self
    }

    /// Plays one complete game from an empty board and returns how it
    /// ended.
    ///
    /// Each call constructs a fresh game: board, turn counter, and
    /// active mark are reset together. Exactly one player is ever to
    /// move; the request to that player suspends the loop until a reply
    /// (or failure) arrives.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<Termination> {
        info!(
            player_x = %self.player_x.name(),
            player_o = %self.player_o.name(),
            "Starting game"
        );

        let mut game = GameSetup::new().start(Mark::X);
        let mut rejected_attempts = 0u32;

        loop {
            self.event_tx
                .send(GameEvent::Board(game.board().display()))?;

            let mark = game.to_move();
            let name = match mark {
                Mark::X => self.player_x.name().to_string(),
                Mark::O => self.player_o.name().to_string(),
            };

            self.event_tx.send(GameEvent::TurnStarted {
                player: name.clone(),
                mark,
            })?;

            let turn_prompt = prompt::turn_prompt(game.board(), &name);
            debug!(player = %name, turn = game.turns(), "Requesting move");

            let response = match self.obtain_response(&name, mark, &turn_prompt).await {
                Ok(text) => text,
                Err(err) => {
                    match self.reject(&name, mark, err, &mut rejected_attempts)? {
                        Some(termination) => return Ok(termination),
                        None => continue,
                    }
                }
            };

            let mv = match Move::parse(&response) {
                Ok(mv) => mv,
                Err(_) => {
                    match self.reject(&name, mark, TurnError::Parse, &mut rejected_attempts)? {
                        Some(termination) => return Ok(termination),
                        None => continue,
                    }
                }
            };

            self.event_tx.send(GameEvent::MoveParsed {
                player: name.clone(),
                mv,
            })?;

            match game.apply(mv) {
                Ok(Transition::Continued(next)) => {
                    debug!(player = %name, %mv, turn = next.turns(), "Move accepted");
                    rejected_attempts = 0;
                    game = next;
                }
                Ok(Transition::Finished(done)) => {
                    let termination = done.termination();
                    info!(%termination, turns = done.turns(), "Game over");
                    self.event_tx
                        .send(GameEvent::Board(done.board().display()))?;
                    self.event_tx.send(GameEvent::GameOver(termination))?;
                    return Ok(termination);
                }
                Err(err) => {
                    match self.reject(&name, mark, err.into(), &mut rejected_attempts)? {
                        Some(termination) => return Ok(termination),
                        None => continue,
                    }
                }
            }
        }
    }

    /// Requests a reply from the active player, honoring the optional
    /// timeout, and emits the raw-response event on success.
    async fn obtain_response(
        &mut self,
        name: &str,
        mark: Mark,
        turn_prompt: &str,
    ) -> Result<String, TurnError> {
        let player = match mark {
            Mark::X => &mut self.player_x,
            Mark::O => &mut self.player_o,
        };

        let result = match self.move_timeout {
            Some(timeout) => tokio::time::timeout(timeout, player.request(turn_prompt))
                .await
                .unwrap_or_else(|_| {
                    Err(AdapterError::new(format!(
                        "{} did not respond within {:?}",
                        name, timeout
                    )))
                }),
            None => player.request(turn_prompt).await,
        };

        let response = result?;
        let _ = self.event_tx.send(GameEvent::AgentReplied {
            player: name.to_string(),
            response: response.clone(),
        });
        Ok(response)
    }

    /// Shared rejection path for all four per-turn error kinds.
    ///
    /// Returns `Ok(Some(Stalled))` when the retry cap is exhausted,
    /// `Ok(None)` when the same player should simply try again.
    fn reject(
        &mut self,
        name: &str,
        mark: Mark,
        err: TurnError,
        rejected_attempts: &mut u32,
    ) -> Result<Option<Termination>> {
        *rejected_attempts += 1;
        warn!(player = %name, error = %err, attempts = *rejected_attempts, "Move rejected");

        self.event_tx.send(GameEvent::MoveRejected {
            player: name.to_string(),
            message: err.to_string(),
        })?;

        if let Some(limit) = self.retry_limit {
            if *rejected_attempts >= limit {
                let termination = Termination::Stalled(mark);
                info!(%termination, "Retry limit reached");
                self.event_tx.send(GameEvent::GameOver(termination))?;
                return Ok(Some(termination));
            }
        }

        Ok(None)
    }
}
