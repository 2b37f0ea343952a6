//! Round orchestration between two players.

use crate::players::Player;
use anyhow::{Context, Result};
use derive_new::new;
use gauntlet_tictactoe::{Board, Game, Mark, Move, Outcome, Tier, TournamentSummary};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Messages sent from the orchestrator and players to the renderer.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A round against `tier` is starting.
    RoundStarted {
        /// Tier of the computer opponent.
        tier: Tier,
        /// Mark the human plays this round.
        human_mark: Mark,
    },
    /// A human is being asked for a move.
    AwaitingInput {
        /// Name of the human.
        player: String,
    },
    /// A human's input was not a legal move.
    InputRejected {
        /// What was typed.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
    /// A computer is choosing its move.
    Thinking {
        /// Name of the computer player.
        player: String,
    },
    /// A move was applied.
    MoveMade {
        /// Name of the mover.
        player: String,
        /// The move.
        mv: Move,
        /// Board after the move.
        board: Board,
    },
    /// The round is decided.
    RoundOver {
        /// Tier that was played.
        tier: Tier,
        /// Final outcome, including the winning line.
        outcome: Outcome,
        /// Final board.
        board: Board,
        /// Status line for the human.
        message: &'static str,
    },
    /// All five rounds are in.
    TournamentOver {
        /// Rounds and verdict.
        summary: TournamentSummary,
    },
}

/// Drives one round, X first, until the outcome is decided.
#[derive(new)]
pub struct Orchestrator<'a> {
    #[new(default)]
    game: Game,
    player_x: &'a mut dyn Player,
    player_o: &'a mut dyn Player,
    computer: Mark,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator<'_> {
    /// Runs the game loop and returns the final outcome.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub async fn run(&mut self) -> Result<Outcome> {
        info!("Starting round");

        while !self.game.is_over() {
            let mark = self.game.to_move();
            let player = match mark {
                Mark::X => &mut *self.player_x,
                Mark::O => &mut *self.player_o,
            };
            let name = player.name().to_string();

            if mark == self.computer {
                self.event_tx
                    .send(GameEvent::Thinking {
                        player: name.clone(),
                    })
                    .context("Event channel closed")?;
            }

            debug!(player = %name, "Waiting for move");
            let position = player.get_move(&self.game).await?;
            self.game
                .make_move(position)
                .with_context(|| format!("{} made an illegal move", name))?;

            let mv = Move { mark, position };
            self.event_tx
                .send(GameEvent::MoveMade {
                    player: name,
                    mv,
                    board: self.game.board().clone(),
                })
                .context("Event channel closed")?;
        }

        let outcome = self.game.outcome();
        info!(outcome = %outcome, moves = self.game.history().len(), "Round finished");
        Ok(outcome)
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }
}
