//! Human player reading moves from a line-oriented input.

use super::Player;
use crate::orchestrator::GameEvent;
use anyhow::{Context, Result};
use gauntlet_tictactoe::{Game, Position};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Human player typing a keypad number (1-9) or a cell label per line.
///
/// Prompts and rejections go out as [`GameEvent`]s so they are rendered in
/// order with the board.
pub struct HumanPlayer<R> {
    name: String,
    lines: Lines<R>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl<R: AsyncBufRead + Unpin + Send> HumanPlayer<R> {
    /// Creates a human player reading from `input`.
    pub fn new(
        name: impl Into<String>,
        input: R,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            name: name.into(),
            lines: input.lines(),
            event_tx,
        }
    }

    fn notify(&self, event: GameEvent) -> Result<()> {
        self.event_tx
            .send(event)
            .context("Event channel closed")
    }
}

#[async_trait::async_trait]
impl<R: AsyncBufRead + Unpin + Send> Player for HumanPlayer<R> {
    async fn get_move(&mut self, game: &Game) -> Result<Position> {
        self.notify(GameEvent::AwaitingInput {
            player: self.name.clone(),
        })?;

        while let Some(line) = self.lines.next_line().await? {
            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            let reason = match Position::from_keypad_or_label(input) {
                Some(pos) if game.board().is_empty(pos) => {
                    debug!(player = %self.name, position = %pos, "Human chose position");
                    return Ok(pos);
                }
                Some(pos) => format!("{} is already taken", pos),
                None => "Enter 1-9 or a cell name like \"top left\"".to_string(),
            };

            warn!(player = %self.name, input, %reason, "Rejected move");
            self.notify(GameEvent::InputRejected {
                input: input.to_string(),
                reason,
            })?;
        }

        anyhow::bail!("Input closed")
    }

    fn name(&self) -> &str {
        &self.name
    }
}
