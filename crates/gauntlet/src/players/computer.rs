//! Computer player driven by a tier policy.

use super::Player;
use anyhow::Result;
use gauntlet_tictactoe::{Game, Opponent, Position};
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{debug, instrument};

/// Computer opponent at a fixed tier.
pub struct ComputerPlayer {
    name: String,
    opponent: Opponent,
    rng: StdRng,
    think_delay: Duration,
}

impl ComputerPlayer {
    /// Creates a computer player.
    ///
    /// `rng` feeds the randomized tiers; `think_delay` is waited before
    /// every move.
    pub fn new(opponent: Opponent, rng: StdRng, think_delay: Duration) -> Self {
        Self {
            name: opponent.tier().label().to_string(),
            opponent,
            rng,
            think_delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    #[instrument(skip(self, game), fields(ai = %self.name))]
    async fn get_move(&mut self, game: &Game) -> Result<Position> {
        if !self.think_delay.is_zero() {
            tokio::time::sleep(self.think_delay).await;
        }

        let pos = self
            .opponent
            .select_move(game.board(), &mut self.rng)
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(position = %pos, "AI chose position");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
