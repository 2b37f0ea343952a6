//! A five-round tournament session: one round per tier, weakest first.

use crate::config::GauntletConfig;
use crate::orchestrator::{GameEvent, Orchestrator};
use crate::players::{ComputerPlayer, Player};
use anyhow::{Context, Result};
use gauntlet_tictactoe::{
    Mark, Opponent, Outcome, RoundResult, Tier, Tournament, TournamentSummary,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc;
use tracing::{info, instrument};

/// Status line shown to the human when a round ends.
pub fn round_message(outcome: Outcome, human: Mark) -> &'static str {
    match outcome.winner() {
        Some(mark) if mark == human => "You won this level!",
        Some(_) => "AI took this round.",
        None => "Draw! No points this round.",
    }
}

/// Runs a full tournament for one human.
pub struct TournamentSession {
    config: GauntletConfig,
    rng: StdRng,
    tournament: Tournament,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl TournamentSession {
    /// Creates a session. A configured seed makes every tier reproducible.
    pub fn new(config: GauntletConfig, event_tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            rng,
            tournament: Tournament::new(),
            event_tx,
        }
    }

    /// Returns the rounds played so far.
    pub fn tournament(&self) -> &Tournament {
        &self.tournament
    }

    /// Plays every remaining round against `human` and returns the summary.
    #[instrument(skip_all, fields(player = %human.name()))]
    pub async fn run(&mut self, human: &mut dyn Player) -> Result<TournamentSummary> {
        while let Some(tier) = self.tournament.next_tier() {
            self.play_round(tier, human).await?;
        }

        let summary = self.tournament.summary()?;
        info!(champion = ?summary.verdict().champion(), "Tournament complete");
        self.send(GameEvent::TournamentOver {
            summary: summary.clone(),
        })?;
        Ok(summary)
    }

    /// Plays the round for `tier` and records its result.
    #[instrument(skip(self, human), fields(tier = tier.level()))]
    pub async fn play_round(&mut self, tier: Tier, human: &mut dyn Player) -> Result<RoundResult> {
        let human_mark = *self.config.human_mark();
        let computer_mark = self.config.computer_mark();
        let mut computer = ComputerPlayer::new(
            Opponent::new(tier, computer_mark),
            StdRng::seed_from_u64(self.rng.random()),
            self.config.think_delay(tier),
        );

        self.send(GameEvent::RoundStarted { tier, human_mark })?;

        let event_tx = self.event_tx.clone();
        let mut orchestrator = match human_mark {
            Mark::X => Orchestrator::new(human, &mut computer, computer_mark, event_tx),
            Mark::O => Orchestrator::new(&mut computer, human, computer_mark, event_tx),
        };
        let outcome = orchestrator.run().await?;

        self.send(GameEvent::RoundOver {
            tier,
            outcome,
            board: orchestrator.game().board().clone(),
            message: round_message(outcome, human_mark),
        })?;

        let result = RoundResult::from_outcome(tier, outcome, human_mark);
        self.tournament.record(result.clone())?;
        Ok(result)
    }

    fn send(&self, event: GameEvent) -> Result<()> {
        self.event_tx.send(event).context("Event channel closed")
    }
}
