//! Gauntlet: a five-level tic-tac-toe tournament against the computer.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for the player, marks, seed and pacing
//! - **Players**: a stdin-driven human and a tier-driven computer
//! - **Orchestrator**: drives a single round and emits [`GameEvent`]s
//! - **Session**: five rounds, one per tier, tallied into a verdict
//! - **Simulate**: computer-vs-computer matches between tiers
//!
//! Game rules and opponent policies live in [`gauntlet_tictactoe`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod orchestrator;
mod players;
mod render;
mod session;
mod simulate;

pub use config::{ConfigError, GauntletConfig};
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{ComputerPlayer, HumanPlayer, Player};
pub use render::{render_board, render_event, render_events};
pub use session::{TournamentSession, round_message};
pub use simulate::{MatchStats, SimulationError, play_game, run_match};
