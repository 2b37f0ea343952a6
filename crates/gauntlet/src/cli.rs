//! Command-line interface for gauntlet.

use clap::{Parser, Subcommand, ValueEnum};
use gauntlet_tictactoe::Mark;

/// Gauntlet - five rounds of tic-tac-toe against ever stronger AI
#[derive(Parser, Debug)]
#[command(name = "gauntlet")]
#[command(about = "Five-level tic-tac-toe tournament against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = "gauntlet.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a tournament in the terminal
    Play {
        /// Player name (overrides config)
        #[arg(long)]
        name: Option<String>,

        /// Mark to play (overrides config)
        #[arg(long, value_enum, ignore_case = true)]
        mark: Option<MarkArg>,

        /// Seed for the randomized tiers (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Skip the computer's thinking pause
        #[arg(long)]
        no_delay: bool,

        /// Print the tournament summary as JSON when done
        #[arg(long)]
        json: bool,
    },

    /// Pit two tiers against each other
    Simulate {
        /// Level (1-5) of the first tier
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        first: u8,

        /// Level (1-5) of the second tier
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        second: u8,

        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: usize,

        /// Swap sides every game instead of giving the first tier X
        #[arg(long)]
        alternate: bool,

        /// Seed for the randomized tiers (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the opponent tiers
    Tiers,
}

/// Mark selectable on the command line.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum MarkArg {
    /// Play X and move first
    X,
    /// Play O and move second
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}
