//! Gauntlet - Unified CLI
//!
//! Play the five-level tournament, simulate tier matchups, or list tiers.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use gauntlet::{GauntletConfig, HumanPlayer, TournamentSession, render_events, run_match};
use gauntlet_tictactoe::Tier;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            name,
            mark,
            seed,
            no_delay,
            json,
        } => {
            let mut config = GauntletConfig::load_or_default(&cli.config)?;
            if let Some(name) = name {
                config = config.with_player_name(name);
            }
            if let Some(mark) = mark {
                config = config.with_human_mark(mark.into());
            }
            if seed.is_some() {
                config = config.with_seed(seed);
            }
            if no_delay {
                config = config.with_think_delay_ms(0).with_think_delay_per_tier_ms(0);
            }
            run_play(config, json).await
        }
        Command::Simulate {
            first,
            second,
            games,
            alternate,
            seed,
            json,
        } => {
            let config = GauntletConfig::load_or_default(&cli.config)?;
            let seed = seed.or(*config.seed());
            run_simulate(first, second, games, alternate, seed, json)
        }
        Command::Tiers => {
            for tier in Tier::ALL {
                println!("{}", tier);
            }
            Ok(())
        }
    }
}

/// Play a tournament on stdin/stdout
#[instrument(skip(config), fields(player = %config.player_name()))]
async fn run_play(config: GauntletConfig, json: bool) -> Result<()> {
    info!("Starting tournament");

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(render_events(event_rx, tokio::io::stdout()));

    let mut human = HumanPlayer::new(
        config.player_name().clone(),
        BufReader::new(tokio::io::stdin()),
        event_tx.clone(),
    );
    let mut session = TournamentSession::new(config, event_tx);
    let result = session.run(&mut human).await;

    // Close the channel so the renderer drains and exits.
    drop(session);
    drop(human);
    renderer.await.context("Renderer task failed")??;

    let summary = result?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}

/// Run a computer-vs-computer match and print the tally
fn run_simulate(
    first: u8,
    second: u8,
    games: usize,
    alternate: bool,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let first = Tier::from_level(first).context("Invalid first level")?;
    let second = Tier::from_level(second).context("Invalid second level")?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let stats = run_match(first, second, games, alternate, &mut rng)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{} vs {}", first, second);
        println!("{} ({:.1}% first wins)", stats, stats.first_win_rate());
    }
    Ok(())
}
