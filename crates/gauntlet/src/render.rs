//! Plain-text rendering of game events.

use crate::orchestrator::GameEvent;
use anyhow::Result;
use gauntlet_tictactoe::{Board, Line, Position};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::debug;

/// Renders a board as a 3x3 grid.
///
/// Empty cells show their keypad number; cells on `highlight` are bracketed.
pub fn render_board(board: &Board, highlight: Option<Line>) -> String {
    let rows: Vec<String> = Position::ALL
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|pos| {
                    let symbol = board.symbol(*pos);
                    if highlight.is_some_and(|line| line.contains(*pos)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

/// Renders one event as the text shown to the player.
pub fn render_event(event: &GameEvent) -> String {
    match event {
        GameEvent::RoundStarted { tier, human_mark } => format!(
            "\n=== {} ===\nYou play {}.\n{}",
            tier,
            human_mark,
            render_board(&Board::new(), None)
        ),
        GameEvent::AwaitingInput { player } => format!("{}, your move (1-9):", player),
        GameEvent::InputRejected { input, reason } => format!("'{}' rejected: {}", input, reason),
        GameEvent::Thinking { player } => format!("{} is thinking...", player),
        GameEvent::MoveMade { player, mv, board } => format!(
            "{} played {} at {}.\n{}",
            player,
            mv.mark,
            mv.position,
            render_board(board, None)
        ),
        GameEvent::RoundOver {
            outcome,
            board,
            message,
            ..
        } => format!("{}\n{}", render_board(board, outcome.line()), message),
        GameEvent::TournamentOver { summary } => {
            let mut text = String::from("\n=== Level results ===\n");
            for round in summary.levels() {
                let verdict = if *round.human_won() {
                    "You won"
                } else {
                    "AI won"
                };
                text.push_str(&format!(
                    "Level {} ({}): {}\n",
                    round.tier().level(),
                    round.label(),
                    verdict
                ));
            }
            let tally = summary.verdict();
            text.push_str(&format!(
                "You {} - {} AI\n{}",
                tally.human_wins(),
                tally.computer_wins(),
                tally.champion().announcement()
            ));
            text
        }
    }
}

/// Writes every event to `out` until all senders are dropped.
pub async fn render_events<W: AsyncWrite + Unpin>(
    mut rx: mpsc::UnboundedReceiver<GameEvent>,
    mut out: W,
) -> Result<()> {
    while let Some(event) = rx.recv().await {
        debug!(?event, "Rendering event");
        out.write_all(render_event(&event).as_bytes()).await?;
        out.write_all(b"\n").await?;
        out.flush().await?;
    }
    Ok(())
}
