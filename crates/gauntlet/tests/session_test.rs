//! Tests for tournament sessions, human input and rendering.

use anyhow::Result;
use gauntlet::{
    GameEvent, GauntletConfig, HumanPlayer, Player, TournamentSession, render_event,
    render_events,
};
use gauntlet_tictactoe::{Champion, Game, Mark, Position, Tier};
use tokio::sync::mpsc;

/// Plays the lowest free square every turn.
struct FirstFree;

#[async_trait::async_trait]
impl Player for FirstFree {
    async fn get_move(&mut self, game: &Game) -> Result<Position> {
        game.board()
            .empty_positions()
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("Board is full"))
    }

    fn name(&self) -> &str {
        "First-free"
    }
}

fn fast_config(seed: u64) -> GauntletConfig {
    GauntletConfig::default()
        .with_seed(Some(seed))
        .with_think_delay_ms(0)
        .with_think_delay_per_tier_ms(0)
}

fn drain(rx: &mut mpsc::UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn test_naive_player_loses_to_minimax_tiers() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut session = TournamentSession::new(fast_config(7), tx);
    let summary = session.run(&mut FirstFree).await.expect("Tournament failed");

    assert_eq!(summary.levels().len(), 5);
    assert!(!summary.levels()[3].human_won());
    assert!(!summary.levels()[4].human_won());
    let verdict = summary.verdict();
    assert_eq!(verdict.human_wins() + verdict.computer_wins(), 5);
    assert_ne!(*verdict.champion(), Champion::Drawn);

    let events = drain(&mut rx);
    let rounds_started = events
        .iter()
        .filter(|e| matches!(e, GameEvent::RoundStarted { .. }))
        .count();
    assert_eq!(rounds_started, 5);
    assert!(matches!(events.last(), Some(GameEvent::TournamentOver { .. })));
}

#[tokio::test]
async fn test_same_seed_same_tournament() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let first = TournamentSession::new(fast_config(11), tx.clone())
        .run(&mut FirstFree)
        .await
        .expect("Tournament failed");
    let second = TournamentSession::new(fast_config(11), tx)
        .run(&mut FirstFree)
        .await
        .expect("Tournament failed");
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_human_playing_o_lets_computer_open() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let config = fast_config(3).with_human_mark(Mark::O);
    let mut session = TournamentSession::new(config, tx);
    let summary = session.run(&mut FirstFree).await.expect("Tournament failed");
    assert!(!summary.levels()[4].human_won());

    let events = drain(&mut rx);
    let first_move = events.iter().find_map(|e| match e {
        GameEvent::MoveMade { mv, .. } => Some(mv.mark),
        _ => None,
    });
    assert_eq!(first_move, Some(Mark::X));
    assert!(matches!(events[1], GameEvent::Thinking { .. }));
}

#[tokio::test]
async fn test_round_out_of_order_is_rejected() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut session = TournamentSession::new(fast_config(1), tx);
    let err = session
        .play_round(Tier::Master, &mut FirstFree)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Expected a result for"));
    assert!(session.tournament().rounds().is_empty());
}

#[tokio::test]
async fn test_human_input_is_validated() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut game = Game::new();
    game.make_move(Position::Center).expect("Move failed");

    let mut human = HumanPlayer::new("Ada", &b"\nabc\n5\ntop left\n"[..], tx);
    let pos = human.get_move(&game).await.expect("No move");
    assert_eq!(pos, Position::TopLeft);

    let events = drain(&mut rx);
    assert!(matches!(events[0], GameEvent::AwaitingInput { .. }));
    let rejected: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::InputRejected { input, .. } => Some(input.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(rejected, vec!["abc", "5"]);
}

#[tokio::test]
async fn test_human_input_closed_is_an_error() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut human = HumanPlayer::new("Ada", &b"0\n"[..], tx);
    let err = human.get_move(&Game::new()).await.unwrap_err();
    assert!(err.to_string().contains("Input closed"));
}

#[tokio::test]
async fn test_stdin_style_human_finishes_tournament() {
    // Keypad numbers cycling 1-9; occupied ones are skipped.
    let script = "1\n2\n3\n4\n5\n6\n7\n8\n9\n".repeat(30);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut human = HumanPlayer::new("Ada", script.as_bytes(), tx.clone());
    let mut session = TournamentSession::new(fast_config(5), tx);

    let summary = session.run(&mut human).await.expect("Tournament failed");
    assert_eq!(summary.levels().len(), 5);
    assert!(!summary.levels()[4].human_won());

    let text: Vec<String> = drain(&mut rx).iter().map(render_event).collect();
    assert!(text.iter().any(|t| t.contains("=== Level 1: Rookie (Random) ===")));
    assert!(text.last().is_some_and(|t| t.contains("tournament")));
}

#[tokio::test]
async fn test_renderer_writes_until_channel_closes() {
    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(GameEvent::Thinking {
        player: "Legend (Perfect AI)".to_string(),
    })
    .expect("Send failed");
    drop(tx);

    let mut out = Vec::new();
    render_events(rx, &mut out).await.expect("Render failed");
    assert_eq!(String::from_utf8(out).unwrap(), "Legend (Perfect AI) is thinking...\n");
}
