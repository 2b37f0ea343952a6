//! Computer-vs-computer matches between tiers.

use derive_getters::Getters;
use derive_more::{Display, Error};
use gauntlet_tictactoe::{Game, Mark, MoveError, Opponent, Outcome, Tier};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Errors from a computer-vs-computer game.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SimulationError {
    /// A tier found no move on a board that was still open.
    #[display("{} found no move on an open board", _0)]
    NoMove(#[error(not(source))] Tier),
    /// A tier chose a square the game refused.
    #[display("{} made an illegal move: {}", tier, source)]
    IllegalMove {
        /// The offending tier.
        tier: Tier,
        /// Why the move was refused.
        source: MoveError,
    },
    /// A game was tallied before it was decided.
    #[display("Cannot tally an unfinished game")]
    Unfinished,
}

/// Tally of a match, from the first tier's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Getters)]
pub struct MatchStats {
    games: usize,
    first_wins: usize,
    second_wins: usize,
    draws: usize,
}

impl MatchStats {
    /// Share of games the first tier won, in percent.
    pub fn first_win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            (self.first_wins as f64 / self.games as f64) * 100.0
        }
    }

    /// Adds a finished game in which the first tier played `first_mark`.
    pub fn record(&mut self, outcome: Outcome, first_mark: Mark) -> Result<(), SimulationError> {
        match outcome {
            Outcome::InProgress => return Err(SimulationError::Unfinished),
            Outcome::Won { mark, .. } if mark == first_mark => self.first_wins += 1,
            Outcome::Won { .. } => self.second_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.games += 1;
        Ok(())
    }
}

impl std::fmt::Display for MatchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: {} first wins, {} second wins, {} draws",
            self.games, self.first_wins, self.second_wins, self.draws
        )
    }
}

/// Plays one game to its end; `x` moves first.
pub fn play_game<R: Rng + ?Sized>(
    x: Tier,
    o: Tier,
    rng: &mut R,
) -> Result<Outcome, SimulationError> {
    let players = [Opponent::new(x, Mark::X), Opponent::new(o, Mark::O)];
    let mut game = Game::new();

    while !game.is_over() {
        let mover = match game.to_move() {
            Mark::X => players[0],
            Mark::O => players[1],
        };
        let tier = *mover.tier();
        let pos = mover
            .select_move(game.board(), rng)
            .ok_or(SimulationError::NoMove(tier))?;
        game.make_move(pos).map_err(|source| {
            warn!(tier = tier.level(), %source, "Tier made an illegal move");
            SimulationError::IllegalMove { tier, source }
        })?;
    }

    debug!(outcome = %game.outcome(), moves = game.history().len(), "Game finished");
    Ok(game.outcome())
}

/// Plays `games` games between two tiers.
///
/// `first` plays X in every game unless `alternate` is set, in which case
/// the tiers swap sides each game.
#[instrument(skip(rng), fields(first = first.level(), second = second.level()))]
pub fn run_match<R: Rng + ?Sized>(
    first: Tier,
    second: Tier,
    games: usize,
    alternate: bool,
    rng: &mut R,
) -> Result<MatchStats, SimulationError> {
    let mut stats = MatchStats::default();

    for i in 0..games {
        let first_mark = if alternate && i % 2 == 1 { Mark::O } else { Mark::X };
        let outcome = match first_mark {
            Mark::X => play_game(first, second, rng)?,
            Mark::O => play_game(second, first, rng)?,
        };
        stats.record(outcome, first_mark)?;
    }

    info!(
        first_wins = stats.first_wins,
        second_wins = stats.second_wins,
        draws = stats.draws,
        "Match finished"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauntlet_tictactoe::Board;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_legend_mirror_always_draws() {
        let mut rng = StdRng::seed_from_u64(0);
        let stats = run_match(Tier::Legend, Tier::Legend, 4, true, &mut rng).unwrap();
        assert_eq!(*stats.draws(), 4);
        assert_eq!(stats.first_win_rate(), 0.0);
    }

    #[test]
    fn test_counts_add_up() {
        let mut rng = StdRng::seed_from_u64(1);
        let stats = run_match(Tier::Rookie, Tier::Challenger, 30, true, &mut rng).unwrap();
        assert_eq!(
            stats.first_wins() + stats.second_wins() + stats.draws(),
            30
        );
    }

    #[test]
    fn test_unfinished_game_is_not_tallied() {
        let mut stats = MatchStats::default();
        assert_eq!(
            stats.record(Outcome::InProgress, Mark::X),
            Err(SimulationError::Unfinished)
        );
        assert_eq!(stats, MatchStats::default());
    }

    #[test]
    fn test_record_credits_the_right_side() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        let x_won = gauntlet_tictactoe::evaluate(&board);
        let mut stats = MatchStats::default();
        stats.record(x_won, Mark::X).unwrap();
        stats.record(x_won, Mark::O).unwrap();
        stats.record(Outcome::Draw, Mark::X).unwrap();
        assert_eq!(
            (*stats.games(), *stats.first_wins(), *stats.second_wins(), *stats.draws()),
            (3, 1, 1, 1)
        );
    }

    #[test]
    fn test_every_game_is_played_to_the_end() {
        let mut rng = StdRng::seed_from_u64(5);
        for x in Tier::ALL {
            for o in Tier::ALL {
                let outcome = play_game(x, o, &mut rng).unwrap();
                assert!(outcome.is_over(), "{} vs {} stopped early", x, o);
            }
        }
    }
}
