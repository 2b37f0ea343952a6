//! Five-round tournaments: one round per tier, weakest first.

use super::policy::Tier;
use super::rules::Outcome;
use super::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Number of rounds in a tournament.
pub const ROUNDS: usize = Tier::ALL.len();

/// Result of one round, from the human's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct RoundResult {
    tier: Tier,
    human_won: bool,
    label: String,
}

impl RoundResult {
    /// Creates a round result for `tier`.
    pub fn new(tier: Tier, human_won: bool) -> Self {
        Self {
            tier,
            human_won,
            label: tier.label().to_string(),
        }
    }

    /// Builds a result from a finished round's outcome.
    ///
    /// Only a win for `human` counts; a drawn round goes to the computer.
    pub fn from_outcome(tier: Tier, outcome: Outcome, human: Mark) -> Self {
        Self::new(tier, outcome.winner() == Some(human))
    }
}

/// Who took the tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Champion {
    /// The human won more rounds.
    Human,
    /// The computer won more rounds.
    Computer,
    /// Equal counts. Unreachable with an odd number of rounds.
    Drawn,
}

impl Champion {
    /// Banner shown when the tournament ends.
    pub fn announcement(self) -> &'static str {
        match self {
            Champion::Human => "You won the tournament!",
            Champion::Computer => "AI won the tournament.",
            Champion::Drawn => "Tournament ended in a draw.",
        }
    }
}

/// Final tally of a tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Verdict {
    human_wins: usize,
    computer_wins: usize,
    champion: Champion,
}

impl Verdict {
    /// Tallies exactly [`ROUNDS`] round results.
    ///
    /// # Errors
    ///
    /// Returns [`TournamentError::WrongRoundCount`] for any other count.
    #[instrument(skip(rounds), fields(rounds = rounds.len()))]
    pub fn from_rounds(rounds: &[RoundResult]) -> Result<Self, TournamentError> {
        if rounds.len() != ROUNDS {
            return Err(TournamentError::WrongRoundCount(rounds.len()));
        }

        let human_wins = rounds.iter().filter(|r| r.human_won).count();
        let computer_wins = rounds.len() - human_wins;
        let champion = match human_wins.cmp(&computer_wins) {
            std::cmp::Ordering::Greater => Champion::Human,
            std::cmp::Ordering::Less => Champion::Computer,
            std::cmp::Ordering::Equal => Champion::Drawn,
        };

        info!(human_wins, computer_wins, champion = ?champion, "Tournament tallied");
        Ok(Self {
            human_wins,
            computer_wins,
            champion,
        })
    }
}

/// Errors raised while building a tournament.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TournamentError {
    /// All rounds have already been recorded.
    #[display("Tournament already has {} rounds", ROUNDS)]
    Complete,

    /// A round was recorded for the wrong tier.
    #[display("Expected a result for {}, got {}", expected, found)]
    OutOfOrder {
        /// Tier whose round is due.
        expected: Tier,
        /// Tier that was recorded.
        found: Tier,
    },

    /// A verdict needs exactly [`ROUNDS`] rounds.
    #[display("A tournament must include exactly {} rounds, got {}", ROUNDS, _0)]
    WrongRoundCount(#[error(not(source))] usize),
}

/// Round results collected in tier order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    rounds: Vec<RoundResult>,
}

impl Tournament {
    /// Creates an empty tournament.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tier whose round is due, or `None` when complete.
    pub fn next_tier(&self) -> Option<Tier> {
        Tier::ALL.get(self.rounds.len()).copied()
    }

    /// Returns the results recorded so far.
    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    /// Returns true once every tier has been played.
    pub fn is_complete(&self) -> bool {
        self.rounds.len() == ROUNDS
    }

    /// Records the next round.
    ///
    /// # Errors
    ///
    /// Fails when the tournament is complete or `result` is not for the
    /// tier that is due.
    #[instrument(skip(self), fields(tier = result.tier.level(), human_won = result.human_won))]
    pub fn record(&mut self, result: RoundResult) -> Result<(), TournamentError> {
        let expected = self.next_tier().ok_or(TournamentError::Complete)?;
        if result.tier != expected {
            return Err(TournamentError::OutOfOrder {
                expected,
                found: result.tier,
            });
        }
        self.rounds.push(result);
        Ok(())
    }

    /// Tallies the finished tournament.
    ///
    /// # Errors
    ///
    /// Returns [`TournamentError::WrongRoundCount`] before all rounds are in.
    pub fn verdict(&self) -> Result<Verdict, TournamentError> {
        Verdict::from_rounds(&self.rounds)
    }

    /// Bundles the rounds with their verdict.
    ///
    /// # Errors
    ///
    /// Same as [`Tournament::verdict`].
    pub fn summary(&self) -> Result<TournamentSummary, TournamentError> {
        Ok(TournamentSummary {
            levels: self.rounds.clone(),
            verdict: self.verdict()?,
        })
    }
}

/// Serializable record of a finished tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct TournamentSummary {
    levels: Vec<RoundResult>,
    verdict: Verdict,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rounds(human_wins: &[bool]) -> Vec<RoundResult> {
        Tier::ALL
            .iter()
            .zip(human_wins)
            .map(|(tier, won)| RoundResult::new(*tier, *won))
            .collect()
    }

    #[test]
    fn test_three_wins_crowns_human() {
        let verdict = Verdict::from_rounds(&rounds(&[true, true, true, false, false])).unwrap();
        assert_eq!(*verdict.human_wins(), 3);
        assert_eq!(*verdict.computer_wins(), 2);
        assert_eq!(*verdict.champion(), Champion::Human);
    }

    #[test]
    fn test_two_wins_crowns_computer() {
        let verdict = Verdict::from_rounds(&rounds(&[true, false, true, false, false])).unwrap();
        assert_eq!(*verdict.champion(), Champion::Computer);
        assert_eq!(Champion::Computer.announcement(), "AI won the tournament.");
    }

    #[test]
    fn test_verdict_needs_five_rounds() {
        assert_eq!(
            Verdict::from_rounds(&rounds(&[true, true])),
            Err(TournamentError::WrongRoundCount(2))
        );
    }

    #[test]
    fn test_drawn_round_goes_to_computer() {
        let result = RoundResult::from_outcome(Tier::Legend, Outcome::Draw, Mark::X);
        assert!(!result.human_won());
        assert_eq!(result.label(), "Legend (Perfect AI)");
    }

    #[test]
    fn test_rounds_must_follow_tier_order() {
        let mut tournament = Tournament::new();
        assert_eq!(tournament.next_tier(), Some(Tier::Rookie));
        let err = tournament
            .record(RoundResult::new(Tier::Master, true))
            .unwrap_err();
        assert_eq!(
            err,
            TournamentError::OutOfOrder {
                expected: Tier::Rookie,
                found: Tier::Master
            }
        );
    }

    #[test]
    fn test_full_tournament_rejects_extra_round() {
        let mut tournament = Tournament::new();
        for result in rounds(&[false, true, false, true, true]) {
            tournament.record(result).unwrap();
        }
        assert!(tournament.is_complete());
        assert_eq!(tournament.next_tier(), None);
        assert_eq!(
            tournament.record(RoundResult::new(Tier::Legend, true)),
            Err(TournamentError::Complete)
        );
        assert_eq!(*tournament.verdict().unwrap().champion(), Champion::Human);
    }

    #[test]
    fn test_summary_serializes() {
        let mut tournament = Tournament::new();
        for result in rounds(&[false, false, false, false, true]) {
            tournament.record(result).unwrap();
        }
        let json = serde_json::to_value(tournament.summary().unwrap()).unwrap();
        assert_eq!(json["verdict"]["champion"], "computer");
        assert_eq!(json["levels"].as_array().map(Vec::len), Some(5));
        assert_eq!(json["levels"][4]["label"], "Legend (Perfect AI)");
    }
}
