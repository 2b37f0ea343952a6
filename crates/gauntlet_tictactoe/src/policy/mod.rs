//! Computer opponent policies.
//!
//! Each [`Tier`] is bound to one pure selection function. Randomized tiers
//! draw from a caller-supplied [`Rng`] so games can be replayed from a seed.

mod center;
mod minimax;
mod random;
mod tactical;

pub use center::center_priority;
pub use minimax::Minimax;
pub use random::random_move;
pub use tactical::tactical;

use super::{Board, Mark, Position};
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Ply limit of the tier 4 search.
pub const MASTER_DEPTH: u32 = 4;

/// Opponent difficulty, weakest first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Tier {
    /// Uniform random squares.
    Rookie,
    /// Center, then corners, then anything.
    Challenger,
    /// Wins or blocks one move ahead.
    Tactician,
    /// Minimax limited to four plies.
    Master,
    /// Full minimax; never loses.
    Legend,
}

impl Tier {
    /// All tiers in tournament order.
    pub const ALL: [Tier; 5] = [
        Tier::Rookie,
        Tier::Challenger,
        Tier::Tactician,
        Tier::Master,
        Tier::Legend,
    ];

    /// Returns the level number (1-5).
    pub fn level(self) -> u8 {
        self as u8 + 1
    }

    /// Looks up a tier by level number (1-5).
    pub fn from_level(level: u8) -> Option<Self> {
        level
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(usize::from(i)))
            .copied()
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Tier::Rookie => "Rookie (Random)",
            Tier::Challenger => "Challenger (Center First)",
            Tier::Tactician => "Tactician (Win/Block)",
            Tier::Master => "Master (Depth-Limited AI)",
            Tier::Legend => "Legend (Perfect AI)",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Level {}: {}", self.level(), self.label())
    }
}

/// Selects the computer's next square.
///
/// `computer` is the mark the computer plays. Returns `None` only when the
/// board is full. The board should be in progress; callers check
/// [`crate::evaluate`] first.
#[instrument(skip(board, rng), fields(tier = tier.level()))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    tier: Tier,
    computer: Mark,
    rng: &mut R,
) -> Option<Position> {
    let choice = match tier {
        Tier::Rookie => random_move(board, rng),
        Tier::Challenger => center_priority(board, rng),
        Tier::Tactician => tactical(board, computer, rng),
        Tier::Master => Minimax::bounded(MASTER_DEPTH).best_move(board, computer, rng),
        Tier::Legend => Minimax::unbounded().best_move(board, computer, rng),
    };
    debug!(choice = ?choice, "Computer selected move");
    choice
}

/// A computer opponent: a tier bound to the mark it plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Opponent {
    tier: Tier,
    mark: Mark,
}

impl Opponent {
    /// Creates an opponent playing `mark` at `tier`.
    pub fn new(tier: Tier, mark: Mark) -> Self {
        Self { tier, mark }
    }

    /// Creates the opponent of a human playing `human`.
    pub fn against(tier: Tier, human: Mark) -> Self {
        Self::new(tier, human.opponent())
    }

    /// Selects this opponent's next square.
    pub fn select_move<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<Position> {
        select_move(board, self.tier, self.mark, rng)
    }
}
