//! Terminal-state evaluation.

use super::super::{Board, Mark};
use super::draw::is_full;
use super::win::{Line, winning_line};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// State of a board as far as the rules are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and at least one empty square.
    InProgress,
    /// A mark completed a line.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The completed line, for highlighting.
        line: Line,
    },
    /// Full board, no line.
    Draw,
}

impl Outcome {
    /// Returns true once the game can no longer continue.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won { mark, .. } => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates the board.
///
/// Lines are checked in canonical order, so the reported line is the first
/// completed one. Legality of the position is not checked.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = winning_line(board) {
        return Outcome::Won { mark, line };
    }
    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
