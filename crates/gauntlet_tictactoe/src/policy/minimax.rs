//! Tiers 4 and 5: exhaustive minimax, optionally depth-bounded.
//!
//! The computer maximizes and its opponent minimizes. A computer win scores
//! `10 - depth`, an opponent win `depth - 10`, and a draw or a depth cutoff
//! scores `0`. Depth counts plies below the root move, so faster wins and
//! slower losses are preferred.

use super::super::rules::{check_winner, is_full};
use super::super::{Board, Mark, Position, Square};
use super::random::random_move;
use rand::Rng;
use std::collections::HashMap;
use tracing::{debug, instrument};

const WIN_SCORE: i32 = 10;

/// Minimax searcher with an optional ply limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    depth_limit: Option<u32>,
}

impl Minimax {
    /// Searches at most `limit` plies below the root move.
    pub const fn bounded(limit: u32) -> Self {
        Self {
            depth_limit: Some(limit),
        }
    }

    /// Searches to terminal positions only.
    pub const fn unbounded() -> Self {
        Self { depth_limit: None }
    }

    /// Picks the best square for `computer`.
    ///
    /// Empty squares are tried in board order and the first one with the
    /// highest score wins ties. The caller's board is left untouched; the
    /// search runs on a private scratch copy.
    ///
    /// Precondition: the board is not already decided.
    #[instrument(level = "debug", skip(self, board, rng), fields(depth_limit = ?self.depth_limit))]
    pub fn best_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        computer: Mark,
        rng: &mut R,
    ) -> Option<Position> {
        let mut search = Search::new(board, computer, self.depth_limit);
        let mut best_score = i32::MIN;
        let mut best = None;

        for pos in Position::ALL {
            if !search.scratch.is_empty(pos) {
                continue;
            }
            search.place(pos, computer);
            let score = search.score(0, false);
            search.undo(pos);

            if score > best_score {
                best_score = score;
                best = Some(pos);
            }
        }

        debug!(
            best = ?best,
            best_score,
            nodes = search.nodes,
            "Minimax search finished"
        );

        best.or_else(|| random_move(board, rng))
    }

    /// Scores every empty square for `computer`, in board order.
    pub fn scores(&self, board: &Board, computer: Mark) -> Vec<(Position, i32)> {
        let mut search = Search::new(board, computer, self.depth_limit);
        let mut scores = Vec::new();
        for pos in Position::ALL {
            if !search.scratch.is_empty(pos) {
                continue;
            }
            search.place(pos, computer);
            scores.push((pos, search.score(0, false)));
            search.undo(pos);
        }
        scores
    }
}

/// State of a single search call.
///
/// Within one root the number of marks on the scratch board fixes both the
/// ply depth and the side to move, so the board alone is an exact memo key.
struct Search {
    scratch: Board,
    computer: Mark,
    depth_limit: Option<u32>,
    memo: HashMap<Board, i32>,
    nodes: u64,
}

impl Search {
    fn new(board: &Board, computer: Mark, depth_limit: Option<u32>) -> Self {
        Self {
            scratch: board.clone(),
            computer,
            depth_limit,
            memo: HashMap::new(),
            nodes: 0,
        }
    }

    fn place(&mut self, pos: Position, mark: Mark) {
        self.scratch.set(pos, Square::Occupied(mark));
    }

    fn undo(&mut self, pos: Position) {
        self.scratch.set(pos, Square::Empty);
    }

    fn score(&mut self, depth: u32, maximizing: bool) -> i32 {
        if let Some(&cached) = self.memo.get(&self.scratch) {
            return cached;
        }
        self.nodes += 1;

        let score = match check_winner(&self.scratch) {
            Some(mark) if mark == self.computer => WIN_SCORE - depth as i32,
            Some(_) => depth as i32 - WIN_SCORE,
            None if is_full(&self.scratch) || self.depth_limit == Some(depth) => 0,
            None => self.children(depth, maximizing),
        };

        self.memo.insert(self.scratch.clone(), score);
        score
    }

    fn children(&mut self, depth: u32, maximizing: bool) -> i32 {
        let mark = if maximizing {
            self.computer
        } else {
            self.computer.opponent()
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in Position::ALL {
            if !self.scratch.is_empty(pos) {
                continue;
            }
            self.place(pos, mark);
            let score = self.score(depth + 1, !maximizing);
            self.undo(pos);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}
