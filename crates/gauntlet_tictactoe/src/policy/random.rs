//! Tier 1: uniform random over empty squares.

use super::super::{Board, Position};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Picks an empty square uniformly at random.
///
/// Returns `None` only when the board is full.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    board.empty_positions().choose(rng).copied()
}
