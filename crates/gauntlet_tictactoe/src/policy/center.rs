//! Tier 2: center first, then corners, then anything.

use super::super::{Board, Position};
use super::random::random_move;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Takes the center if free, else a random free corner, else a random square.
pub fn center_priority<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    if board.is_empty(Position::Center) {
        return Some(Position::Center);
    }

    let corners: Vec<Position> = Position::CORNERS
        .into_iter()
        .filter(|pos| board.is_empty(*pos))
        .collect();
    if let Some(corner) = corners.choose(rng) {
        return Some(*corner);
    }

    random_move(board, rng)
}
