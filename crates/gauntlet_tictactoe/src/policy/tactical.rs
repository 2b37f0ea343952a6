//! Tier 3: win if possible, block if necessary, otherwise center-priority.

use super::super::rules::completing_cell;
use super::super::{Board, Mark, Position};
use super::center::center_priority;
use rand::Rng;
use tracing::trace;

/// Completes a line for `computer`, else blocks one for its opponent,
/// else defers to [`center_priority`].
pub fn tactical<R: Rng + ?Sized>(board: &Board, computer: Mark, rng: &mut R) -> Option<Position> {
    if let Some(pos) = completing_cell(board, computer) {
        trace!(position = %pos, "Taking the win");
        return Some(pos);
    }

    if let Some(pos) = completing_cell(board, computer.opponent()) {
        trace!(position = %pos, "Blocking");
        return Some(pos);
    }

    center_priority(board, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_blocks_row_threat() {
        let board: Board = "XX. .O. ...".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(tactical(&board, Mark::O, &mut rng), Some(Position::TopRight));
    }

    #[test]
    fn test_win_beats_block() {
        // X threatens the top row, O can finish the middle row.
        let board: Board = "XX. OO. X..".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(tactical(&board, Mark::O, &mut rng), Some(Position::MiddleRight));
    }

    #[test]
    fn test_plays_either_mark() {
        let board: Board = "OO. .X. ...".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(tactical(&board, Mark::X, &mut rng), Some(Position::TopRight));
    }

    #[test]
    fn test_quiet_board_defers_to_center() {
        let board: Board = "X........".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(tactical(&board, Mark::O, &mut rng), Some(Position::Center));
    }
}
