//! A single round of tic-tac-toe.

use super::rules::{Outcome, evaluate};
use super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

/// Round state: board, side to move, history and outcome.
///
/// X always moves first. The outcome is re-evaluated after every move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Mark,
    outcome: Outcome,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true once the round is decided.
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the mark to move at `pos` and returns the new outcome.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] after the round is decided and
    /// [`MoveError::SquareOccupied`] for a taken square.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn make_move(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mark = self.to_move;
        self.board.set(pos, Square::Occupied(mark));
        self.history.push(Move {
            mark,
            position: pos,
        });
        self.to_move = mark.opponent();
        self.outcome = evaluate(&self.board);

        debug!(position = %pos, outcome = %self.outcome, "Move applied");
        Ok(self.outcome)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_players_alternate() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Mark::X);
        game.make_move(Position::Center).unwrap();
        assert_eq!(game.to_move(), Mark::O);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut game = Game::new();
        game.make_move(Position::Center).unwrap();
        let err = game.make_move(Position::Center).unwrap_err();
        assert_eq!(err, MoveError::SquareOccupied(Position::Center));
        assert!(err.to_string().contains("occupied"));
        assert_eq!(game.to_move(), Mark::O);
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = Game::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
        ] {
            assert_eq!(game.make_move(pos).unwrap(), Outcome::InProgress);
        }
        let outcome = game.make_move(Position::TopRight).unwrap();
        assert_eq!(outcome.winner(), Some(Mark::X));
        assert_eq!(outcome.line().map(|l| l.indices()), Some([0, 1, 2]));
        assert_eq!(
            game.make_move(Position::BottomRight),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_full_board_is_draw() {
        let mut game = Game::new();
        // X O X / X O O / O X X
        for idx in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game.make_move(Position::from_index(idx).unwrap()).unwrap();
        }
        assert_eq!(game.outcome(), Outcome::Draw);
    }
}
