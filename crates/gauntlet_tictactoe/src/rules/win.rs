//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};

/// Three positions that win when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// Returns the positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Returns the board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Checks whether the line passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Returns the mark filling all three squares, if any.
    pub fn owner(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            sq.mark()
        } else {
            None
        }
    }
}

/// The 8 lines in canonical order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns the first completed line in canonical order and its mark.
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    LINES
        .iter()
        .find_map(|line| line.owner(board).map(|mark| (mark, *line)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark has three in a row, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

/// Finds the cell that completes a line for `mark`.
///
/// Scans lines in canonical order and returns the empty cell of the first
/// line where `mark` already holds the other two squares.
pub fn completing_cell(board: &Board, mark: Mark) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let positions = line.positions();
        let held = positions
            .iter()
            .filter(|pos| board.get(**pos) == Square::Occupied(mark))
            .count();
        if held != 2 {
            return None;
        }
        positions.into_iter().find(|pos| board.is_empty(*pos))
    })
}
