//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Nothing here mutates state or
//! validates that the board came from legal play.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::is_full;
pub use outcome::{Outcome, evaluate};
pub use win::{LINES, Line, check_winner, completing_cell, winning_line};
