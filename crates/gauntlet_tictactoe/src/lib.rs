//! Pure tic-tac-toe logic for the gauntlet.
//!
//! - **Rules**: [`evaluate`] reports a win (with its line), a draw, or a game
//!   still in progress.
//! - **Policies**: [`select_move`] picks the computer's square for one of five
//!   [`Tier`]s, from uniform random up to full minimax.
//! - **Tournament**: five rounds, one per tier, tallied into a [`Verdict`].
//!
//! Nothing here performs I/O. Randomized tiers take the caller's [`rand::Rng`].
//!
//! # Example
//!
//! ```
//! use gauntlet_tictactoe::{Board, Mark, Outcome, Position, Tier, evaluate, select_move};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let board: Board = "XX. .O. ...".parse().unwrap();
//! assert_eq!(evaluate(&board), Outcome::InProgress);
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let reply = select_move(&board, Tier::Tactician, Mark::O, &mut rng);
//! assert_eq!(reply, Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod policy;
mod position;
pub mod rules;
mod tournament;
mod types;

pub use game::{Game, Move, MoveError};
pub use policy::{
    MASTER_DEPTH, Minimax, Opponent, Tier, center_priority, random_move, select_move, tactical,
};
pub use position::Position;
pub use rules::{LINES, Line, Outcome, evaluate, is_full};
pub use tournament::{
    Champion, ROUNDS, RoundResult, Tournament, TournamentError, TournamentSummary, Verdict,
};
pub use types::{Board, BoardParseError, Mark, Square};
