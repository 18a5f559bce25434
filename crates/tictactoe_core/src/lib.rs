//! Pure tic-tac-toe game logic with an exhaustive minimax solver.
//!
//! Boards are immutable values. Every transition returns a new [`Board`],
//! and everything else (whose turn it is, the winner, the outcome) is derived
//! from the squares on demand.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Board, Position, best_move};
//!
//! let board: Board = "XX./OO./...".parse()?;
//! assert_eq!(best_move(&board), Some(Position::TopRight));
//! # Ok::<(), tictactoe_core::ParseBoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod minimax;
mod notation;
mod position;
pub mod rules;
mod types;

use std::collections::BTreeSet;

pub use action::MoveError;
pub use minimax::{analyze, best_move, evaluate, max_value, min_value};
pub use notation::ParseBoardError;
pub use position::Position;
pub use types::{Board, Outcome, Player, Square};

/// A player's symbol on the board.
pub type Mark = Player;

/// A move is the cell the player to move marks.
pub type Move = Position;

/// The empty starting board.
pub fn initial_state() -> Board {
    Board::new()
}

/// The mark that moves next on `board`.
pub fn current_player(board: &Board) -> Mark {
    board.current_player()
}

/// Every empty cell of `board`, iterated row-major.
pub fn legal_actions(board: &Board) -> BTreeSet<Move> {
    board.legal_actions()
}

/// The board after the player to move marks `mv`.
///
/// # Errors
///
/// Returns [`MoveError::InvalidMove`] when the cell is occupied.
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, MoveError> {
    board.apply(mv)
}

/// The mark holding three in a row, if any.
pub fn winning_mark(board: &Board) -> Option<Mark> {
    board.winner()
}

/// Whether the game on `board` is over.
pub fn is_terminal(board: &Board) -> bool {
    board.is_terminal()
}

/// +1 when X has won, -1 when O has won, 0 otherwise.
pub fn utility(board: &Board) -> i8 {
    board.utility()
}
