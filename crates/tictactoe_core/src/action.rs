//! The transition function: placing a mark yields a new board.

use crate::invariants::{BoardInvariants, InvariantSet};
use crate::{Board, Position, Square};
use tracing::{debug, instrument};

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Invalid move: square {} ({}) is already occupied", _0, _0.label())]
    InvalidMove(#[error(not(source))] Position),
}

impl MoveError {
    /// The position the rejected move targeted.
    pub fn position(&self) -> Position {
        match self {
            MoveError::InvalidMove(pos) => *pos,
        }
    }
}

impl Board {
    /// Returns the board that results from the player to move marking `pos`.
    ///
    /// `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] if `pos` is already occupied.
    #[instrument(level = "trace", skip(self))]
    pub fn apply(&self, pos: Position) -> Result<Board, MoveError> {
        if !self.is_empty(pos) {
            debug!(position = %pos, "Rejected move onto occupied square");
            return Err(MoveError::InvalidMove(pos));
        }

        let next = self.with(pos, Square::Occupied(self.current_player()));
        debug_assert!(
            BoardInvariants::check_all(&next).is_ok() || BoardInvariants::check_all(self).is_err(),
            "Transition broke a board invariant"
        );
        Ok(next)
    }
}
