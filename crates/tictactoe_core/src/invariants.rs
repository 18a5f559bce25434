//! Checkable board invariants.
//!
//! Invariants are logical properties every board reachable from the empty
//! board satisfies. Transitions assert them in debug builds and the notation
//! parser uses them to reject impossible boards.

use crate::rules::win::winning_players;
use crate::{Board, Player};
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X and O counts differ by at most one.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    #[instrument(level = "trace", skip(board))]
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        let valid = x_count.abs_diff(o_count) <= 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one"
    }
}

/// Invariant: at most one player holds a complete line.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    #[instrument(level = "trace", skip(board))]
    fn holds(board: &Board) -> bool {
        let winners = winning_players(board);
        let valid = winners.len() <= 1;
        if !valid {
            warn!(?winners, "More than one winner on board");
        }
        valid
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (MarkBalanceInvariant, SingleWinnerInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_invariants_hold_for_empty_board() {
        assert!(BoardInvariants::check_all(&Board::new()).is_ok());
    }

    #[test]
    fn test_mark_balance_detects_excess() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::Center, Square::Occupied(Player::X));
        assert!(!MarkBalanceInvariant::holds(&board));

        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].to_string(),
            MarkBalanceInvariant::description()
        );
    }

    #[test]
    fn test_single_winner_detects_two_lines() {
        let board = Board::from_squares([
            Square::Occupied(Player::X),
            Square::Occupied(Player::X),
            Square::Occupied(Player::X),
            Square::Empty,
            Square::Empty,
            Square::Empty,
            Square::Occupied(Player::O),
            Square::Occupied(Player::O),
            Square::Occupied(Player::O),
        ]);
        assert!(MarkBalanceInvariant::holds(&board));
        assert!(!SingleWinnerInvariant::holds(&board));
    }
}
