//! Exhaustive minimax search.
//!
//! X maximizes utility and O minimizes it. [`max_value`] and [`min_value`]
//! recurse into each other until a terminal board is reached; every call
//! has one empty square fewer than its caller, so the search always ends.
//!
//! Moves are expanded in row-major order and a later move only replaces the
//! current best when its value is strictly better. Among equally good moves
//! the engine therefore picks the one closest to the top-left corner.

use crate::{Board, Player, Position};
use tracing::{debug, instrument, trace};

/// Boards reachable by one legal move, paired with the move that leads there.
///
/// `legal_actions` and `apply` both test `Board::is_empty`, so every expansion
/// succeeds; a failure here is a broken transition, not a search outcome.
fn successors(board: &Board) -> impl Iterator<Item = (Position, Board)> + '_ {
    board.legal_actions().into_iter().map(move |pos| {
        board
            .apply(pos)
            .map(|next| (pos, next))
            .expect("legal action targets an empty square")
    })
}

/// Value of `board` when X is to move and both sides play perfectly.
#[instrument(level = "trace", skip_all)]
pub fn max_value(board: &Board) -> i8 {
    if board.is_terminal() {
        return board.utility();
    }
    successors(board)
        .map(|(_, next)| min_value(&next))
        .max()
        .expect("non-terminal board has an empty square")
}

/// Value of `board` when O is to move and both sides play perfectly.
#[instrument(level = "trace", skip_all)]
pub fn min_value(board: &Board) -> i8 {
    if board.is_terminal() {
        return board.utility();
    }
    successors(board)
        .map(|(_, next)| max_value(&next))
        .min()
        .expect("non-terminal board has an empty square")
}

/// Game-theoretic value of `board` with the side to move choosing.
#[instrument(skip(board), fields(board = %board.to_notation()))]
pub fn evaluate(board: &Board) -> i8 {
    let value = if board.current_player().is_maximizer() {
        max_value(board)
    } else {
        min_value(board)
    };
    debug!(value, "Evaluated board");
    value
}

/// Every legal move with the value of the board it leads to, row-major.
///
/// Empty when the board is terminal.
#[instrument(skip(board), fields(board = %board.to_notation()))]
pub fn analyze(board: &Board) -> Vec<(Position, i8)> {
    if board.is_terminal() {
        return Vec::new();
    }
    let reply = next_value(board.current_player());
    successors(board)
        .map(|(pos, next)| (pos, reply(&next)))
        .collect()
}

/// Optimal move for the player to move, or `None` on a terminal board.
///
/// X takes the first move with the strictly greatest value, O the first move
/// with the strictly least value.
#[instrument(skip(board), fields(board = %board.to_notation()))]
pub fn best_move(board: &Board) -> Option<Position> {
    if board.is_terminal() {
        return None;
    }

    let player = board.current_player();
    let reply = next_value(player);
    let mut best: Option<(Position, i8)> = None;

    for (pos, next) in successors(board) {
        let value = reply(&next);
        trace!(position = %pos, value, "Scored move");
        let improves = match best {
            None => true,
            Some((_, best_value)) if player.is_maximizer() => value > best_value,
            Some((_, best_value)) => value < best_value,
        };
        if improves {
            best = Some((pos, value));
        }
    }

    if let Some((pos, value)) = best {
        debug!(player = %player, position = %pos, value, "Chose move");
    }
    best.map(|(pos, _)| pos)
}

/// Evaluator for the board after `player` has moved: the opponent replies.
fn next_value(player: Player) -> fn(&Board) -> i8 {
    if player.is_maximizer() {
        min_value
    } else {
        max_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        assert_eq!(best_move(&board("XXX/OO./...")), None);
        assert!(analyze(&board("XXX/OO./...")).is_empty());
    }

    #[test]
    fn test_takes_immediate_win() {
        assert_eq!(best_move(&board("XX./OO./...")), Some(Position::TopRight));
    }

    #[test]
    fn test_o_blocks() {
        // X threatens the top row; O must take the top-right corner.
        assert_eq!(best_move(&board("XX./.O./...")), Some(Position::TopRight));
    }

    #[test]
    fn test_o_wins_when_it_can() {
        // O to move with two in the middle row.
        assert_eq!(best_move(&board("XX./OO./X..")), Some(Position::MiddleRight));
    }

    #[test]
    fn test_values_of_terminal_boards() {
        assert_eq!(max_value(&board("XXX/OO./...")), 1);
        assert_eq!(min_value(&board("XXX/OO./...")), 1);
        assert_eq!(max_value(&board("XOX/OXX/OXO")), 0);
    }

    #[test]
    fn test_recursion_matches_per_move_scores() {
        for notation in ["X../.../...", "X.O/.X./...", "XO./.X./..O", "XOX/.O./..."] {
            let b = board(notation);
            let values: Vec<i8> = analyze(&b).into_iter().map(|(_, v)| v).collect();
            assert!(!values.is_empty());
            let expected = if b.current_player().is_maximizer() {
                values.iter().copied().max()
            } else {
                values.iter().copied().min()
            };
            assert_eq!(Some(evaluate(&b)), expected, "{notation}");
        }
    }

    #[test]
    fn test_forced_loss_is_seen() {
        // X holds a fork; whatever O does, X wins.
        let b = board("X.X/.O./O.X");
        assert_eq!(evaluate(&b), 1);
    }
}
