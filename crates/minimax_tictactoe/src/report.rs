//! Position analysis reports for the `best-move` and `analyze` commands.

use serde::Serialize;
use std::fmt;
use tictactoe_core::{Board, Outcome, Player, Position, analyze, best_move, evaluate};
use tracing::instrument;

/// Value of a single candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveScore {
    /// Row of the cell (0-2).
    pub row: usize,
    /// Column of the cell (0-2).
    pub col: usize,
    /// Game value after the move, from X's perspective.
    pub value: i8,
}

/// Full analysis of a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// Board in compact notation.
    pub board: String,
    /// Player to move (meaningless once the game is over).
    pub to_move: Player,
    /// Derived outcome.
    pub outcome: Outcome,
    /// Game value with perfect play, from X's perspective.
    pub value: i8,
    /// Engine's choice, `None` on a finished board.
    pub best: Option<MoveScore>,
    /// Every legal move, row-major.
    pub moves: Vec<MoveScore>,
}

impl AnalysisReport {
    /// Analyzes `board` with the minimax engine.
    #[instrument(skip(board))]
    pub fn new(board: &Board) -> Self {
        let moves: Vec<MoveScore> = analyze(board)
            .into_iter()
            .map(|(pos, value)| score(pos, value))
            .collect();
        let best = best_move(board).and_then(|pos| {
            moves
                .iter()
                .copied()
                .find(|m| (m.row, m.col) == pos.coords())
        });
        Self {
            board: board.to_notation(),
            to_move: board.current_player(),
            outcome: board.outcome(),
            value: evaluate(board),
            best,
            moves,
        }
    }
}

fn score(pos: Position, value: i8) -> MoveScore {
    let (row, col) = pos.coords();
    MoveScore { row, col, value }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "board:   {}", self.board)?;
        if self.outcome != Outcome::InProgress {
            return write!(f, "outcome: {}", self.outcome);
        }
        writeln!(f, "to move: {}", self.to_move)?;
        writeln!(f, "value:   {:+}", self.value)?;
        for m in &self.moves {
            writeln!(f, "  {} {}  {:+}", m.row, m.col, m.value)?;
        }
        match self.best {
            Some(best) => write!(f, "best:    {} {}", best.row, best.col),
            None => write!(f, "best:    none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_winning_position() {
        let board: Board = "XX./OO./...".parse().unwrap();
        let report = AnalysisReport::new(&board);
        assert_eq!(report.to_move, Player::X);
        assert_eq!(report.value, 1);
        assert_eq!(report.moves.len(), 5);
        assert_eq!(
            report.best,
            Some(MoveScore {
                row: 0,
                col: 2,
                value: 1
            })
        );
    }

    #[test]
    fn test_report_for_finished_board() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let report = AnalysisReport::new(&board);
        assert!(report.moves.is_empty());
        assert_eq!(report.best, None);
        assert_eq!(report.outcome, Outcome::Won(Player::X));
        assert!(report.to_string().contains("X wins"));
    }

    #[test]
    fn test_report_serializes() {
        let report = AnalysisReport::new(&"XX./OO./...".parse().unwrap());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["board"], "XX./OO./...");
        assert_eq!(json["to_move"], "X");
        assert_eq!(json["moves"].as_array().map(Vec::len), Some(5));
    }
}
