//! Compact text notation for boards.
//!
//! A board is written as nine cells in row-major order: `X`, `O`, or one of
//! `.`, `_`, `-`, space for an empty cell. Row separators `/` and `|` and line
//! breaks are ignored, so `"XX./OO./..."` and `"XX.OO...."` describe the same
//! board. Spaces are cells, never padding: `"XO.      "` is a full nine-cell
//! board.

use crate::invariants::{BoardInvariants, InvariantSet};
use crate::{Board, Player, Square};
use std::str::FromStr;
use tracing::instrument;

/// Error parsing a board from notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// Not exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),

    /// A character that is not a mark or an empty marker.
    #[display("Unexpected character {:?} in board", _0)]
    BadCharacter(#[error(not(source))] char),

    /// The board cannot arise from legal play.
    #[display("Impossible board: {}", _0)]
    Unreachable(#[error(not(source))] String),
}

fn cell(c: char) -> Result<Square, ParseBoardError> {
    match c {
        'X' | 'x' => Ok(Square::Occupied(Player::X)),
        'O' | 'o' => Ok(Square::Occupied(Player::O)),
        '.' | '_' | '-' | ' ' => Ok(Square::Empty),
        other => Err(ParseBoardError::BadCharacter(other)),
    }
}

impl TryFrom<[Square; 9]> for Board {
    type Error = ParseBoardError;

    /// Builds a board, rejecting squares that cannot arise from legal play.
    fn try_from(squares: [Square; 9]) -> Result<Self, Self::Error> {
        let board = Board::from_squares(squares);
        BoardInvariants::check_all(&board).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            ParseBoardError::Unreachable(descriptions)
        })?;
        Ok(board)
    }
}

impl From<Board> for [Square; 9] {
    fn from(board: Board) -> Self {
        *board.squares()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !matches!(*c, '/' | '|' | '\n' | '\r'))
            .map(cell)
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Square; 9] = cells
            .try_into()
            .map_err(|cells: Vec<Square>| ParseBoardError::WrongLength(cells.len()))?;

        Board::try_from(squares)
    }
}

impl Board {
    /// Writes the board in compact notation, rows separated by `/`.
    pub fn to_notation(&self) -> String {
        self.squares()
            .chunks(3)
            .map(|row| row.iter().map(|s| s.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_parse_with_and_without_separators() {
        let a: Board = "XX./OO./...".parse().unwrap();
        let b: Board = "xx.oo....".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.get(Position::TopCenter), Square::Occupied(Player::X));
        assert_eq!(a.get(Position::Center), Square::Occupied(Player::O));
        assert!(a.is_empty(Position::TopRight));
    }

    #[test]
    fn test_notation_round_trips_display_form() {
        let board: Board = "X.O/.X./..O".parse().unwrap();
        assert_eq!(board.to_notation(), "X.O/.X./..O");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(ParseBoardError::WrongLength(2))
        );
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        assert_eq!(
            "XO?......".parse::<Board>(),
            Err(ParseBoardError::BadCharacter('?'))
        );
    }

    #[test]
    fn test_spaces_are_empty_cells_at_either_end() {
        let trailing: Board = "XO.      ".parse().unwrap();
        assert_eq!(trailing.to_notation(), "XO./.../...");

        let leading: Board = "   .X.O..".parse().unwrap();
        assert_eq!(leading.to_notation(), ".../.X./O..");
    }

    #[test]
    fn test_display_form_parses_back() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.to_string().parse::<Board>(), Ok(board));
    }

    #[test]
    fn test_parse_rejects_unbalanced() {
        let err = "XXX......".parse::<Board>().unwrap_err();
        assert!(matches!(err, ParseBoardError::Unreachable(_)));
    }
}
