//! Human player reading moves as text lines.

use super::Player;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_core::{Board, Position};
use tracing::{debug, warn};

/// Human player entering `row col` pairs (or 0-8 indices, or labels).
///
/// Invalid or occupied positions are reported and asked for again.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player over the given input and output.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn get_move(&mut self, board: &Board) -> Result<Position> {
        loop {
            write!(
                self.output,
                "{} ({}), enter row and column: ",
                self.name,
                board.current_player()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                anyhow::bail!("Input closed before {} moved", self.name);
            }

            match Position::parse(&line) {
                Some(pos) if board.is_empty(pos) => {
                    debug!(player = %self.name, position = %pos, "Human chose position");
                    return Ok(pos);
                }
                Some(pos) => {
                    warn!(position = %pos, "Square already taken");
                    writeln!(self.output, "Square {} is already taken.", pos)?;
                }
                None => {
                    writeln!(
                        self.output,
                        "Could not read {:?}; use two numbers from 0 to 2, e.g. \"1 1\".",
                        line.trim()
                    )?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reprompts_until_valid() {
        let board: Board = "X../.../...".parse().unwrap();
        let input = Cursor::new("banana\n0 0\n3 3\n2 1\n");
        let mut output = Vec::new();
        let pos = HumanPlayer::new("Ada", input, &mut output)
            .get_move(&board)
            .unwrap();
        assert_eq!(pos, Position::BottomCenter);

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("already taken"));
        assert_eq!(transcript.matches("enter row and column").count(), 4);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let board = Board::new();
        let mut player = HumanPlayer::new("Ada", Cursor::new(""), Vec::new());
        assert!(player.get_move(&board).is_err());
    }
}
