//! Engine-backed player.

use super::Player;
use anyhow::Result;
use tictactoe_core::{Board, Position, best_move};
use tracing::debug;

/// Player that always picks the minimax-optimal move.
pub struct MinimaxPlayer {
    name: String,
}

impl MinimaxPlayer {
    /// Creates a new engine player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for MinimaxPlayer {
    fn get_move(&mut self, board: &Board) -> Result<Position> {
        debug!(engine = %self.name, "Searching for move");
        let pos = best_move(board)
            .ok_or_else(|| anyhow::anyhow!("No move available on a finished board"))?;
        debug!(engine = %self.name, position = %pos, "Engine chose position");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refuses_finished_board() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert!(MinimaxPlayer::new("engine").get_move(&board).is_err());
    }
}
