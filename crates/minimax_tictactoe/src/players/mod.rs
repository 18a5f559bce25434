//! Player trait and implementations.

mod human;
mod minimax;

pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;

use anyhow::Result;
use tictactoe_core::{Board, Position};

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player for the board it is to move on.
    fn get_move(&mut self, board: &Board) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
