//! Game orchestration between players.

use crate::players::Player;
use anyhow::Result;
use tictactoe_core::{Board, Outcome, Player as Mark, Position};
use tracing::{debug, info, instrument};

/// Events reported while a game is played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A player is about to choose a move.
    TurnStarted {
        /// Name of the player to move.
        player: String,
        /// Mark of the player to move.
        mark: Mark,
        /// Board the player moves on.
        board: Board,
    },
    /// Move was made.
    MoveMade {
        /// Name of the player who moved.
        player: String,
        /// Mark placed.
        mark: Mark,
        /// Cell marked.
        position: Position,
        /// Board after the move.
        board: Board,
    },
    /// Game ended.
    GameOver {
        /// Final outcome.
        outcome: Outcome,
        /// Name of the winner, if any.
        winner: Option<String>,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    board: Board,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl Orchestrator {
    /// Creates a new orchestrator starting from the empty board.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self::from_board(Board::new(), player_x, player_o)
    }

    /// Creates an orchestrator resuming play from `board`.
    pub fn from_board(board: Board, player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self {
            board,
            player_x,
            player_o,
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs the game loop until the board is terminal, reporting each event.
    ///
    /// # Errors
    ///
    /// Propagates player failures (closed input) and rejected moves.
    #[instrument(skip_all)]
    pub fn run(&mut self, mut on_event: impl FnMut(&GameEvent) -> Result<()>) -> Result<Outcome> {
        info!("Starting game orchestration");

        while !self.board.is_terminal() {
            let mark = self.board.current_player();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let name = player.name().to_string();

            on_event(&GameEvent::TurnStarted {
                player: name.clone(),
                mark,
                board: self.board,
            })?;

            debug!(player = %name, "Waiting for move");
            let position = player.get_move(&self.board)?;
            self.board = self.board.apply(position)?;

            on_event(&GameEvent::MoveMade {
                player: name,
                mark,
                position,
                board: self.board,
            })?;
        }

        let outcome = self.board.outcome();
        let winner = match outcome {
            Outcome::Won(Mark::X) => Some(self.player_x.name().to_string()),
            Outcome::Won(Mark::O) => Some(self.player_o.name().to_string()),
            _ => None,
        };
        info!(%outcome, "Game over");
        on_event(&GameEvent::GameOver { outcome, winner })?;
        Ok(outcome)
    }
}
