//! Command-line interface for minimax_tictactoe.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictactoe_core::Player;

/// Minimax Tic-Tac-Toe - play against an engine that never loses
#[derive(Parser, Debug)]
#[command(name = "minimax_tictactoe")]
#[command(about = "Tic-tac-toe with exhaustive minimax search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Mark selectable on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkArg {
    /// Play X (moves first)
    X,
    /// Play O
    O,
}

impl From<MarkArg> for Player {
    fn from(mark: MarkArg) -> Self {
        match mark {
            MarkArg::X => Player::X,
            MarkArg::O => Player::O,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the engine in the terminal
    Play {
        /// Mark to play (overrides the config file)
        #[arg(long, value_enum)]
        human: Option<MarkArg>,

        /// Path to the TOML config file
        #[arg(short, long, default_value = minimax_tictactoe::DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Print the engine's move for a board, e.g. "XX./OO./..."
    BestMove {
        /// Board in compact notation (row-major, `.` for empty)
        board: String,
    },

    /// Print the value of every legal move for a board
    Analyze {
        /// Board in compact notation (row-major, `.` for empty)
        board: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play both sides from the empty board
    SelfPlay,
}
