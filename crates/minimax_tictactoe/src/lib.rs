//! Minimax Tic-Tac-Toe library - terminal play against a perfect engine.
//!
//! The game rules and the search live in [`tictactoe_core`]; this crate adds
//! the pieces a front end needs around them.
//!
//! # Architecture
//!
//! - **Players**: the [`Player`] trait with human and engine implementations
//! - **Orchestrator**: the game loop alternating between two players
//! - **Config**: TOML settings for interactive games
//! - **Report**: move-by-move analysis of a position
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{MinimaxPlayer, Orchestrator};
//! use tictactoe_core::Outcome;
//!
//! let mut game = Orchestrator::new(
//!     Box::new(MinimaxPlayer::new("engine X")),
//!     Box::new(MinimaxPlayer::new("engine O")),
//! );
//! let outcome = game.run(|_| Ok(()))?;
//! assert_eq!(outcome, Outcome::Draw);
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod orchestrator;
mod players;
mod report;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};

// Crate-level exports - Orchestration
pub use orchestrator::{GameEvent, Orchestrator};

// Crate-level exports - Players
pub use players::{HumanPlayer, MinimaxPlayer, Player};

// Crate-level exports - Analysis
pub use report::{AnalysisReport, MoveScore};
