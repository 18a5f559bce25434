//! Minimax Tic-Tac-Toe - Unified CLI
//!
//! Play against the engine, query it about a position, or watch it play
//! itself.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use minimax_tictactoe::{
    AnalysisReport, GameConfig, GameEvent, HumanPlayer, MinimaxPlayer, Orchestrator, Player,
};
use std::io;
use std::path::Path;
use tictactoe_core::{Board, Outcome, Player as Mark, analyze};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { human, config } => run_play(human.map(Mark::from), &config),
        Command::BestMove { board } => run_best_move(&board),
        Command::Analyze { board, json } => run_analyze(&board, json),
        Command::SelfPlay => run_self_play(),
    }
}

fn parse_board(notation: &str) -> Result<Board> {
    notation
        .parse::<Board>()
        .with_context(|| format!("Invalid board {:?}", notation))
}

/// Human against the engine on stdin/stdout.
#[instrument(skip(config_path), fields(config = %config_path.display()))]
fn run_play(human: Option<Mark>, config_path: &Path) -> Result<()> {
    let mut config = GameConfig::load_or_default(config_path)?;
    if let Some(mark) = human {
        config = config.with_human_mark(mark);
    }
    info!(human_mark = %config.human_mark(), "Starting interactive game");

    let human_player: Box<dyn Player> = Box::new(HumanPlayer::new(
        config.human_name().clone(),
        io::stdin().lock(),
        io::stdout(),
    ));
    let engine: Box<dyn Player> = Box::new(MinimaxPlayer::new(config.engine_name().clone()));

    let mut game = match config.human_mark() {
        Mark::X => Orchestrator::new(human_player, engine),
        Mark::O => Orchestrator::new(engine, human_player),
    };

    let engine_mark = config.human_mark().opponent();
    let show_analysis = *config.show_analysis();
    let outcome = game.run(|event| {
        match event {
            GameEvent::TurnStarted { mark, board, .. } => {
                println!("\n{}\n", board);
                if show_analysis && *mark == engine_mark {
                    for (pos, value) in analyze(board) {
                        println!("  {} {}  {:+}", pos.row(), pos.col(), value);
                    }
                }
            }
            GameEvent::MoveMade {
                player,
                mark,
                position,
                ..
            } => {
                println!("{} ({}) plays {}", player, mark, position);
            }
            GameEvent::GameOver { .. } => {}
        }
        Ok(())
    })?;

    println!("\n{}\n", game.board());
    print_outcome(outcome, config.human_mark());
    Ok(())
}

fn print_outcome(outcome: Outcome, human_mark: &Mark) {
    match outcome {
        Outcome::Won(winner) if winner == *human_mark => println!("Game over: you win."),
        Outcome::Won(winner) => println!("Game over: {} wins.", winner),
        _ => println!("Game over: tie."),
    }
}

fn run_best_move(notation: &str) -> Result<()> {
    let board = parse_board(notation)?;
    let report = AnalysisReport::new(&board);
    match report.best {
        Some(best) => println!("{} {} (value {:+})", best.row, best.col, report.value),
        None => println!("none ({})", report.outcome),
    }
    Ok(())
}

fn run_analyze(notation: &str, json: bool) -> Result<()> {
    let board = parse_board(notation)?;
    let report = AnalysisReport::new(&board);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

/// Engine against itself from the empty board.
fn run_self_play() -> Result<()> {
    let mut game = Orchestrator::new(
        Box::new(MinimaxPlayer::new("Minimax X")),
        Box::new(MinimaxPlayer::new("Minimax O")),
    );
    let outcome = game.run(|event| {
        if let GameEvent::MoveMade {
            mark,
            position,
            board,
            ..
        } = event
        {
            println!("{} plays {}\n{}\n", mark, position, board);
        }
        Ok(())
    })?;
    println!("Result: {}", outcome);
    Ok(())
}
