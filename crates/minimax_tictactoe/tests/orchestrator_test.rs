//! Tests for the game loop.

use anyhow::Result;
use minimax_tictactoe::{GameEvent, HumanPlayer, MinimaxPlayer, Orchestrator, Player};
use std::io::Cursor;
use tictactoe_core::{Board, Outcome, Player as Mark, Position, Square};

/// Plays a fixed list of moves.
struct Scripted {
    moves: Vec<Position>,
}

impl Player for Scripted {
    fn get_move(&mut self, _board: &Board) -> Result<Position> {
        if self.moves.is_empty() {
            anyhow::bail!("Script exhausted");
        }
        Ok(self.moves.remove(0))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

#[test]
fn test_self_play_draws_with_one_event_per_move() {
    let mut game = Orchestrator::new(
        Box::new(MinimaxPlayer::new("X engine")),
        Box::new(MinimaxPlayer::new("O engine")),
    );

    let mut events = Vec::new();
    let outcome = game
        .run(|event| {
            events.push(event.clone());
            Ok(())
        })
        .unwrap();

    assert_eq!(outcome, Outcome::Draw);
    let moves = events
        .iter()
        .filter(|e| matches!(e, GameEvent::MoveMade { .. }))
        .count();
    assert_eq!(moves, 9);
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            outcome: Outcome::Draw,
            winner: None
        })
    );
}

#[test]
fn test_marks_alternate_in_events() {
    let mut game = Orchestrator::new(
        Box::new(MinimaxPlayer::new("X engine")),
        Box::new(MinimaxPlayer::new("O engine")),
    );
    let mut marks = Vec::new();
    game.run(|event| {
        if let GameEvent::MoveMade { mark, .. } = event {
            marks.push(*mark);
        }
        Ok(())
    })
    .unwrap();

    for pair in marks.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
    assert_eq!(marks.first(), Some(&Mark::X));
}

#[test]
fn test_engine_holds_against_weak_opening() {
    // X wanders along the edges; the engine as O must not lose.
    let weak_x = Scripted {
        moves: vec![
            Position::TopCenter,
            Position::MiddleLeft,
            Position::BottomCenter,
            Position::MiddleRight,
            Position::BottomRight,
        ],
    };
    let mut game = Orchestrator::new(Box::new(weak_x), Box::new(MinimaxPlayer::new("engine")));
    let outcome = game.run(|_| Ok(()));
    // The script may run into an occupied square once the engine has won
    // early; either way X must not have won.
    match outcome {
        Ok(outcome) => assert_ne!(outcome, Outcome::Won(Mark::X)),
        Err(_) => assert_ne!(game.board().winner(), Some(Mark::X)),
    }
}

#[test]
fn test_human_against_engine_from_stdin() {
    // Human as O answers the engine's corner opening in the center.
    let input = Cursor::new("1 1\n");
    let human = HumanPlayer::new("Ada", input, Vec::new());
    let mut game = Orchestrator::new(Box::new(MinimaxPlayer::new("engine")), Box::new(human));

    let result = game.run(|_| Ok(()));
    // One line of input only: the game stops when the human's input closes.
    assert!(result.is_err());
    assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Mark::X));
    assert_eq!(game.board().get(Position::Center), Square::Occupied(Mark::O));
}

#[test]
fn test_resume_from_board() {
    let board: Board = "XX./OO./...".parse().unwrap();
    let mut game = Orchestrator::from_board(
        board,
        Box::new(MinimaxPlayer::new("X engine")),
        Box::new(MinimaxPlayer::new("O engine")),
    );
    let mut winner_name = None;
    let outcome = game
        .run(|event| {
            if let GameEvent::GameOver { winner, .. } = event {
                winner_name = winner.clone();
            }
            Ok(())
        })
        .unwrap();
    assert_eq!(outcome, Outcome::Won(Mark::X));
    assert_eq!(winner_name.as_deref(), Some("X engine"));
}
