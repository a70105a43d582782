use std::io::{self, Write};

use anyhow::{anyhow, Result};
use log::debug;
use rand::Rng;

use engine::GameEngine;
use ladders::{Action, Engine, GameState, Mode, MoveRecord, Phase, QuestionSource};

/// Prompts for a game mode on stdin.
pub fn choose_mode() -> Result<Mode> {
    println!("Choose game mode");
    println!("  1. Player vs AI");
    println!("  2. Player vs Player");

    loop {
        let input = read_line("> ")?;
        match input.trim() {
            "1" => return Ok(Mode::VersusAi),
            "2" => return Ok(Mode::TwoPlayer),
            _ => println!("Enter 1 or 2."),
        }
    }
}

/// Runs one interactive game on stdin/stdout and returns the final state.
pub fn run<S, R>(game: &Engine<S>, mode: Mode, rng: &mut R) -> Result<GameState>
where
    S: QuestionSource,
    R: Rng,
{
    let mut state = GameState::new(mode);
    println!("{}", game.board());
    println!("{}", state);

    loop {
        if let Some(winner) = state.winner() {
            println!("Player {} wins!", winner + 1);
            return Ok(state);
        }

        let current = state.current_player();
        if state.player(current).ai {
            let _ = read_line("AI's turn. Press Enter to roll. ")?;
            let next = game.take_action(&state, &Action::AiRoll, rng)?;
            report_move("The AI", &resolved_move(&next)?);
            state = game.take_action(&next, &Action::FinishResolution, rng)?;
            println!("{}", state);
            continue;
        }

        println!("Player {}, solve this to roll the dice:", current + 1);
        state = game.take_action(&state, &Action::BeginTurn, rng)?;
        let question = state
            .pending_question()
            .cloned()
            .ok_or_else(|| anyhow!("no question pending after the turn opened"))?;
        println!("  {}", question.prompt);

        let answer = read_line("Your answer: ")?;
        debug!("player {} submitted {:?}", current + 1, answer);

        let next = game.take_action(&state, &Action::SubmitAnswer(answer), rng)?;
        let moved = resolved_move(&next)?;
        match moved.rolled {
            Some(_) => {
                println!("Correct!");
                report_move(&format!("Player {}", current + 1), &moved);
            }
            None => println!("Incorrect. The correct answer was: {}.", question.answer),
        }

        state = game.take_action(&next, &Action::FinishResolution, rng)?;
        println!("{}", state);
    }
}

fn resolved_move(state: &GameState) -> Result<MoveRecord> {
    match state.phase() {
        Phase::Resolving { moved } => Ok(*moved),
        other => Err(anyhow!("expected a resolved move, found {}", other.name())),
    }
}

fn report_move(who: &str, moved: &MoveRecord) {
    let rolled = match moved.rolled {
        Some(rolled) => rolled,
        None => return,
    };

    if moved.settled < moved.arrival {
        println!(
            "{} rolled a {} and slid down a snake to {}.",
            who, rolled, moved.settled
        );
    } else if moved.settled > moved.arrival {
        println!(
            "{} rolled a {} and climbed a ladder to {}.",
            who, rolled, moved.settled
        );
    } else {
        println!("{} rolled a {}.", who, rolled);
    }
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}
