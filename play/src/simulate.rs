use std::fmt::{self, Display, Formatter};

use anyhow::{anyhow, Result};
use log::info;
use rand::Rng;

use engine::GameEngine;
use ladders::{Action, Engine, GameState, Phase, QuestionSource};

#[derive(Debug)]
pub struct SimulateReport {
    pub games: usize,
    pub wins: [usize; 2],
    pub total_moves: usize,
}

impl SimulateReport {
    pub fn mean_moves(&self) -> f32 {
        if self.games == 0 {
            0.0
        } else {
            self.total_moves as f32 / self.games as f32
        }
    }
}

impl Display for SimulateReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: P1 won {}, P2 won {}, {:.1} moves on average",
            self.games,
            self.wins[0],
            self.wins[1],
            self.mean_moves()
        )
    }
}

/// Plays ungated automated games, both tokens rolling freely, and tallies
/// the outcomes.
pub fn simulate<S, R>(game: &Engine<S>, games: usize, rng: &mut R) -> Result<SimulateReport>
where
    S: QuestionSource,
    R: Rng,
{
    let mut report = SimulateReport {
        games,
        wins: [0, 0],
        total_moves: 0,
    };

    for played in 0..games {
        let mut state = GameState::automated();

        while game.terminal_state(&state).is_none() {
            let action = match state.phase() {
                Phase::AwaitingRoll => Action::AiRoll,
                Phase::Resolving { .. } => Action::FinishResolution,
                other => {
                    return Err(anyhow!(
                        "unexpected phase in an automated game: {}",
                        other.name()
                    ))
                }
            };
            state = game.take_action(&state, &action, rng)?;
        }

        let winner = state
            .winner()
            .ok_or_else(|| anyhow!("a terminal game names a winner"))?;
        report.wins[winner] += 1;
        report.total_moves += state.move_number();

        if (played + 1) % 100 == 0 {
            info!("{} / {} games played", played + 1, games);
        }
    }

    Ok(report)
}
