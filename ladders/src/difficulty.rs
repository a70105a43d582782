use common::logistic;

use crate::{GameState, Mode, Options, Pool};

/// Chooses which question pool gates the current player's roll.
///
/// An automated opponent grades itself on a win-likelihood estimate: when
/// the estimate drops below the assist threshold its own gate eases, a
/// deliberate rubber-banding policy. A human is graded on raw lead instead:
/// trailing badly earns the easy pool, leading comfortably earns the hard
/// pool, and anything in between draws from a blend of the two tiers.
#[derive(Clone, Debug)]
pub struct DifficultySelector {
    trailing_lead: i32,
    leading_lead: i32,
    ai_assist_threshold: f32,
}

impl DifficultySelector {
    pub fn new(options: &Options) -> Self {
        Self {
            trailing_lead: options.trailing_lead,
            leading_lead: options.leading_lead,
            ai_assist_threshold: options.ai_assist_threshold,
        }
    }

    pub fn pool_for(&self, state: &GameState) -> Pool {
        let current = state.player(state.current_player());
        let opponent = state.player(state.opponent());

        if state.mode() == Mode::VersusAi && current.ai {
            let estimate = win_estimate(current.position, opponent.position);
            if estimate < self.ai_assist_threshold {
                Pool::Easy
            } else {
                Pool::Hard
            }
        } else {
            // Both thresholds are exclusive; a lead sitting exactly on one
            // still draws from the blended pool.
            let lead = current.position as i32 - opponent.position as i32;
            if lead < self.trailing_lead {
                Pool::Easy
            } else if lead > self.leading_lead {
                Pool::Hard
            } else {
                Pool::Blended
            }
        }
    }
}

/// Logistic estimate of the chance that the token at `own` outruns the token
/// at `opponent`, driven purely by the position gap. A heuristic score, not
/// an exact probability.
pub fn win_estimate(own: usize, opponent: usize) -> f32 {
    logistic(own as f32 - opponent as f32)
}
