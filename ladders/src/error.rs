use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

use crate::{Phase, Tier};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The operation does not apply to the game's current phase. The state
    /// is left untouched.
    InvalidTransition {
        operation: &'static str,
        phase: &'static str,
    },
    /// An automated step was requested for a player that answers questions.
    NotAiTurn { player: usize },
    /// A tier holds too few questions to honor the sampling contract.
    InsufficientQuestions {
        tier: Tier,
        have: usize,
        need: usize,
    },
    /// A teleport entry leaves the board, ascends where it must descend (or
    /// the reverse), or collides with another entry.
    MalformedTeleport { detail: String },
}

impl Error {
    pub(crate) fn invalid_transition(operation: &'static str, phase: &Phase) -> Self {
        Error::InvalidTransition {
            operation,
            phase: phase.name(),
        }
    }

    pub(crate) fn malformed_teleport(detail: String) -> Self {
        Error::MalformedTeleport { detail }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTransition { operation, phase } => {
                write!(f, "{} is not valid while {}", operation, phase)
            }
            Error::NotAiTurn { player } => {
                write!(
                    f,
                    "player {} must answer a question before rolling",
                    player + 1
                )
            }
            Error::InsufficientQuestions { tier, have, need } => {
                write!(
                    f,
                    "the {:?} tier holds {} questions but {} are required",
                    tier, have, need
                )
            }
            Error::MalformedTeleport { detail } => {
                write!(f, "malformed teleport table: {}", detail)
            }
        }
    }
}

impl StdError for Error {}
