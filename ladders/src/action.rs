use std::fmt::{self, Display, Formatter};

/// A single engine invocation from the shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    BeginTurn,
    SubmitAnswer(String),
    FinishResolution,
    AiRoll,
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Action::BeginTurn => write!(f, "begin"),
            Action::SubmitAnswer(text) => write!(f, "answer {}", text),
            Action::FinishResolution => write!(f, "finish"),
            Action::AiRoll => write!(f, "roll"),
        }
    }
}
