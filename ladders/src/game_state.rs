use crate::constants::{BOARD_SQUARES, FIRST_SQUARE};
use crate::{Board, Error, Question};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    TwoPlayer,
    VersusAi,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlayerState {
    pub position: usize,
    pub ai: bool,
}

/// The resolved result of one turn, carried through the `Resolving` phase so
/// the shell can narrate it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    /// Dice value, or `None` when the turn was forfeited on a wrong answer.
    pub rolled: Option<u32>,
    /// The clamped square the token arrived on before teleports. Win
    /// detection reads this square, never the teleport target.
    pub arrival: usize,
    /// The square the token settled on after at most one teleport.
    pub settled: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    AwaitingRoll,
    AwaitingAnswer { question: Question },
    Resolving { moved: MoveRecord },
    GameOver { winner: usize },
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::AwaitingRoll => "awaiting a roll",
            Phase::AwaitingAnswer { .. } => "awaiting an answer",
            Phase::Resolving { .. } => "resolving a move",
            Phase::GameOver { .. } => "the game is over",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Undecided,
    Won(usize),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    players: [PlayerState; 2],
    to_move: usize,
    move_number: usize,
    mode: Mode,
    phase: Phase,
}

impl engine::GameState for GameState {
    fn initial() -> Self {
        GameState::new(Mode::TwoPlayer)
    }
}

impl GameState {
    pub fn new(mode: Mode) -> Self {
        Self::from_parts(mode, [FIRST_SQUARE; 2], ai_flags(mode), 0)
    }

    /// Both tokens automated; used to run ungated exhibition games.
    pub fn automated() -> Self {
        Self::from_parts(Mode::VersusAi, [FIRST_SQUARE; 2], [true, true], 0)
    }

    /// Rebuilds a game mid-flight from known token positions.
    pub fn with_positions(mode: Mode, positions: [usize; 2], to_move: usize) -> Self {
        assert!(to_move < 2, "player id must be 0 or 1");
        for position in positions {
            assert!(
                (FIRST_SQUARE..=BOARD_SQUARES).contains(&position),
                "token position {} leaves the board",
                position
            );
        }

        Self::from_parts(mode, positions, ai_flags(mode), to_move)
    }

    fn from_parts(mode: Mode, positions: [usize; 2], ai: [bool; 2], to_move: usize) -> Self {
        GameState {
            players: [
                PlayerState {
                    position: positions[0],
                    ai: ai[0],
                },
                PlayerState {
                    position: positions[1],
                    ai: ai[1],
                },
            ],
            to_move,
            move_number: 1,
            mode,
            phase: Phase::AwaitingRoll,
        }
    }

    pub fn current_player(&self) -> usize {
        self.to_move
    }

    pub fn opponent(&self) -> usize {
        1 - self.to_move
    }

    pub fn player(&self, id: usize) -> PlayerState {
        self.players[id]
    }

    pub fn player_position(&self, id: usize) -> usize {
        self.players[id].position
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn move_number(&self) -> usize {
        self.move_number
    }

    pub fn pending_question(&self) -> Option<&Question> {
        match &self.phase {
            Phase::AwaitingAnswer { question } => Some(question),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::GameOver { winner } => Outcome::Won(winner),
            _ => Outcome::Undecided,
        }
    }

    pub fn winner(&self) -> Option<usize> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub(crate) fn issue_question(&mut self, question: Question) {
        debug_assert!(matches!(self.phase, Phase::AwaitingRoll));
        self.phase = Phase::AwaitingAnswer { question };
    }

    /// Moves the current token forward, clamped to the last square, then
    /// applies a single teleport lookup to wherever it arrived.
    pub(crate) fn relocate(&mut self, steps: u32, board: &Board) -> MoveRecord {
        let player = &mut self.players[self.to_move];
        let arrival = (player.position + steps as usize).min(BOARD_SQUARES);
        let settled = board.resolve(arrival);
        player.position = settled;

        let moved = MoveRecord {
            rolled: Some(steps),
            arrival,
            settled,
        };
        self.phase = Phase::Resolving { moved };
        moved
    }

    /// A forfeited turn: the token stays put and the turn still resolves.
    pub(crate) fn stand_still(&mut self) -> MoveRecord {
        let position = self.players[self.to_move].position;
        let moved = MoveRecord {
            rolled: None,
            arrival: position,
            settled: position,
        };
        self.phase = Phase::Resolving { moved };
        moved
    }

    pub(crate) fn finish_resolution(&mut self) -> Result<(), Error> {
        let moved = match &self.phase {
            Phase::Resolving { moved } => *moved,
            other => return Err(Error::invalid_transition("finish_resolution", other)),
        };

        if moved.arrival == BOARD_SQUARES {
            self.phase = Phase::GameOver {
                winner: self.to_move,
            };
        } else {
            self.to_move = 1 - self.to_move;
            self.move_number += 1;
            self.phase = Phase::AwaitingRoll;
        }

        Ok(())
    }
}

fn ai_flags(mode: Mode) -> [bool; 2] {
    match mode {
        Mode::TwoPlayer => [false, false],
        Mode::VersusAi => [false, true],
    }
}
