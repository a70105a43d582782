use engine::GameEngine;
use log::debug;
use rand::Rng;

use crate::constants::DICE_SIDES;
use crate::{
    Action, Board, Catalog, DifficultySelector, Error, GameState, MoveRecord, Options, Outcome,
    Phase, QuestionSource,
};

/// Owns the immutable collaborators of a game (board topology, question
/// source, difficulty policy) and applies turns to a `GameState` handed in
/// by the shell. The state is a plain value, so any number of games can run
/// against one engine.
pub struct Engine<S = Catalog> {
    board: Board,
    questions: S,
    selector: DifficultySelector,
}

impl Engine<Catalog> {
    /// The standard board with the built-in question catalog.
    pub fn standard(options: &Options) -> Result<Self, Error> {
        Ok(Self::new(
            Board::standard(),
            Catalog::builtin(options.hard_sample_size)?,
            options,
        ))
    }
}

impl<S: QuestionSource> Engine<S> {
    pub fn new(board: Board, questions: S, options: &Options) -> Self {
        Self {
            board,
            questions,
            selector: DifficultySelector::new(options),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Opens the current player's turn by drawing the question that gates
    /// their roll.
    pub fn begin_turn<R: Rng>(&self, state: &mut GameState, rng: &mut R) -> Result<(), Error> {
        if !matches!(state.phase(), Phase::AwaitingRoll) {
            return Err(Error::invalid_transition("begin_turn", state.phase()));
        }

        let pool = self.selector.pool_for(state);
        let question = self.questions.draw(pool, rng);
        debug!(
            "drew a {:?} question from the {:?} pool for player {}",
            question.tier,
            pool,
            state.current_player() + 1
        );
        state.issue_question(question);

        Ok(())
    }

    /// Checks the submitted answer. A correct answer rolls the dice and
    /// moves the token; a wrong answer forfeits the move. Either way the
    /// pending question is cleared and the turn heads into resolution.
    pub fn submit_answer<R: Rng>(
        &self,
        state: &mut GameState,
        submitted: &str,
        rng: &mut R,
    ) -> Result<MoveRecord, Error> {
        let correct = match state.phase() {
            Phase::AwaitingAnswer { question } => question.matches(submitted),
            other => return Err(Error::invalid_transition("submit_answer", other)),
        };

        let moved = if correct {
            let steps = roll_die(rng);
            debug!(
                "player {} answered correctly and rolled a {}",
                state.current_player() + 1,
                steps
            );
            state.relocate(steps, &self.board)
        } else {
            debug!("player {} answered incorrectly", state.current_player() + 1);
            state.stand_still()
        };

        Ok(moved)
    }

    /// Rolls for an automated player with no question gate. The gate
    /// asymmetry is the shipped behavior: only humans answer for their own
    /// movement.
    pub fn ai_step<R: Rng>(&self, state: &mut GameState, rng: &mut R) -> Result<MoveRecord, Error> {
        if !matches!(state.phase(), Phase::AwaitingRoll) {
            return Err(Error::invalid_transition("ai_step", state.phase()));
        }

        let player = state.current_player();
        if !state.player(player).ai {
            return Err(Error::NotAiTurn { player });
        }

        let steps = roll_die(rng);
        debug!("automated player {} rolled a {}", player + 1, steps);

        Ok(state.relocate(steps, &self.board))
    }

    /// Settles the turn: a token resting on the last square wins, otherwise
    /// play passes to the other player.
    pub fn finish_resolution(&self, state: &mut GameState) -> Result<(), Error> {
        state.finish_resolution()
    }
}

fn roll_die<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(1..=DICE_SIDES)
}

impl<S: QuestionSource> GameEngine for Engine<S> {
    type Action = Action;
    type State = GameState;
    type Outcome = Outcome;
    type Error = Error;

    fn take_action<R: Rng>(
        &self,
        game_state: &GameState,
        action: &Action,
        rng: &mut R,
    ) -> Result<GameState, Error> {
        let mut next = game_state.clone();

        match action {
            Action::BeginTurn => {
                self.begin_turn(&mut next, rng)?;
            }
            Action::SubmitAnswer(text) => {
                self.submit_answer(&mut next, text, rng)?;
            }
            Action::AiRoll => {
                self.ai_step(&mut next, rng)?;
            }
            Action::FinishResolution => {
                self.finish_resolution(&mut next)?;
            }
        }

        Ok(next)
    }

    fn player_to_move(&self, game_state: &GameState) -> usize {
        game_state.current_player()
    }

    fn move_number(&self, game_state: &GameState) -> usize {
        game_state.move_number()
    }

    fn terminal_state(&self, game_state: &GameState) -> Option<Outcome> {
        game_state.winner().map(Outcome::Won)
    }
}
