#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    use engine::{GameEngine, GameState as GameStateTrait};

    use crate::{
        Action, Board, Catalog, Engine, Error, GameState, Mode, Options, Outcome, Phase, Pool,
        Question, QuestionSource, Tier,
    };

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn standard_engine() -> Engine<Catalog> {
        Engine::standard(&Options::default()).unwrap()
    }

    /// Serves one fixed question forever, so a test controls exactly which
    /// answer is correct.
    struct Scripted(Question);

    impl QuestionSource for Scripted {
        fn draw(&self, _pool: Pool, _rng: &mut dyn RngCore) -> Question {
            self.0.clone()
        }
    }

    fn scripted_engine(board: Board) -> Engine<Scripted> {
        Engine::new(
            board,
            Scripted(Question::new(
                "What has hands but can't clap?",
                "clock",
                Tier::Easy,
            )),
            &Options::default(),
        )
    }

    fn stub_question() -> Question {
        Question::new("a period of ten years", "decade", Tier::Hard)
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.player_position(0), 1);
        assert_eq!(state.player_position(1), 1);
        assert_eq!(state.current_player(), 0);
        assert_eq!(state.move_number(), 1);
        assert_eq!(*state.phase(), Phase::AwaitingRoll);
        assert_eq!(state.outcome(), Outcome::Undecided);
        assert!(state.pending_question().is_none());
    }

    #[test]
    fn test_versus_ai_automates_the_second_player() {
        let state = GameState::new(Mode::VersusAi);
        assert!(!state.player(0).ai);
        assert!(state.player(1).ai);

        let state = GameState::new(Mode::TwoPlayer);
        assert!(!state.player(0).ai);
        assert!(!state.player(1).ai);
    }

    #[test]
    fn test_begin_turn_issues_a_question() {
        let game = standard_engine();
        let mut state = GameState::initial();

        game.begin_turn(&mut state, &mut rng()).unwrap();

        assert!(state.pending_question().is_some());
        assert!(matches!(state.phase(), Phase::AwaitingAnswer { .. }));
    }

    #[test]
    fn test_begin_turn_rejects_a_turn_already_open() {
        let game = standard_engine();
        let mut state = GameState::initial();
        game.begin_turn(&mut state, &mut rng()).unwrap();

        let err = game.begin_turn(&mut state, &mut rng()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidTransition {
                operation: "begin_turn",
                ..
            }
        ));
    }

    #[test]
    fn test_out_of_phase_calls_leave_the_state_untouched() {
        let game = standard_engine();
        let mut state = GameState::initial();
        let before = state.clone();

        assert!(game.submit_answer(&mut state, "clock", &mut rng()).is_err());
        assert!(game.finish_resolution(&mut state).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_a_correct_answer_rolls_and_moves() {
        let game = scripted_engine(Board::standard());
        let mut state = GameState::initial();
        let mut rng = rng();

        game.begin_turn(&mut state, &mut rng).unwrap();
        let moved = game.submit_answer(&mut state, "  Clock ", &mut rng).unwrap();

        let rolled = moved.rolled.unwrap();
        assert!((1..=6).contains(&rolled));
        assert_eq!(moved.arrival, 1 + rolled as usize);
        assert_eq!(moved.settled, Board::standard().resolve(moved.arrival));
        assert_eq!(state.player_position(0), moved.settled);
        assert!(matches!(state.phase(), Phase::Resolving { .. }));
        assert!(state.pending_question().is_none());
    }

    #[test]
    fn test_a_wrong_answer_forfeits_the_move() {
        let game = scripted_engine(Board::standard());
        let mut state = GameState::initial();
        let mut rng = rng();

        game.begin_turn(&mut state, &mut rng).unwrap();
        let moved = game
            .submit_answer(&mut state, "Clockwork", &mut rng)
            .unwrap();

        assert_eq!(moved.rolled, None);
        assert_eq!(state.player_position(0), 1);
        assert!(state.pending_question().is_none());

        game.finish_resolution(&mut state).unwrap();
        assert_eq!(state.current_player(), 1);
        assert_eq!(state.outcome(), Outcome::Undecided);
    }

    #[test]
    fn test_finishing_a_turn_alternates_players() {
        let game = scripted_engine(Board::standard());
        let mut state = GameState::initial();
        let mut rng = rng();

        game.begin_turn(&mut state, &mut rng).unwrap();
        game.submit_answer(&mut state, "wrong", &mut rng).unwrap();
        game.finish_resolution(&mut state).unwrap();
        assert_eq!(state.current_player(), 1);
        assert_eq!(state.move_number(), 2);

        game.begin_turn(&mut state, &mut rng).unwrap();
        game.submit_answer(&mut state, "wrong", &mut rng).unwrap();
        game.finish_resolution(&mut state).unwrap();
        assert_eq!(state.current_player(), 0);
        assert_eq!(state.move_number(), 3);
    }

    #[test]
    fn test_landing_on_a_snake_slides_down() {
        let board = Board::standard();
        let mut state = GameState::with_positions(Mode::TwoPlayer, [95, 40], 0);
        state.issue_question(stub_question());

        let moved = state.relocate(2, &board);
        assert_eq!(moved.arrival, 97);
        assert_eq!(moved.settled, 78);
        assert_eq!(state.player_position(0), 78);

        state.finish_resolution().unwrap();
        assert_eq!(state.outcome(), Outcome::Undecided);
        assert_eq!(state.current_player(), 1);
    }

    #[test]
    fn test_arriving_on_the_last_square_wins() {
        let board = Board::standard();
        let mut state = GameState::with_positions(Mode::TwoPlayer, [94, 40], 0);
        state.issue_question(stub_question());

        let moved = state.relocate(6, &board);
        assert_eq!(moved.arrival, 100);
        assert_eq!(moved.settled, 100);

        state.finish_resolution().unwrap();
        assert_eq!(state.outcome(), Outcome::Won(0));
        assert_eq!(state.winner(), Some(0));
    }

    #[test]
    fn test_an_overshoot_clamps_to_the_last_square() {
        let board = Board::standard();
        let mut state = GameState::with_positions(Mode::TwoPlayer, [98, 1], 0);
        state.issue_question(stub_question());

        let moved = state.relocate(6, &board);
        assert_eq!(moved.arrival, 100);
        assert_eq!(moved.settled, 100);
    }

    #[test]
    fn test_a_teleport_applies_once_per_move() {
        // 4 climbs to 14, and 14 is itself a snake head. The move stops at
        // 14; the snake only fires for a move landing on it directly.
        let board = Board::new(&[(14, 2)], &[(4, 14)]).unwrap();
        let mut state = GameState::with_positions(Mode::TwoPlayer, [1, 1], 0);
        state.issue_question(stub_question());

        let moved = state.relocate(3, &board);
        assert_eq!(moved.arrival, 4);
        assert_eq!(moved.settled, 14);
        assert_eq!(state.player_position(0), 14);
    }

    #[test]
    fn test_a_teleport_to_the_last_square_does_not_win() {
        let board = Board::new(&[], &[(99, 100)]).unwrap();
        let mut state = GameState::with_positions(Mode::TwoPlayer, [98, 1], 0);

        state.issue_question(stub_question());
        let moved = state.relocate(1, &board);
        assert_eq!(moved.arrival, 99);
        assert_eq!(moved.settled, 100);

        state.finish_resolution().unwrap();
        assert_eq!(state.outcome(), Outcome::Undecided);
        assert_eq!(state.current_player(), 1);

        // The other player forfeits a turn, then the leader arrives on the
        // last square for real and wins.
        state.issue_question(stub_question());
        state.stand_still();
        state.finish_resolution().unwrap();

        state.issue_question(stub_question());
        let moved = state.relocate(4, &board);
        assert_eq!(moved.arrival, 100);
        state.finish_resolution().unwrap();
        assert_eq!(state.outcome(), Outcome::Won(0));
    }

    #[test]
    fn test_a_finished_game_rejects_further_play() {
        let game = standard_engine();
        let mut state = GameState::with_positions(Mode::TwoPlayer, [94, 40], 0);
        state.issue_question(stub_question());
        state.relocate(6, game.board());
        state.finish_resolution().unwrap();
        assert_eq!(state.winner(), Some(0));

        assert!(game.begin_turn(&mut state, &mut rng()).is_err());
        assert!(game.submit_answer(&mut state, "clock", &mut rng()).is_err());
        assert!(game.finish_resolution(&mut state).is_err());
        assert!(game.ai_step(&mut state, &mut rng()).is_err());
    }

    #[test]
    fn test_ai_step_moves_without_a_question() {
        let game = standard_engine();
        let mut state = GameState::with_positions(Mode::VersusAi, [1, 1], 1);

        let moved = game.ai_step(&mut state, &mut rng()).unwrap();
        assert!((1..=6).contains(&moved.rolled.unwrap()));

        game.finish_resolution(&mut state).unwrap();
        assert_eq!(state.current_player(), 0);
    }

    #[test]
    fn test_ai_step_rejects_a_human_player() {
        let game = standard_engine();
        let mut state = GameState::new(Mode::VersusAi);

        let err = game.ai_step(&mut state, &mut rng()).unwrap_err();
        assert_eq!(err, Error::NotAiTurn { player: 0 });
    }

    #[test]
    fn test_begin_turn_can_prompt_for_an_automated_player() {
        // The shell may still show a question during the automated player's
        // turn; it is informational and never gates the roll.
        let game = standard_engine();
        let mut state = GameState::with_positions(Mode::VersusAi, [1, 1], 1);

        game.begin_turn(&mut state, &mut rng()).unwrap();
        assert!(state.pending_question().is_some());
    }

    #[test]
    fn test_an_automated_game_runs_to_completion() {
        let game = standard_engine();
        let (winner, moves) = run_automated(&game, 11);
        assert!(winner < 2);
        assert!(moves > 1);
    }

    #[test]
    fn test_automated_games_replay_deterministically() {
        let game = standard_engine();
        assert_eq!(run_automated(&game, 23), run_automated(&game, 23));
    }

    fn run_automated(game: &Engine<Catalog>, seed: u64) -> (usize, usize) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::automated();

        while game.terminal_state(&state).is_none() {
            let action = match state.phase() {
                Phase::AwaitingRoll => Action::AiRoll,
                Phase::Resolving { .. } => Action::FinishResolution,
                other => panic!("unexpected phase in an ungated game: {}", other.name()),
            };
            state = game.take_action(&state, &action, &mut rng).unwrap();
        }

        (state.winner().unwrap(), state.move_number())
    }
}
