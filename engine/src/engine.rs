use rand::Rng;

/// Drives a turn-based game of chance. Transitions are fallible so that an
/// engine can reject an action submitted while the state is in the wrong
/// phase, and they draw from an injected generator so that a game replays
/// deterministically under a seeded rng.
pub trait GameEngine {
    type Action;
    type State;
    type Outcome;
    type Error;

    /// Returns the successor state, leaving the input state untouched.
    fn take_action<R: Rng>(
        &self,
        game_state: &Self::State,
        action: &Self::Action,
        rng: &mut R,
    ) -> Result<Self::State, Self::Error>;

    fn player_to_move(&self, game_state: &Self::State) -> usize;
    fn move_number(&self, game_state: &Self::State) -> usize;
    fn terminal_state(&self, game_state: &Self::State) -> Option<Self::Outcome>;
}
