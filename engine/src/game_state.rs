use std::fmt::Debug;
use std::hash::Hash;

/// A complete description of a game in progress: token positions, whose turn
/// it is, and any pending prompt the current player must clear before moving.
pub trait GameState: Hash + Clone + Debug {
    fn initial() -> Self;
}
