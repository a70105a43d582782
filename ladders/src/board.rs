use std::collections::HashMap;

use crate::constants::{BOARD_SQUARES, DEFAULT_LADDERS, DEFAULT_SNAKES, FIRST_SQUARE};
use crate::Error;

/// The teleport topology of the board: snakes slide a token down, ladders
/// carry it up. Immutable once built; games share it read-only.
#[derive(Clone, Debug, Default)]
pub struct Board {
    snakes: HashMap<usize, usize>,
    ladders: HashMap<usize, usize>,
}

impl Board {
    pub fn new(snakes: &[(usize, usize)], ladders: &[(usize, usize)]) -> Result<Self, Error> {
        let mut board = Board::default();

        for &(source, target) in snakes {
            check_entry(source, target)?;
            if target >= source {
                return Err(Error::malformed_teleport(format!(
                    "snake {} -> {} does not descend",
                    source, target
                )));
            }
            if board.snakes.insert(source, target).is_some() {
                return Err(duplicate_source(source));
            }
        }

        for &(source, target) in ladders {
            check_entry(source, target)?;
            if target <= source {
                return Err(Error::malformed_teleport(format!(
                    "ladder {} -> {} does not climb",
                    source, target
                )));
            }
            if board.ladders.insert(source, target).is_some() || board.snakes.contains_key(&source)
            {
                return Err(duplicate_source(source));
            }
        }

        // A pair of entries pointing at each other would shuttle a token
        // between two squares on alternating moves.
        for (&source, &target) in board.snakes.iter().chain(board.ladders.iter()) {
            if board.peek(target) == Some(source) {
                return Err(Error::malformed_teleport(format!(
                    "squares {} and {} teleport to each other",
                    source, target
                )));
            }
        }

        Ok(board)
    }

    pub fn standard() -> Self {
        Self::new(DEFAULT_SNAKES, DEFAULT_LADDERS).expect("the standard tables are well formed")
    }

    /// Applies at most one teleport. A target that is itself the source of
    /// another teleport stays where it is; it only fires for a move that
    /// lands on it directly.
    pub fn resolve(&self, position: usize) -> usize {
        self.peek(position).unwrap_or(position)
    }

    pub fn snakes(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.snakes.iter().map(|(&source, &target)| (source, target))
    }

    pub fn ladders(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.ladders.iter().map(|(&source, &target)| (source, target))
    }

    fn peek(&self, position: usize) -> Option<usize> {
        self.snakes
            .get(&position)
            .or_else(|| self.ladders.get(&position))
            .copied()
    }
}

fn check_entry(source: usize, target: usize) -> Result<(), Error> {
    let on_board = |square| (FIRST_SQUARE..=BOARD_SQUARES).contains(&square);
    if !on_board(source) || !on_board(target) {
        return Err(Error::malformed_teleport(format!(
            "teleport {} -> {} leaves the board",
            source, target
        )));
    }
    if source == BOARD_SQUARES {
        return Err(Error::malformed_teleport(
            "the last square cannot start a teleport".to_string(),
        ));
    }
    Ok(())
}

fn duplicate_source(source: usize) -> Error {
    Error::malformed_teleport(format!("square {} holds more than one teleport", source))
}
