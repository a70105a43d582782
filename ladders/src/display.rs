use std::fmt::{self, Display, Formatter};

use crate::constants::{BOARD_SQUARES, BOARD_WIDTH};
use crate::{Board, GameState, Phase};

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f)?;

        for row in (0..BOARD_SQUARES / BOARD_WIDTH).rev() {
            border(f)?;
            for col in 0..BOARD_WIDTH {
                if col == 0 {
                    write!(f, "   |")?;
                }

                let square = if row % 2 == 0 {
                    row * BOARD_WIDTH + col + 1
                } else {
                    row * BOARD_WIDTH + (BOARD_WIDTH - col)
                };

                let p1 = self.player_position(0) == square;
                let p2 = self.player_position(1) == square;
                match (p1, p2) {
                    (true, true) => write!(f, "1,2|")?,
                    (true, false) => write!(f, " 1 |")?,
                    (false, true) => write!(f, " 2 |")?,
                    (false, false) => write!(f, "{:^3}|", square)?,
                }
            }
            writeln!(f)?;
        }
        border(f)?;

        let tag = |id: usize| if self.player(id).ai { " (AI)" } else { "" };
        writeln!(
            f,
            "  P1: {}{}  P2: {}{}  Move {}",
            self.player_position(0),
            tag(0),
            self.player_position(1),
            tag(1),
            self.move_number()
        )?;

        match self.phase() {
            Phase::AwaitingRoll => writeln!(f, "  Player {} to move", self.current_player() + 1),
            Phase::AwaitingAnswer { .. } => {
                writeln!(f, "  Player {} is answering", self.current_player() + 1)
            }
            Phase::Resolving { .. } => {
                writeln!(f, "  Player {} is moving", self.current_player() + 1)
            }
            Phase::GameOver { winner } => writeln!(f, "  Player {} wins!", winner + 1),
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Snakes:  {}", entries(self.snakes()))?;
        write!(f, "Ladders: {}", entries(self.ladders()))
    }
}

fn border(f: &mut Formatter<'_>) -> fmt::Result {
    for col in 0..BOARD_WIDTH {
        if col == 0 {
            write!(f, "   +")?;
        }
        write!(f, "---+")?;
    }
    writeln!(f)
}

fn entries(pairs: impl Iterator<Item = (usize, usize)>) -> String {
    let mut pairs = pairs.collect::<Vec<_>>();
    pairs.sort_unstable();
    pairs
        .iter()
        .map(|(source, target)| format!("{} -> {}", source, target))
        .collect::<Vec<_>>()
        .join(", ")
}
