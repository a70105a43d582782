/// Linear board squares, numbered from 1. The first token to arrive on the
/// last square wins.
pub const BOARD_SQUARES: usize = 100;
pub const FIRST_SQUARE: usize = 1;
pub const BOARD_WIDTH: usize = 10;
pub const DICE_SIDES: u32 = 6;

pub const DEFAULT_SNAKES: &[(usize, usize)] = &[
    (32, 10),
    (34, 6),
    (48, 26),
    (62, 18),
    (95, 56),
    (97, 78),
];

pub const DEFAULT_LADDERS: &[(usize, usize)] = &[
    (1, 38),
    (4, 14),
    (8, 30),
    (21, 42),
    (28, 74),
    (50, 67),
    (71, 92),
    (88, 99),
];
