// 4x4
pub mod board;
pub mod dictionary;
pub mod letter_set;
pub mod util;
pub mod word_search;

pub const BOARD_SIZE: usize = 4;

/// Longest word that can be traced: one letter per cell
pub const MAX_WORD_LENGTH: usize = BOARD_SIZE * BOARD_SIZE;
