//! Finds every dictionary word that can be traced through orthogonally adjacent
//! cells of a 4x4 letter grid, using each cell at most once per word.

pub mod boggle;
pub mod utils;
