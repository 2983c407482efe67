use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::{Path, PathBuf};

use ndarray::Array2;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::letter_set::LetterSet;
use super::util::Point;
use super::BOARD_SIZE;

/// Classic 16 dice. The "Qu" face is stored as a plain `q`.
const DICE: [&str; BOARD_SIZE * BOARD_SIZE] = [
    "aaeegn", "abbjoo", "achops", "affkps", "aoottw", "cimotu", "deilrx", "delrvy",
    "distty", "eeghnw", "eeinsu", "ehrtvw", "eiosst", "elrtty", "himnqu", "hlnnrz",
];

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("could not access board file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("board JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("board must have {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row} must have {expected} cells, found {found}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell ({row},{col}) must hold exactly one letter, found {value:?}")]
    Cell { row: usize, col: usize, value: String },
}

/// On-disk layout of a board: rows of single letter strings
#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
struct RawBoard(Vec<Vec<String>>);

/// Fixed grid of letters. Never changes once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2<char>,
}

impl Board {
    pub fn from_rows(rows: [[char; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self {
            cells: Array2::from_shape_fn((BOARD_SIZE, BOARD_SIZE), |(r, c)| rows[r][c]),
        }
    }

    /// The board shipped with the solver
    pub fn example() -> Self {
        Self::from_rows([
            ['s', 'e', 'f', 'i'],
            ['o', 'c', 'a', 't'],
            ['r', 'e', 'b', 'o'],
            ['c', 't', 'h', 'j'],
        ])
    }

    /// Rolls the dice in a random order and takes a random face of each
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut dice = DICE;
        dice.shuffle(rng);
        let letters = dice
            .iter()
            .map(|die| {
                let faces = die.as_bytes();
                faces[rng.gen_range(0..faces.len())] as char
            })
            .collect::<Vec<_>>();

        Self {
            cells: Array2::from_shape_fn((BOARD_SIZE, BOARD_SIZE), |(r, c)| {
                letters[r * BOARD_SIZE + c]
            }),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BoardError> {
        let path = path.as_ref();
        let mut data = String::new();
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut data))
            .map_err(|source| BoardError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, BoardError> {
        let RawBoard(raw_board) = serde_json::from_str(data)?;
        if raw_board.len() != BOARD_SIZE {
            return Err(BoardError::RowCount {
                expected: BOARD_SIZE,
                found: raw_board.len(),
            });
        }

        let mut rows = [[' '; BOARD_SIZE]; BOARD_SIZE];
        for (i, raw_row) in raw_board.iter().enumerate() {
            if raw_row.len() != BOARD_SIZE {
                return Err(BoardError::ColumnCount {
                    row: i,
                    expected: BOARD_SIZE,
                    found: raw_row.len(),
                });
            }
            for (j, value) in raw_row.iter().enumerate() {
                let mut chars = value.chars();
                rows[i][j] = match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => {
                        return Err(BoardError::Cell {
                            row: i,
                            col: j,
                            value: value.clone(),
                        })
                    }
                };
            }
        }

        Ok(Self::from_rows(rows))
    }

    /// Writes the board in the same layout `from_file` reads
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), BoardError> {
        let path = path.as_ref();
        let io_err = |source| BoardError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(io_err)?;
        let raw = RawBoard(
            self.cells
                .rows()
                .into_iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        );
        serde_json::to_writer(BufWriter::new(file), &raw)?;
        Ok(())
    }

    /// Letter at the point, or None when the point lies off the board
    pub fn get(&self, point: Point) -> Option<char> {
        if point.row < 0 || point.col < 0 {
            return None;
        }
        self.cells
            .get((point.row as usize, point.col as usize))
            .copied()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.get(point).is_some()
    }

    /// Every cell in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> {
        (0..BOARD_SIZE as i32)
            .flat_map(|row| (0..BOARD_SIZE as i32).map(move |col| Point { row, col }))
    }

    /// Distinct letters on the board
    pub fn unique_letters(&self) -> LetterSet {
        self.cells.iter().copied().collect()
    }
}

impl std::ops::Index<Point> for Board {
    type Output = char;

    fn index(&self, index: Point) -> &Self::Output {
        &self.cells[(index.row as usize, index.col as usize)]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in self.cells.rows() {
            let line = row.iter().map(|c| c.to_string()).collect::<Vec<_>>();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
