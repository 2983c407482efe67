use std::slice::Iter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Directions in the order the search tries them
    pub fn iter() -> Iter<'static, Direction> {
        static DIRS: [Direction; 4] = [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ];
        DIRS.iter()
    }

    /// (row, col) offset of a single step
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Self::Left => (0, -1),
            Self::Right => (0, 1),
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
        }
    }
}

/// A cell coordinate. Signed so that a step off the edge of the board is still
/// representable and can be rejected by the bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the neighbouring point in the given direction. No bounds checking.
    pub fn step(&self, dir: Direction) -> Point {
        let (dr, dc) = dir.delta();
        Point {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Checks if the two points share an edge
    pub fn is_adjacent(&self, other: &Point) -> bool {
        let dr = (self.row - other.row).abs();
        let dc = (self.col - other.col).abs();
        dr + dc == 1
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
