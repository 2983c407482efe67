use std::collections::HashSet;

use super::board::Board;
use super::util::{Direction, Point};
use super::MAX_WORD_LENGTH;

/*
    Depth first search for a single word on the board. Every branch receives its own
    copy of the visited cells and of the letters traced so far, so backtracking into a
    sibling direction never sees what a failed branch visited.

    A branch is abandoned as soon as the traced letters stop being a prefix of the
    word, which keeps the branching factor at 3 or less after the first step.
*/

/// Cells used by the current attempt, in the order they were visited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Visited {
    points: Vec<Point>,
}

impl Visited {
    pub fn start(point: Point) -> Self {
        Self {
            points: vec![point],
        }
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Copy of this path with one more point on the end
    pub fn with(&self, point: Point) -> Self {
        let mut tmp = self.clone();
        tmp.points.push(point);
        tmp
    }

    pub fn into_path(self) -> Vec<Point> {
        self.points
    }
}

/// What to do when a word can be traced from more than one starting cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Report the word once for every starting cell it can be traced from
    #[default]
    EveryStart,
    /// Report each distinct word once
    Unique,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatch {
    pub word: String,
    /// Cells spelling the word, first letter first
    pub path: Vec<Point>,
}

/// Finds every candidate that can be traced on the board. A word is reported once for
/// each starting cell it can be traced from.
pub fn find_words(board: &Board, candidates: &[String]) -> Vec<String> {
    find_words_with(board, candidates, MatchPolicy::EveryStart)
}

pub fn find_words_with(board: &Board, candidates: &[String], policy: MatchPolicy) -> Vec<String> {
    find_matches_with(board, candidates, policy)
        .into_iter()
        .map(|m| m.word)
        .collect()
}

pub fn find_matches(board: &Board, candidates: &[String]) -> Vec<WordMatch> {
    find_matches_with(board, candidates, MatchPolicy::EveryStart)
}

/// Scans candidates in order and, for each, every starting cell in row-major order
pub fn find_matches_with(
    board: &Board,
    candidates: &[String],
    policy: MatchPolicy,
) -> Vec<WordMatch> {
    let mut matches = Vec::new();
    let mut seen = HashSet::new();

    for word in candidates {
        if policy == MatchPolicy::Unique && seen.contains(word.as_str()) {
            continue;
        }
        for start in board.points() {
            if let Some(path) = trace_word(board, word, start) {
                matches.push(WordMatch {
                    word: word.clone(),
                    path,
                });
                if policy == MatchPolicy::Unique {
                    seen.insert(word.as_str());
                    break;
                }
            }
        }
    }

    matches
}

/// Tries to spell `word` starting at `start`. Returns the cells used on success.
pub fn trace_word(board: &Board, word: &str, start: Point) -> Option<Vec<Point>> {
    let c = board.get(start)?;

    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (None, _) => return None,
        // Single letter words need no search
        (Some(first), None) => return (first == c).then(|| vec![start]),
        _ => {}
    }

    let partial = c.to_string();
    if !word.starts_with(&partial) {
        return None;
    }

    let visited = Visited::start(start);
    Direction::iter()
        .find_map(|&dir| extend(board, word, start, dir, &visited, &partial))
        .map(Visited::into_path)
}

/// Takes one step from `last` and keeps going while the letters still spell a prefix
/// of `word`
fn extend(
    board: &Board,
    word: &str,
    last: Point,
    dir: Direction,
    visited: &Visited,
    partial: &str,
) -> Option<Visited> {
    let point = last.step(dir);

    // Off the board
    let c = board.get(point)?;

    // A path may not cross itself
    if visited.contains(&point) {
        return None;
    }

    let visited = visited.with(point);
    if visited.len() > MAX_WORD_LENGTH {
        return None;
    }

    let mut partial = partial.to_string();
    partial.push(c);

    if partial.len() > word.len() {
        return None;
    }
    if partial.len() == word.len() {
        return (partial == word).then_some(visited);
    }
    if !word.starts_with(&partial) {
        return None;
    }

    Direction::iter().find_map(|&next| extend(board, word, point, next, &visited, &partial))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn p(row: i32, col: i32) -> Point {
        Point::new(row, col)
    }

    #[test]
    fn test_so() {
        let board = Board::example();
        assert_eq!(trace_word(&board, "so", p(0, 0)), Some(vec![p(0, 0), p(1, 0)]));
        assert_eq!(find_words(&board, &words(&["so"])), vec!["so"]);
    }

    #[test]
    fn test_longer_paths() {
        let board = Board::example();
        assert_eq!(
            trace_word(&board, "soca", p(0, 0)),
            Some(vec![p(0, 0), p(1, 0), p(1, 1), p(1, 2)])
        );
        assert_eq!(
            trace_word(&board, "sore", p(0, 0)),
            Some(vec![p(0, 0), p(1, 0), p(2, 0), p(2, 1)])
        );
        assert_eq!(
            trace_word(&board, "sec", p(0, 0)),
            Some(vec![p(0, 0), p(0, 1), p(1, 1)])
        );
        assert_eq!(
            trace_word(&board, "eco", p(0, 1)),
            Some(vec![p(0, 1), p(1, 1), p(1, 0)])
        );
        assert_eq!(
            trace_word(&board, "eco", p(2, 1)),
            Some(vec![p(2, 1), p(1, 1), p(1, 0)])
        );
    }

    #[test]
    fn test_duplicates_per_start_cell() {
        let board = Board::example();
        let found = find_words(&board, &words(&["eco", "so"]));
        assert_eq!(found, vec!["eco", "eco", "so"]);
    }

    #[test]
    fn test_unique_policy() {
        let board = Board::example();
        let found = find_words_with(&board, &words(&["eco", "so", "eco"]), MatchPolicy::Unique);
        assert_eq!(found, vec!["eco", "so"]);
    }

    #[test]
    fn test_single_letters() {
        let board = Board::example();
        for start in board.points() {
            let word = board[start].to_string();
            assert_eq!(trace_word(&board, &word, start), Some(vec![start]));
        }
        let found = find_words(&board, &words(&["e", "o", "x"]));
        assert_eq!(found, vec!["e", "e", "o", "o"]);
    }

    #[test]
    fn test_not_adjacent() {
        let board = Board::example();
        // f is never next to an s
        assert!(find_words(&board, &words(&["sf", "sfi"])).is_empty());
        // i and j are in opposite corners
        assert!(find_words(&board, &words(&["ij"])).is_empty());
    }

    #[test]
    fn test_no_revisit() {
        let board = Board::example();
        // s-o-s would have to step back onto the first s
        assert!(find_words(&board, &words(&["sos", "soso"])).is_empty());
    }

    #[test]
    fn test_no_diagonals() {
        let board = Board::example();
        // s at (0,0) and c at (1,1) only touch at a corner
        assert!(find_words(&board, &words(&["sc"])).is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        let board = Board::example();
        assert!(find_words(&board, &[]).is_empty());
        assert!(find_words(&board, &words(&[""])).is_empty());
    }

    #[test]
    fn test_foreign_letters_never_match() {
        let board = Board::example();
        assert!(find_words(&board, &words(&["sox", "zzz", "SO"])).is_empty());
    }

    #[test]
    fn test_length_cap() {
        let board = Board::from_rows([['a'; 4]; 4]);
        let longest = "a".repeat(MAX_WORD_LENGTH);
        let path = trace_word(&board, &longest, p(0, 0)).expect("snake through every cell");
        assert_eq!(path.len(), MAX_WORD_LENGTH);

        let too_long = "a".repeat(MAX_WORD_LENGTH + 1);
        assert_eq!(trace_word(&board, &too_long, p(0, 0)), None);
    }

    #[test]
    fn test_paths_are_valid() {
        let board = Board::example();
        let candidates = words(&[
            "so", "sec", "soca", "sore", "eco", "cab", "bat", "tab", "act", "fact", "feca", "oat",
            "boa", "both", "hot", "ecot",
        ]);
        let matches = find_matches(&board, &candidates);
        assert!(!matches.is_empty());

        for m in &matches {
            let spelled = m.path.iter().map(|&p| board[p]).collect::<String>();
            assert_eq!(spelled, m.word);
            for p in &m.path {
                assert!(board.contains(*p));
            }
            for pair in m.path.windows(2) {
                assert!(pair[0].is_adjacent(&pair[1]), "{:?}", m);
            }
            let distinct = m.path.iter().collect::<HashSet<_>>();
            assert_eq!(distinct.len(), m.path.len(), "{:?}", m);
        }
    }

    #[test]
    fn test_idempotent() {
        let board = Board::example();
        let candidates = words(&["so", "eco", "e", "sore", "cab", "sos"]);
        let first = find_words(&board, &candidates);
        let second = find_words(&board, &candidates);
        assert_eq!(first, second);
    }

    #[test]
    fn test_visited_copies() {
        let start = Visited::start(p(0, 0));
        let branch = start.with(p(0, 1));
        assert_eq!(start.len(), 1);
        assert_eq!(branch.len(), 2);
        assert!(!start.contains(&p(0, 1)));
        assert!(branch.contains(&p(0, 1)));
    }
}
