use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::letter_set::LetterSet;

/// Keeps the words that could possibly be traced on a board: at most `max_length`
/// characters long and starting with one of `letters`. Order is preserved and
/// words are not modified.
pub fn filter_words<I, S>(words: I, letters: &LetterSet, max_length: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .filter_map(|word| {
            let word = word.as_ref();
            let first = word.chars().next()?;
            if !letters.contains(first) || word.chars().count() > max_length {
                return None;
            }
            Some(word.to_string())
        })
        .collect()
}

/// Loads a newline delimited word list and filters it with [`filter_words`].
/// A missing or unreadable file gives an empty list.
pub fn load_filtered<P: AsRef<Path>>(path: P, letters: &LetterSet, max_length: usize) -> Vec<String> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            log::warn!("could not open dictionary {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    let reader = BufReader::new(file);
    let mut skipped = 0;
    let lines = reader
        .split(b'\n')
        .map_while(|line| match line {
            Ok(line) => Some(line),
            Err(e) => {
                log::warn!("stopped reading dictionary {}: {}", path.display(), e);
                None
            }
        })
        // Word lists such as words_alpha.txt use CRLF endings
        .map(|mut line| {
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            line
        })
        .filter_map(|line| match String::from_utf8(line) {
            Ok(line) => Some(line),
            Err(_) => {
                skipped += 1;
                None
            }
        });

    let words = filter_words(lines, letters, max_length);
    if skipped > 0 {
        log::warn!(
            "skipped {} lines of {} that are not valid UTF-8",
            skipped,
            path.display()
        );
    }
    log::debug!(
        "kept {} dictionary words starting with {:?}",
        words.len(),
        letters
    );
    words
}
