use std::collections::BTreeSet;

/// Set of characters. The first 256 code points are packed into a bitmap,
/// anything above that goes into an ordered set.
#[derive(Clone, PartialEq, Eq)]
pub struct LetterSet {
    // bit is one if letter is in it
    accepted: [u128; 2],
    wide: BTreeSet<char>,
}

impl LetterSet {
    pub fn empty() -> Self {
        Self {
            accepted: [0; 2],
            wide: BTreeSet::new(),
        }
    }

    pub fn contains(&self, letter: char) -> bool {
        let i = letter as usize;
        if i >= 256 {
            return self.wide.contains(&letter);
        }
        (self.accepted[i / 128] & (1 << (i % 128))) != 0
    }

    pub fn insert(&mut self, letter: char) {
        let i = letter as usize;
        if i >= 256 {
            self.wide.insert(letter);
            return;
        }
        self.accepted[i / 128] |= 1 << (i % 128);
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.iter().all(|&l| l == 0) && self.wide.is_empty()
    }

    pub fn len(&self) -> usize {
        let narrow: usize = self.accepted.iter().map(|l| l.count_ones() as usize).sum();
        narrow + self.wide.len()
    }

    /// Letters in code point order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        (0u8..=255)
            .map(char::from)
            .filter(move |&c| self.contains(c))
            .chain(self.wide.iter().copied())
    }
}

impl Default for LetterSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::iter::FromIterator<char> for LetterSet {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = char>,
    {
        let mut tmp = Self::default();
        iter.into_iter().for_each(|l| tmp.insert(l));
        tmp
    }
}

use std::fmt;

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for l in self.iter() {
            write!(f, "{}", l)?;
        }
        write!(f, "]")
    }
}
