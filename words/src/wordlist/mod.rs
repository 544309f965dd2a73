//! Compiled-in wordlists and lookup.

mod english;

use std::cmp::Ordering;
use std::fmt;

use crate::WordsError;

/// Number of words in every supported wordlist.
pub const WORDLIST_LEN: usize = 2048;

/// A strictly sorted list of 2,048 words; a word's position is its 11-bit value.
#[derive(Clone, Copy)]
pub struct Wordlist {
    words: &'static [&'static str; WORDLIST_LEN],
}

impl Wordlist {
    pub(crate) fn english() -> Self {
        Self {
            words: &english::WORDS,
        }
    }

    /// The word at `index`. Panics if `index >= 2048`.
    pub fn word(&self, index: u16) -> &'static str {
        self.words[usize::from(index)]
    }

    /// Find the index of `word`.
    ///
    /// Binary search over `[lo, hi)`; the list is small and lookups rare, so
    /// no reverse map is kept.
    pub fn lookup(&self, word: &str) -> Result<u16, WordsError> {
        let mut lo = 0;
        let mut hi = self.words.len();
        while lo < hi {
            let mid = (lo + hi) / 2;
            match word.cmp(self.words[mid]) {
                Ordering::Equal => return Ok(mid as u16),
                Ordering::Less => hi = mid,
                Ordering::Greater => lo = mid + 1,
            }
        }
        Err(WordsError::UnknownWord(word.to_string()))
    }

    /// Whether `word` is in the list.
    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_ok()
    }

    pub fn words(&self) -> &'static [&'static str] {
        self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> {
        self.words.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Debug for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wordlist")
            .field("first", &self.words[0])
            .field("len", &self.words.len())
            .finish()
    }
}
