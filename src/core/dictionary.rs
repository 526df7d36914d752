//! Word validation capability and the bundled word list.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;
use rand::seq::IndexedRandom;
use rand::RngCore;

use crate::core::config::is_valid_length;
use crate::core::scoring::normalize_word;

/// Small dictionary shipped with the crate, one word per line.
pub const BUILTIN_WORDS: &str = include_str!("words.txt");

/// Answers whether a string is a playable word.
///
/// Lookups are case-insensitive and must answer synchronously, so an
/// implementation is expected to be fully loaded before a game starts.
pub trait WordOracle: Send + Sync {
    fn is_valid_word(&self, word: &str) -> bool;

    /// A uniformly chosen word with exactly `len` letters, if any exists.
    fn random_word_of_length(&self, len: usize, rng: &mut dyn RngCore) -> Option<String>;
}

/// In-memory dictionary indexed by word length.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: BTreeSet<String>,
    by_length: BTreeMap<usize, Vec<String>>,
}

impl WordList {
    /// Build a list from arbitrary strings. Entries are normalized and
    /// anything that is not 3 to 10 ASCII letters is skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for word in words {
            list.insert(word.as_ref());
        }
        list
    }

    /// The bundled word list.
    pub fn builtin() -> Self {
        Self::from_words(BUILTIN_WORDS.lines())
    }

    /// Read one word per line. Blank lines and `#` comments are ignored.
    #[cfg(feature = "std")]
    pub fn from_reader<R: std::io::BufRead>(reader: R) -> std::io::Result<Self> {
        let mut list = Self::default();
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            list.insert(line);
        }
        Ok(list)
    }

    /// Add a single word; returns `false` if it was skipped or already known.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = normalize_word(word);
        if !is_valid_length(word.chars().count()) || !word.chars().all(|c| c.is_ascii_uppercase()) {
            return false;
        }
        if !self.words.insert(word.clone()) {
            return false;
        }
        self.by_length.entry(word.len()).or_default().push(word);
        true
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words with exactly `len` letters, in insertion order.
    pub fn words_of_length(&self, len: usize) -> &[String] {
        self.by_length.get(&len).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Words whose length lies in `min..=max`.
    pub fn words_between(&self, min: usize, max: usize) -> impl Iterator<Item = &str> + '_ {
        self.by_length
            .iter()
            .filter(move |(len, _)| (min..=max).contains(*len))
            .flat_map(|(_, words)| words.iter().map(String::as_str))
    }
}

impl WordOracle for WordList {
    fn is_valid_word(&self, word: &str) -> bool {
        self.words.contains(&normalize_word(word))
    }

    fn random_word_of_length(&self, len: usize, rng: &mut dyn RngCore) -> Option<String> {
        self.words_of_length(len).choose(rng).cloned()
    }
}
