//! Word lists for Wordle solving
//!
//! The `Dictionary` is loaded once, never mutated, and serves as both the
//! universe of legal guesses and the universe of possible answers.

pub mod loader;

use crate::core::Word;
use crate::error::{Result, WordleError};
use std::path::Path;

/// An ordered, non-empty, immutable list of words
///
/// Order is significant: guess selection scans it front to back and keeps the
/// first of equally good guesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from already validated words
    ///
    /// # Errors
    /// Returns `WordleError::EmptyDictionary` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self> {
        if words.is_empty() {
            return Err(WordleError::EmptyDictionary);
        }
        Ok(Self { words })
    }

    /// Build a dictionary from string slices, skipping anything that is not a word
    ///
    /// # Errors
    /// Returns `WordleError::EmptyDictionary` if no entry survives.
    pub fn from_words(words: &[&str]) -> Result<Self> {
        Self::new(loader::words_from_slice(words))
    }

    /// Load a dictionary file, one candidate per line
    ///
    /// # Errors
    /// Returns `WordleError::Io` if the file cannot be read, or
    /// `WordleError::EmptyDictionary` if it holds no valid words.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(loader::load_from_file(path)?)
    }

    /// Keep only the first `limit` words
    ///
    /// # Errors
    /// Returns `WordleError::EmptyDictionary` if `limit` is zero.
    pub fn truncated(&self, limit: usize) -> Result<Self> {
        Self::new(self.words.iter().take(limit).cloned().collect())
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed dictionary
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up a word by its text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.text() == text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;

    fn temp_dictionary(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wordle_deepest_{}_{name}.txt",
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn empty_dictionary_rejected() {
        assert!(matches!(
            Dictionary::new(Vec::new()),
            Err(WordleError::EmptyDictionary)
        ));
        assert!(matches!(
            Dictionary::from_words(&["nope", "TOOLONG"]),
            Err(WordleError::EmptyDictionary)
        ));
    }

    #[test]
    fn from_words_keeps_order() {
        let dict = Dictionary::from_words(&["cargo", "abide", "dimly"]).unwrap();
        assert_eq!(dict.len(), 3);
        assert!(!dict.is_empty());
        assert_eq!(dict.words()[0].text(), "cargo");
        assert_eq!(dict.words()[2].text(), "dimly");
        assert_eq!(dict.find("abide").map(Word::text), Some("abide"));
        assert!(dict.find("zebra").is_none());
    }

    #[test]
    fn truncated_takes_prefix() {
        let dict = Dictionary::from_words(&["cargo", "abide", "dimly"]).unwrap();
        let small = dict.truncated(2).unwrap();
        assert_eq!(small.len(), 2);
        assert_eq!(small.words()[1].text(), "abide");
        assert_eq!(dict.truncated(10).unwrap().len(), 3);
        assert!(dict.truncated(0).is_err());
    }

    #[test]
    fn load_is_idempotent() {
        let path = temp_dictionary("idempotent", "abide\ncargo\nHELLO\n\ndimly\nx\n");

        let first = Dictionary::load(&path).unwrap();
        let second = Dictionary::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(first.len(), 3);
        assert_eq!(first.len(), second.len());
        let a: HashSet<&str> = first.words().iter().map(Word::text).collect();
        let b: HashSet<&str> = second.words().iter().map(Word::text).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn load_file_without_words_is_empty_dictionary() {
        let path = temp_dictionary("empty", "\nHELLO\nhi\n");
        let result = Dictionary::load(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(WordleError::EmptyDictionary)));
    }
}
