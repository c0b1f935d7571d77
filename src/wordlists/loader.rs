//! Word list loading utilities
//!
//! A line is accepted iff it is exactly five lowercase ASCII letters. Lines are
//! split on `\n` only: nothing is trimmed (a trailing `\r` included) and nothing
//! is deduplicated.

use crate::core::Word;
use crate::error::{Result, WordleError};
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// Returns every accepted line in file order, silently skipping the rest.
///
/// # Errors
///
/// Returns `WordleError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_deepest::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordleError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(words_from_lines(&content))
}

/// Filter text into words, one candidate per line
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content.split('\n').filter_map(|line| Word::new(line).ok()).collect()
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_deepest::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["abide", "cargo", "nope"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
