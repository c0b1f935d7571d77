//! Wordle word representation
//!
//! A Word stores a 5-letter word along with per-letter counts for feedback calculation.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// Highest multiplicity of a single letter the feedback encoding supports
pub const MAX_LETTER_REPEAT: u8 = 3;

/// A 5-letter Wordle word with letter count tracking
///
/// Stores the word as bytes and keeps a count of each letter for duplicate handling.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
    letter_counts: [u8; 26],
    max_repeat: u8,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word must contain only lowercase letters a-z")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is taken as-is: uppercase letters are rejected rather than folded,
    /// so that dictionary filtering stays case-sensitive.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains anything other than `a`-`z`
    ///
    /// # Examples
    /// ```
    /// use wordle_deepest::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("CRANE").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letter_counts = [0u8; 26];
        for &ch in &chars {
            letter_counts[usize::from(ch - b'a')] += 1;
        }

        let max_repeat = letter_counts.iter().copied().max().unwrap_or(0);

        Ok(Self {
            text,
            chars,
            letter_counts,
            max_repeat,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Per-letter counts indexed by `letter - b'a'`
    #[inline]
    pub(crate) const fn letter_counts(&self) -> &[u8; 26] {
        &self.letter_counts
    }

    /// Highest number of times any single letter occurs
    #[inline]
    #[must_use]
    pub const fn max_repeat(&self) -> u8 {
        self.max_repeat
    }

    /// The most repeated letter and how often it occurs
    ///
    /// Ties go to the alphabetically first letter.
    #[must_use]
    pub fn most_repeated(&self) -> (u8, u8) {
        let (idx, &count) = self
            .letter_counts
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|&(_, count)| *count)
            .unwrap_or((0, &0));
        (b'a' + idx as u8, count)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
