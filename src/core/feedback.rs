//! Wordle feedback calculation and representation
//!
//! Feedback encodes the per-letter outcome of a guess using base-3 encoding:
//! - 0 = Absent (letter not in word, or every copy already accounted for)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Exact (letter in correct position)
//!
//! The feedback is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::word::{MAX_LETTER_REPEAT, WORD_LEN, Word};
use crate::error::{Result, WordleError};

/// Outcome for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Absent = 0,
    Present = 1,
    Exact = 2,
}

impl Mark {
    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Emoji square used when rendering feedback
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a Wordle guess
///
/// Represents the five per-position marks as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback(u8);

impl Feedback {
    /// All exact (the guess is the answer)
    pub const WIN: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Number of distinct feedback codes
    pub const COUNT: usize = 243;

    /// Create feedback from a raw value, `None` unless it is below 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::WIN.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Pack five marks, position 0 being the least significant digit
    #[must_use]
    pub fn from_marks(marks: [Mark; WORD_LEN]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for mark in marks {
            value += mark as u8 * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(value)
    }

    /// Get the raw feedback value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.0 == Self::WIN.0
    }

    /// Unpack into per-position marks
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LEN] {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut val = self.0;
        for mark in &mut marks {
            *mark = Mark::from_digit(val % 3);
            val /= 3;
        }
        marks
    }

    /// Count the positions carrying `mark`
    #[must_use]
    pub fn count(self, mark: Mark) -> usize {
        self.marks().iter().filter(|&&m| m == mark).count()
    }

    /// Classify `guess` against `target`
    ///
    /// Exact matches claim their letter before any Present mark is handed out,
    /// so a repeated guess letter is never credited more often than it occurs
    /// in the target.
    ///
    /// # Errors
    /// Returns `WordleError::MalformedWord` if either word repeats a letter more
    /// than three times.
    ///
    /// # Examples
    /// ```
    /// use wordle_deepest::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let feedback = Feedback::classify(&guess, &target).unwrap();
    ///
    /// // C(absent) R(absent) A(exact) N(absent) E(exact)
    /// // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
    /// assert_eq!(feedback.value(), 180);
    /// ```
    pub fn classify(guess: &Word, target: &Word) -> Result<Self> {
        check_repeats(guess)?;
        check_repeats(target)?;

        let mut result = [Mark::Absent; WORD_LEN];
        let mut unclaimed = *target.letter_counts();
        let guess_chars = guess.chars();
        let target_chars = target.chars();

        // Index needed to read both words and write result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess_chars[i] == target_chars[i] {
                result[i] = Mark::Exact;
                unclaimed[usize::from(guess_chars[i] - b'a')] -= 1;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if result[i] == Mark::Exact {
                continue;
            }
            let count = &mut unclaimed[usize::from(guess_chars[i] - b'a')];
            if *count > 0 {
                result[i] = Mark::Present;
                *count -= 1;
            }
        }

        Ok(Self::from_marks(result))
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for exact
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    #[must_use]
    #[allow(clippy::should_implement_trait)] // FromStr is implemented below on top of this
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        let chars: [char; WORD_LEN] = chars.try_into().ok()?;

        let mut marks = [Mark::Absent; WORD_LEN];
        for (mark, ch) in marks.iter_mut().zip(chars) {
            *mark = match ch {
                'G' | 'g' | '🟩' => Mark::Exact,
                'Y' | 'y' | '🟨' => Mark::Present,
                '-' | '_' | '⬜' => Mark::Absent,
                _ => return None,
            };
        }

        Some(Self::from_marks(marks))
    }

    /// Convert feedback to emoji string
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks().iter().map(|m| m.emoji()).collect()
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

fn check_repeats(word: &Word) -> Result<()> {
    if word.max_repeat() > MAX_LETTER_REPEAT {
        let (letter, count) = word.most_repeated();
        return Err(WordleError::MalformedWord {
            word: word.text().to_string(),
            letter: char::from(letter),
            count,
        });
    }
    Ok(())
}
