//! Search state: a node of the strategy-induced game tree and the guess lines
//! leading out of it

use crate::core::Word;
use crate::wordlists::Dictionary;
use std::fmt;

/// Candidates still consistent with all feedback so far, and the guesses that
/// produced that feedback
///
/// Never mutated after creation; each branch builds its own child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState<'a> {
    remaining: Vec<&'a Word>,
    guesses: Vec<&'a Word>,
}

impl<'a> GameState<'a> {
    /// Build a state from explicit parts
    #[must_use]
    pub const fn new(remaining: Vec<&'a Word>, guesses: Vec<&'a Word>) -> Self {
        Self { remaining, guesses }
    }

    /// Start of the game: every dictionary word is possible, nothing guessed
    #[must_use]
    pub fn root(dictionary: &'a Dictionary) -> Self {
        Self::new(dictionary.words().iter().collect(), Vec::new())
    }

    /// The state after guessing `guess` and observing the feedback shared by `remaining`
    #[must_use]
    pub fn child(&self, guess: &'a Word, remaining: Vec<&'a Word>) -> Self {
        Self::new(remaining, self.line_with(guess).into_words())
    }

    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &[&'a Word] {
        &self.remaining
    }

    /// Number of guesses made so far
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn has_guessed(&self, word: &Word) -> bool {
        self.guesses.iter().any(|&g| g == word)
    }

    /// The guesses so far followed by `guess`
    #[must_use]
    pub fn line_with(&self, guess: &'a Word) -> GuessChain<'a> {
        let mut words = Vec::with_capacity(self.guesses.len() + 1);
        words.extend_from_slice(&self.guesses);
        words.push(guess);
        GuessChain::new(words)
    }
}

/// One root-to-win path through the game tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessChain<'a> {
    words: Vec<&'a Word>,
}

impl<'a> GuessChain<'a> {
    #[must_use]
    pub const fn new(words: Vec<&'a Word>) -> Self {
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[&'a Word] {
        &self.words
    }

    /// Number of guesses, the winning one included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The word this line ends on
    #[must_use]
    pub fn last(&self) -> Option<&'a Word> {
        self.words.last().copied()
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&'a str> {
        self.words.iter().map(|&w| w.text()).collect()
    }

    #[must_use]
    pub fn into_words(self) -> Vec<&'a Word> {
        self.words
    }
}

impl fmt::Display for GuessChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, " → ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}
