//! Exhaustive traversal of the minimax strategy's game tree

use super::partition::Bucket;
use super::selector::{Choice, select_guess};
use super::state::{GameState, GuessChain};
use crate::core::{Feedback, Word};
use crate::error::{Result, WordleError};
use crate::wordlists::Dictionary;
use indicatif::ProgressBar;

/// Counters collected while traversing the tree
///
/// Purely observational: they never influence which line is returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Game states visited (one guess selection each)
    pub nodes: usize,
    /// Longest line seen, in guesses
    pub max_depth: usize,
    /// Most distinct feedback codes produced by a single chosen guess
    pub widest_partition: usize,
}

/// Main solver
///
/// Walks every branch of the tree the minimax strategy induces over a
/// dictionary and reports the longest forced line.
pub struct Solver<'a> {
    dictionary: &'a Dictionary,
    progress: ProgressBar,
    stats: SearchStats,
}

impl<'a> Solver<'a> {
    /// Create a silent solver over `dictionary`
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            progress: ProgressBar::hidden(),
            stats: SearchStats::default(),
        }
    }

    /// Report traversal progress on `progress`, ticking once per visited state
    ///
    /// The caller owns the bar and finishes it.
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// The deepest forced line starting from an empty board
    ///
    /// # Errors
    /// Propagates `WordleError::Exhausted` and `WordleError::MalformedWord`;
    /// no partial line is returned.
    pub fn deepest(&mut self) -> Result<GuessChain<'a>> {
        self.stats = SearchStats::default();
        let root = GameState::root(self.dictionary);
        self.deepest_forced_line(&root)
    }

    /// The longest line the strategy can be forced into from `state`
    ///
    /// Every bucket of the chosen guess's partition is explored. A winning
    /// bucket ends its branch; any other bucket becomes a child state. Among
    /// branches of equal length the first in bucket order is kept.
    ///
    /// # Errors
    /// Propagates `WordleError::Exhausted` and `WordleError::MalformedWord`
    /// from any node of the subtree.
    pub fn deepest_forced_line(&mut self, state: &GameState<'a>) -> Result<GuessChain<'a>> {
        self.visit(state);

        let Choice { guess, partition } = select_guess(self.dictionary, state)?;
        self.stats.widest_partition = self.stats.widest_partition.max(partition.len());

        let mut longest = GuessChain::default();
        for bucket in partition.into_buckets() {
            let chain = if bucket.feedback().is_win() {
                state.line_with(guess)
            } else {
                let child = state.child(guess, bucket.into_words());
                self.deepest_forced_line(&child)?
            };

            if chain.len() > longest.len() {
                longest = chain;
            }
        }

        self.stats.max_depth = self.stats.max_depth.max(longest.len());
        Ok(longest)
    }

    /// The line the strategy plays when the hidden answer is `target`
    ///
    /// Follows a single branch: after each guess only the bucket holding
    /// `target` is kept.
    ///
    /// # Errors
    /// Returns `WordleError::NotInDictionary` if `target` is not a dictionary
    /// word; otherwise propagates selection and classification errors.
    pub fn forced_line_for(&self, target: &Word) -> Result<GuessChain<'a>> {
        if self.dictionary.find(target.text()).is_none() {
            return Err(WordleError::NotInDictionary(target.text().to_string()));
        }

        let mut state = GameState::root(self.dictionary);

        loop {
            let Choice { guess, partition } = select_guess(self.dictionary, &state)?;
            let feedback = Feedback::classify(guess, target)?;

            if feedback.is_win() {
                return Ok(state.line_with(guess));
            }

            let remaining = partition
                .into_buckets()
                .into_iter()
                .find(|b| b.feedback() == feedback)
                .map(Bucket::into_words)
                .ok_or_else(|| WordleError::NotInDictionary(target.text().to_string()))?;

            state = state.child(guess, remaining);
        }
    }

    fn visit(&mut self, state: &GameState<'a>) {
        self.stats.nodes += 1;
        self.progress.inc(1);
        if self.stats.nodes % 256 == 0 {
            self.progress.set_message(format!(
                "depth {} · {} candidates · deepest {}",
                state.depth(),
                state.remaining().len(),
                self.stats.max_depth
            ));
        }
    }
}

/// Convenience wrapper: the deepest forced line over `dictionary`
///
/// # Errors
/// See [`Solver::deepest`].
///
/// # Examples
/// ```
/// use wordle_deepest::solver::deepest_forced_line;
/// use wordle_deepest::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_words(&["abide", "cargo", "dimly"]).unwrap();
/// let chain = deepest_forced_line(&dictionary).unwrap();
///
/// assert_eq!(chain.texts(), ["abide", "cargo"]);
/// ```
pub fn deepest_forced_line(dictionary: &Dictionary) -> Result<GuessChain<'_>> {
    Solver::new(dictionary).deepest()
}
