//! Feedback partitioning of a candidate set
//!
//! Given a guess and the remaining candidates, groups every candidate by the
//! feedback it would produce. Buckets appear in the order their first word was
//! seen, which keeps traversal order reproducible.

use crate::core::{Feedback, Word};
use crate::error::Result;
use rustc_hash::FxHashMap;

/// Candidates sharing one feedback code against a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket<'a> {
    feedback: Feedback,
    words: Vec<&'a Word>,
}

impl<'a> Bucket<'a> {
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[&'a Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true for a bucket produced by `Partition::build`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn into_words(self) -> Vec<&'a Word> {
        self.words
    }
}

/// Mapping from feedback code to the candidates producing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<'a> {
    buckets: Vec<Bucket<'a>>,
}

impl<'a> Partition<'a> {
    /// Group `candidates` by their feedback against `guess`
    ///
    /// The union of all buckets is exactly `candidates`: nothing is filtered
    /// or deduplicated.
    ///
    /// # Errors
    /// Propagates `WordleError::MalformedWord` from the classifier.
    ///
    /// # Examples
    /// ```
    /// use wordle_deepest::core::Word;
    /// use wordle_deepest::solver::Partition;
    ///
    /// let words: Vec<Word> = ["abide", "cargo", "dimly"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let candidates: Vec<&Word> = words.iter().collect();
    ///
    /// let partition = Partition::build(&words[0], &candidates).unwrap();
    /// assert_eq!(partition.len(), 3);
    /// assert!(partition.has_win());
    /// ```
    pub fn build(guess: &Word, candidates: &[&'a Word]) -> Result<Self> {
        let mut index: FxHashMap<Feedback, usize> = FxHashMap::default();
        let mut buckets: Vec<Bucket<'a>> = Vec::new();

        for &candidate in candidates {
            let feedback = Feedback::classify(guess, candidate)?;
            let slot = *index.entry(feedback).or_insert_with(|| {
                buckets.push(Bucket {
                    feedback,
                    words: Vec::new(),
                });
                buckets.len() - 1
            });
            buckets[slot].words.push(candidate);
        }

        Ok(Self { buckets })
    }

    /// The partition of an already isolated answer: `{WIN: [word]}`
    #[must_use]
    pub fn singleton_win(word: &'a Word) -> Self {
        Self {
            buckets: vec![Bucket {
                feedback: Feedback::WIN,
                words: vec![word],
            }],
        }
    }

    /// Size of the largest bucket (0 for an empty partition)
    #[must_use]
    pub fn worst_case(&self) -> usize {
        self.buckets.iter().map(Bucket::len).max().unwrap_or(0)
    }

    /// Whether the guess itself is among the candidates
    #[must_use]
    pub fn has_win(&self) -> bool {
        self.win_bucket().is_some()
    }

    #[must_use]
    pub fn win_bucket(&self) -> Option<&Bucket<'a>> {
        self.buckets.iter().find(|b| b.feedback.is_win())
    }

    /// Number of distinct feedback codes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Buckets in first-seen order
    #[inline]
    #[must_use]
    pub fn buckets(&self) -> &[Bucket<'a>] {
        &self.buckets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bucket<'a>> {
        self.buckets.iter()
    }

    #[must_use]
    pub fn into_buckets(self) -> Vec<Bucket<'a>> {
        self.buckets
    }

    /// The `n` largest buckets, biggest first; equal sizes keep first-seen order
    #[must_use]
    pub fn largest_buckets(&self, n: usize) -> Vec<&Bucket<'a>> {
        let mut sorted: Vec<&Bucket<'a>> = self.buckets.iter().collect();
        sorted.sort_by_key(|b| std::cmp::Reverse(b.len()));
        sorted.truncate(n);
        sorted
    }
}

/// How well a guess narrows a candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Largest bucket size
    pub worst_case: usize,
    /// Whether some bucket is the winning one
    pub has_win: bool,
}

impl Score {
    /// Score of a guess that gains no information at all
    #[must_use]
    pub const fn no_information(remaining: usize) -> Self {
        Self {
            worst_case: remaining,
            has_win: false,
        }
    }

    /// Score `guess` against `candidates` without materializing the buckets
    ///
    /// Agrees with `Partition::build(guess, candidates)` on `worst_case()`
    /// and `has_win()`.
    ///
    /// # Errors
    /// Propagates `WordleError::MalformedWord` from the classifier.
    pub fn of(guess: &Word, candidates: &[&Word]) -> Result<Self> {
        let mut counts = [0usize; Feedback::COUNT];
        for &candidate in candidates {
            counts[usize::from(Feedback::classify(guess, candidate)?.value())] += 1;
        }

        Ok(Self {
            worst_case: counts.iter().copied().max().unwrap_or(0),
            has_win: counts[usize::from(Feedback::WIN.value())] > 0,
        })
    }

    /// Strictly smaller worst case, or an equal one that can also win outright
    /// when `other` cannot
    #[must_use]
    pub const fn beats(self, other: Self) -> bool {
        self.worst_case < other.worst_case
            || (self.worst_case == other.worst_case && self.has_win && !other.has_win)
    }
}
