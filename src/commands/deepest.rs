//! Deepest forced line command
//!
//! Runs the exhaustive search over the whole dictionary and collects what the
//! reporter needs.

use crate::error::Result;
use crate::solver::{SearchStats, Solver};
use crate::wordlists::Dictionary;
use indicatif::ProgressBar;
use std::time::{Duration, Instant};

/// Result of a deepest-line search
pub struct DeepestResult {
    pub dictionary_size: usize,
    pub chain: Vec<String>,
    pub stats: SearchStats,
    pub duration: Duration,
}

impl DeepestResult {
    /// The word the strategy has the hardest time isolating
    #[must_use]
    pub fn hardest_word(&self) -> Option<&str> {
        self.chain.last().map(String::as_str)
    }
}

/// Find the deepest forced line over `dictionary`
///
/// `progress` ticks once per visited game state; pass `ProgressBar::hidden()`
/// for a silent run.
///
/// # Errors
///
/// Returns an error if the search hits a malformed word or runs out of
/// eligible guesses.
pub fn run_deepest(dictionary: &Dictionary, progress: ProgressBar) -> Result<DeepestResult> {
    let start = Instant::now();

    let mut solver = Solver::new(dictionary).with_progress(progress);
    let chain = solver.deepest()?;

    Ok(DeepestResult {
        dictionary_size: dictionary.len(),
        chain: chain.texts().into_iter().map(str::to_string).collect(),
        stats: solver.stats(),
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_chain_and_size() {
        let dictionary = Dictionary::from_words(&["abide", "cargo", "dimly"]).unwrap();
        let result = run_deepest(&dictionary, ProgressBar::hidden()).unwrap();

        assert_eq!(result.dictionary_size, 3);
        assert_eq!(result.chain, ["abide", "cargo"]);
        assert_eq!(result.hardest_word(), Some("cargo"));
        assert_eq!(result.stats.nodes, 3);
    }

    #[test]
    fn errors_are_not_absorbed() {
        let dictionary = Dictionary::from_words(&["abide", "qqqqq"]).unwrap();
        assert!(run_deepest(&dictionary, ProgressBar::hidden()).is_err());
    }
}
