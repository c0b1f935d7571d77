//! Split command
//!
//! Shows how one guess partitions the whole dictionary.

use crate::core::{Feedback, Word};
use crate::error::{Result, WordleError};
use crate::solver::Partition;
use crate::wordlists::Dictionary;

/// One bucket of a split, as shown to the user
pub struct SplitBucket {
    pub feedback: Feedback,
    pub words: Vec<String>,
}

/// Result of splitting the dictionary by a guess
pub struct SplitResult {
    pub guess: String,
    pub total_candidates: usize,
    pub bucket_count: usize,
    pub worst_case: usize,
    pub has_win: bool,
    pub largest: Vec<SplitBucket>,
}

/// Partition every dictionary word by its feedback against `guess`
///
/// Keeps the `top` largest buckets for display.
///
/// # Errors
///
/// Returns an error if:
/// - The guess is invalid or not in the dictionary
/// - Any word repeats a letter more than three times
pub fn split_dictionary(dictionary: &Dictionary, guess: &str, top: usize) -> Result<SplitResult> {
    let word = Word::new(guess.to_lowercase())?;
    let guess_word = dictionary
        .find(word.text())
        .ok_or_else(|| WordleError::NotInDictionary(word.text().to_string()))?;

    let candidates: Vec<&Word> = dictionary.words().iter().collect();
    let partition = Partition::build(guess_word, &candidates)?;

    let largest = partition
        .largest_buckets(top)
        .into_iter()
        .map(|bucket| SplitBucket {
            feedback: bucket.feedback(),
            words: bucket.words().iter().map(|w| w.text().to_string()).collect(),
        })
        .collect();

    Ok(SplitResult {
        guess: guess_word.text().to_string(),
        total_candidates: candidates.len(),
        bucket_count: partition.len(),
        worst_case: partition.worst_case(),
        has_win: partition.has_win(),
        largest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_summary() {
        let dictionary =
            Dictionary::from_words(&["hatch", "latch", "match", "patch", "crane"]).unwrap();
        let result = split_dictionary(&dictionary, "hatch", 1).unwrap();

        assert_eq!(result.total_candidates, 5);
        assert_eq!(result.bucket_count, 3);
        assert_eq!(result.worst_case, 3);
        assert!(result.has_win);
        assert_eq!(result.largest.len(), 1);
        assert_eq!(result.largest[0].words, ["latch", "match", "patch"]);
    }

    #[test]
    fn unknown_guess_rejected() {
        let dictionary = Dictionary::from_words(&["abide", "cargo"]).unwrap();
        assert!(matches!(
            split_dictionary(&dictionary, "dimly", 3),
            Err(WordleError::NotInDictionary(_))
        ));
    }
}
