//! Forced line for one answer
//!
//! Replays the strategy against a chosen answer and records how far each guess
//! narrows the candidates.

use crate::core::{Feedback, Word};
use crate::error::{Result, WordleError};
use crate::solver::{Bucket, Partition, Solver};
use crate::wordlists::Dictionary;

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub guesses: Vec<GuessStep>,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Play the strategy against `target`
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid or not in the dictionary
/// - The search hits a malformed word or runs out of guesses
pub fn solve_word(dictionary: &Dictionary, target: &str) -> Result<SolveResult> {
    let target_word = Word::new(target.to_lowercase())?;
    if dictionary.find(target_word.text()).is_none() {
        return Err(WordleError::NotInDictionary(target_word.text().to_string()));
    }

    let line = Solver::new(dictionary).forced_line_for(&target_word)?;

    let mut candidates: Vec<&Word> = dictionary.words().iter().collect();
    let mut guesses = Vec::with_capacity(line.len());

    for &guess in line.words() {
        let feedback = Feedback::classify(guess, &target_word)?;
        let candidates_before = candidates.len();

        candidates = Partition::build(guess, &candidates)?
            .into_buckets()
            .into_iter()
            .find(|b| b.feedback() == feedback)
            .map(Bucket::into_words)
            .unwrap_or_default();

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after: candidates.len(),
        });
    }

    Ok(SolveResult {
        target: target_word.text().to_string(),
        guesses,
    })
}
