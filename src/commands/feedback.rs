//! Feedback command
//!
//! Classifies one guess against one target.

use crate::core::{Feedback, Word};
use crate::error::Result;

/// Result of classifying a guess
pub struct FeedbackResult {
    pub guess: String,
    pub target: String,
    pub feedback: Feedback,
}

/// Classify `guess` against `target`, folding both to lowercase first
///
/// # Errors
///
/// Returns an error if either word is invalid or repeats a letter more than
/// three times.
pub fn classify_pair(guess: &str, target: &str) -> Result<FeedbackResult> {
    let guess = Word::new(guess.to_lowercase())?;
    let target = Word::new(target.to_lowercase())?;
    let feedback = Feedback::classify(&guess, &target)?;

    Ok(FeedbackResult {
        guess: guess.text().to_string(),
        target: target.text().to_string(),
        feedback,
    })
}
