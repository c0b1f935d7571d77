//! Minimax guess selection
//!
//! Picks the dictionary word whose partition of the remaining candidates has the
//! smallest largest bucket. Among equal worst cases a guess that can win outright
//! is preferred; otherwise the first word in dictionary order is kept.

use super::partition::{Partition, Score};
use super::state::GameState;
use crate::core::Word;
use crate::error::{Result, WordleError};
use crate::wordlists::Dictionary;

/// The guess chosen for a game state, with its partition of the candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<'a> {
    pub guess: &'a Word,
    pub partition: Partition<'a>,
}

/// Select the best guess for `state`
///
/// A single remaining candidate is guessed directly without scanning the
/// dictionary. Otherwise every dictionary word not yet guessed is scored, and
/// the running best starts from a guess that learns nothing, so any choice
/// made actually narrows the candidates.
///
/// # Errors
/// - `WordleError::Exhausted` if no eligible word improves on guessing nothing
///   (in practice: every dictionary word was already guessed)
/// - `WordleError::MalformedWord` propagated from the classifier
///
/// # Examples
/// ```
/// use wordle_deepest::solver::{GameState, select_guess};
/// use wordle_deepest::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_words(&["abide", "cargo", "dimly"]).unwrap();
/// let choice = select_guess(&dictionary, &GameState::root(&dictionary)).unwrap();
///
/// assert_eq!(choice.guess.text(), "abide");
/// assert_eq!(choice.partition.worst_case(), 1);
/// ```
pub fn select_guess<'a>(dictionary: &'a Dictionary, state: &GameState<'a>) -> Result<Choice<'a>> {
    let remaining = state.remaining();

    if let &[only] = remaining {
        return Ok(Choice {
            guess: only,
            partition: Partition::singleton_win(only),
        });
    }

    let mut best: Option<&'a Word> = None;
    let mut best_score = Score::no_information(remaining.len());

    for guess in dictionary.words() {
        if state.has_guessed(guess) {
            continue;
        }

        let score = Score::of(guess, remaining)?;
        if score.beats(best_score) {
            best = Some(guess);
            best_score = score;
        }
    }

    let guess = best.ok_or(WordleError::Exhausted {
        depth: state.depth(),
        remaining: remaining.len(),
    })?;

    Ok(Choice {
        guess,
        partition: Partition::build(guess, remaining)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn singleton_is_guessed_without_scanning() {
        // A scan would hit the malformed word and fail
        let dictionary = Dictionary::from_words(&["aaaab", "abide"]).unwrap();
        let answer = &dictionary.words()[1];
        let state = GameState::new(vec![answer], Vec::new());

        let choice = select_guess(&dictionary, &state).unwrap();
        assert_eq!(choice.guess, answer);
        assert_eq!(choice.partition, Partition::singleton_win(answer));
    }

    #[test]
    fn equal_score_prefers_possible_win() {
        let pool = words_from_slice(&["abide", "cargo"]);
        // dimly splits abide/cargo as well as abide does, but cannot win
        let dictionary = Dictionary::from_words(&["dimly", "abide", "cargo"]).unwrap();
        let state = GameState::new(pool.iter().collect(), Vec::new());

        let choice = select_guess(&dictionary, &state).unwrap();
        assert_eq!(choice.guess.text(), "abide");
        assert!(choice.partition.has_win());
        assert_eq!(choice.partition.worst_case(), 1);
    }

    #[test]
    fn equal_score_without_win_keeps_first() {
        let pool = words_from_slice(&["abide", "cargo"]);
        let dictionary = Dictionary::from_words(&["fuzzy", "dimly", "bough"]).unwrap();
        let state = GameState::new(pool.iter().collect(), Vec::new());

        let choice = select_guess(&dictionary, &state).unwrap();
        assert_eq!(choice.guess.text(), "dimly");
        assert!(!choice.partition.has_win());
    }

    #[test]
    fn smaller_worst_case_beats_possible_win() {
        // hatch only isolates itself; lamps separates all four
        let pool = words_from_slice(&["latch", "match", "patch", "hatch"]);
        let dictionary = Dictionary::from_words(&["hatch", "lamps"]).unwrap();
        let state = GameState::new(pool.iter().collect(), Vec::new());

        let choice = select_guess(&dictionary, &state).unwrap();
        assert_eq!(choice.guess.text(), "lamps");
        assert_eq!(choice.partition.worst_case(), 1);
        assert!(!choice.partition.has_win());
    }

    #[test]
    fn previous_guesses_are_skipped() {
        let dictionary = Dictionary::from_words(&["abide", "cargo", "dimly"]).unwrap();
        let words = dictionary.words();
        let state = GameState::new(vec![&words[1], &words[2]], vec![&words[0]]);

        let choice = select_guess(&dictionary, &state).unwrap();
        assert_eq!(choice.guess.text(), "cargo");
    }

    #[test]
    fn exhausted_when_everything_guessed() {
        let dictionary = Dictionary::from_words(&["abide", "cargo"]).unwrap();
        let words = dictionary.words();
        let state = GameState::new(vec![&words[0], &words[1]], vec![&words[0], &words[1]]);

        let err = select_guess(&dictionary, &state).unwrap_err();
        assert!(matches!(
            err,
            WordleError::Exhausted {
                depth: 2,
                remaining: 2
            }
        ));
    }

    #[test]
    fn malformed_dictionary_word_fails_selection() {
        let dictionary = Dictionary::from_words(&["abide", "cargo", "ssssa"]).unwrap();
        let err = select_guess(&dictionary, &GameState::root(&dictionary)).unwrap_err();
        assert!(matches!(err, WordleError::MalformedWord { letter: 's', .. }));
    }

    #[test]
    fn selection_is_deterministic() {
        let dictionary = Dictionary::from_words(&[
            "crane", "slate", "irate", "crate", "grate", "trace", "react", "cater",
        ])
        .unwrap();
        let state = GameState::root(&dictionary);

        let first = select_guess(&dictionary, &state).unwrap();
        for _ in 0..5 {
            assert_eq!(select_guess(&dictionary, &state).unwrap(), first);
        }
    }
}
