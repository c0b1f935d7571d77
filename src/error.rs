//! Crate-wide error type
//!
//! Every failure here is a data or programmer error. None of them is retried:
//! the search either produces one complete guess chain or stops with one of these.

use crate::core::WordError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a dictionary or searching its game tree
#[derive(Debug, Error)]
pub enum WordleError {
    /// A word repeats one letter more often than the feedback encoding supports
    #[error("malformed word '{word}': letter '{letter}' occurs {count} times (at most 3 supported)")]
    MalformedWord {
        word: String,
        letter: char,
        count: u8,
    },

    /// Every dictionary word has already been guessed along the current line
    #[error("no eligible guess left after {depth} guesses with {remaining} candidates remaining")]
    Exhausted { depth: usize, remaining: usize },

    /// The dictionary holds no valid five-letter words
    #[error("dictionary contains no valid five-letter words")]
    EmptyDictionary,

    /// A word named on the command line is not in the dictionary
    #[error("'{0}' is not in the dictionary")]
    NotInDictionary(String),

    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("failed to read dictionary {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = WordleError> = std::result::Result<T, E>;
