//! Wordle Deepest
//!
//! Finds the longest line of play the minimax ("minimize the largest bucket")
//! Wordle strategy can be forced into, and the word at the end of it.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_deepest::solver::deepest_forced_line;
//! use wordle_deepest::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_words(&["latch", "match", "patch", "watch"]).unwrap();
//! let chain = deepest_forced_line(&dictionary).unwrap();
//!
//! assert_eq!(chain.len(), 4);
//! assert_eq!(chain.last().unwrap().text(), "watch");
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Game-tree search
pub mod solver;

// Dictionary loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Result, WordleError};
