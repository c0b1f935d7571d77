//! Core domain types for Wordle
//!
//! The word value type and the feedback classifier. Everything here is pure.

mod feedback;
mod word;

pub use feedback::{Feedback, Mark};
pub use word::{MAX_LETTER_REPEAT, WORD_LEN, Word, WordError};
