//! Command implementations

pub mod deepest;
pub mod feedback;
pub mod solve;
pub mod split;

pub use deepest::{DeepestResult, run_deepest};
pub use feedback::{FeedbackResult, classify_pair};
pub use solve::{GuessStep, SolveResult, solve_word};
pub use split::{SplitBucket, SplitResult, split_dictionary};
