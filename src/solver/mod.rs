//! Minimax game-tree search
//!
//! Partitioning, guess selection and the exhaustive deepest-line traversal.

mod engine;
mod partition;
mod selector;
mod state;

pub use engine::{SearchStats, Solver, deepest_forced_line};
pub use partition::{Bucket, Partition, Score};
pub use selector::{Choice, select_guess};
pub use state::{GameState, GuessChain};
