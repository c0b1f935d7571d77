//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_deepest_result, print_feedback_result, print_solve_result, print_split_result,
};
