//! Display functions for command results

use super::formatters::{bucket_bar, word_list};
use crate::commands::{DeepestResult, FeedbackResult, SolveResult, SplitResult};
use crate::core::Mark;
use colored::Colorize;

/// Print the deepest forced line: dictionary size, then the numbered chain
pub fn print_deepest_result(result: &DeepestResult, verbose: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DEEPEST FORCED LINE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📚 Dictionary: {} words", result.dictionary_size);
    println!(
        "📏 Worst case: {} guesses\n",
        result.chain.len().to_string().bright_yellow().bold()
    );

    let last = result.chain.len().saturating_sub(1);
    for (i, word) in result.chain.iter().enumerate() {
        if i == last {
            println!(
                "  {:>2}. {}  {}",
                i + 1,
                word.to_uppercase().bright_red().bold(),
                "← hardest to isolate".bright_black()
            );
        } else {
            println!("  {:>2}. {}", i + 1, word.to_uppercase());
        }
    }

    if verbose {
        println!("\n📊 {}", "Search:".bright_cyan().bold());
        println!("   Nodes visited:    {}", result.stats.nodes);
        println!("   Deepest line:     {}", result.stats.max_depth);
        println!("   Widest split:     {} buckets", result.stats.widest_partition);
        println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    }
}

/// Print the forced line for one answer
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    println!(
        "{}",
        format!("✅ Forced line of {} guesses", result.guesses.len())
            .green()
            .bold()
    );
}

/// Print the feedback for one guess/target pair
pub fn print_feedback_result(result: &FeedbackResult) {
    println!(
        "{} vs {}: {} ({} exact, {} present)",
        result.guess.to_uppercase().bright_yellow(),
        result.target.to_uppercase(),
        result.feedback.to_emoji(),
        result.feedback.count(Mark::Exact),
        result.feedback.count(Mark::Present)
    );
}

/// Print how a guess splits the dictionary
pub fn print_split_result(result: &SplitResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SPLIT:".bright_cyan().bold(),
        result.guess.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} candidates:", result.total_candidates);
    println!("   Buckets:     {}", result.bucket_count);
    println!(
        "   Worst case:  {}",
        result.worst_case.to_string().bright_yellow()
    );
    println!(
        "   Can win:     {}",
        if result.has_win {
            "yes".green()
        } else {
            "no".red()
        }
    );

    if !result.largest.is_empty() {
        println!("\n📈 {}", "Largest buckets:".bright_cyan().bold());
        for bucket in &result.largest {
            println!(
                "   {} {} {:4}  {}",
                bucket.feedback.to_emoji(),
                bucket_bar(bucket.words.len(), result.worst_case, 20).green(),
                bucket.words.len(),
                word_list(&bucket.words, 8).bright_black()
            );
        }
    }
}
