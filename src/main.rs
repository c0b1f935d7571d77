//! Wordle Deepest - CLI
//!
//! Finds the deepest forced line of the minimax Wordle strategy over a dictionary file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use wordle_deepest::{
    commands::{classify_pair, run_deepest, solve_word, split_dictionary},
    output::{print_deepest_result, print_feedback_result, print_solve_result, print_split_result},
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_deepest",
    about = "Find the longest line the minimax Wordle strategy can be forced into",
    version,
    author,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line (runs the deepest-line search)
    dictionary: Option<PathBuf>,

    /// Use only the first N dictionary words
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Show search statistics and per-guess candidate counts
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Hide the progress spinner
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the deepest forced line (default)
    Deepest {
        /// Dictionary file, one word per line
        dictionary: PathBuf,

        /// Use only the first N dictionary words
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show the line the strategy plays for one answer
    Solve {
        /// Dictionary file, one word per line
        dictionary: PathBuf,

        /// The answer to play against
        target: String,

        /// Use only the first N dictionary words
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show how one guess splits the dictionary
    Split {
        /// Dictionary file, one word per line
        dictionary: PathBuf,

        /// The guess to analyze
        guess: String,

        /// Number of largest buckets to list
        #[arg(short, long, default_value = "5")]
        top: usize,
    },

    /// Print the feedback for a guess against a target
    Feedback {
        /// The guessed word
        guess: String,

        /// The hidden answer
        target: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let command = match cli.command {
        Some(command) => command,
        None => Commands::Deepest {
            dictionary: cli
                .dictionary
                .context("a dictionary path is required (see --help)")?,
            limit: cli.limit,
        },
    };

    match command {
        Commands::Deepest { dictionary, limit } => {
            run_deepest_command(&dictionary, limit, cli.verbose, cli.quiet)
        }
        Commands::Solve {
            dictionary,
            target,
            limit,
        } => run_solve_command(&dictionary, &target, limit, cli.verbose),
        Commands::Split {
            dictionary,
            guess,
            top,
        } => run_split_command(&dictionary, &guess, top),
        Commands::Feedback { guess, target } => {
            let result = classify_pair(&guess, &target)?;
            print_feedback_result(&result);
            Ok(())
        }
    }
}

/// Load the dictionary, optionally keeping only its first `limit` words
fn load_dictionary(path: &Path, limit: Option<usize>) -> Result<Dictionary> {
    let dictionary = Dictionary::load(path)
        .with_context(|| format!("could not load dictionary from {}", path.display()))?;

    match limit {
        Some(n) => Ok(dictionary.truncated(n)?),
        None => Ok(dictionary),
    }
}

fn search_spinner(quiet: bool) -> Result<ProgressBar> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {pos} nodes | {msg}")?
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    Ok(spinner)
}

fn run_deepest_command(
    path: &Path,
    limit: Option<usize>,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    let dictionary = load_dictionary(path, limit)?;

    if verbose {
        println!("Searching {} words...", dictionary.len());
    }

    let spinner = search_spinner(quiet)?;
    let result = run_deepest(&dictionary, spinner.clone());
    spinner.finish_and_clear();

    print_deepest_result(&result.context("search failed")?, verbose);
    Ok(())
}

fn run_solve_command(path: &Path, target: &str, limit: Option<usize>, verbose: bool) -> Result<()> {
    let dictionary = load_dictionary(path, limit)?;
    let result = solve_word(&dictionary, target)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_split_command(path: &Path, guess: &str, top: usize) -> Result<()> {
    let dictionary = load_dictionary(path, None)?;
    let result = split_dictionary(&dictionary, guess, top)?;
    print_split_result(&result);
    Ok(())
}
