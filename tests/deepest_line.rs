//! End-to-end properties of the deepest forced line search

use std::collections::HashSet;
use std::fs;
use wordle_deepest::WordleError;
use wordle_deepest::core::{Feedback, Word};
use wordle_deepest::solver::{GameState, Solver, deepest_forced_line, select_guess};
use wordle_deepest::wordlists::Dictionary;

const WORDS: &[&str] = &[
    "baker", "boxer", "cater", "later", "hater", "water", "eater", "gazer", "hatch", "latch",
    "match", "patch", "watch", "catch", "batch", "crane", "slate", "irate", "trace", "abide",
    "cargo", "dimly", "speed", "erase", "sassy", "glass", "robot", "floor", "mound", "pound",
    "round", "sound", "wound", "hound", "found", "bound",
];

fn dictionary() -> Dictionary {
    Dictionary::from_words(WORDS).unwrap()
}

#[test]
fn literal_three_word_scenario() {
    let dictionary = Dictionary::from_words(&["abide", "cargo", "dimly"]).unwrap();
    let abide = &dictionary.words()[0];
    assert_eq!(Feedback::classify(abide, abide).unwrap(), Feedback::WIN);

    let chain = deepest_forced_line(&dictionary).unwrap();
    assert!(chain.len() <= 3);
    let first = chain.words()[0];
    assert!(chain.words()[1..].iter().all(|&w| w != first));
}

#[test]
fn chain_is_a_valid_line() {
    let dictionary = dictionary();
    let chain = deepest_forced_line(&dictionary).unwrap();

    assert!(!chain.is_empty());
    assert!(chain.len() <= dictionary.len());

    let distinct: HashSet<&str> = chain.texts().into_iter().collect();
    assert_eq!(distinct.len(), chain.len(), "a guess was repeated: {chain}");

    for word in chain.words() {
        assert!(dictionary.find(word.text()).is_some());
    }
}

#[test]
fn search_is_deterministic() {
    let dictionary = dictionary();
    let first = deepest_forced_line(&dictionary).unwrap();
    let second = deepest_forced_line(&dictionary).unwrap();
    assert_eq!(first, second);
}

#[test]
fn deepest_is_the_worst_answer() {
    let dictionary = dictionary();
    let mut solver = Solver::new(&dictionary);
    let deepest = solver.deepest().unwrap();

    let mut longest = 0;
    for target in dictionary.words() {
        let line = solver.forced_line_for(target).unwrap();
        assert_eq!(line.last(), Some(target));
        assert!(line.len() <= deepest.len());
        longest = longest.max(line.len());
    }
    assert_eq!(longest, deepest.len());

    let hardest = deepest.last().unwrap();
    assert_eq!(solver.forced_line_for(hardest).unwrap(), deepest);
}

#[test]
fn every_guess_narrows_the_candidates() {
    let dictionary = dictionary();
    let deepest = deepest_forced_line(&dictionary).unwrap();
    let target = deepest.last().unwrap();

    let mut state = GameState::root(&dictionary);
    for &expected in deepest.words() {
        let choice = select_guess(&dictionary, &state).unwrap();
        assert_eq!(choice.guess, expected);

        let feedback = Feedback::classify(choice.guess, target).unwrap();
        if feedback.is_win() {
            break;
        }

        let before = state.remaining().len();
        let bucket: Vec<&Word> = choice
            .partition
            .buckets()
            .iter()
            .find(|b| b.feedback() == feedback)
            .unwrap()
            .words()
            .to_vec();
        assert!(bucket.len() < before);
        for word in &bucket {
            assert_eq!(Feedback::classify(choice.guess, word).unwrap(), feedback);
        }

        state = state.child(choice.guess, bucket);
    }
}

#[test]
fn loaded_file_runs_end_to_end() {
    let path = std::env::temp_dir().join(format!("wordle_deepest_e2e_{}.txt", std::process::id()));
    fs::write(&path, "latch\nMatch\nmatch\n\npatch\nwatch\nwatches\n").unwrap();

    let dictionary = Dictionary::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(dictionary.len(), 4);
    let chain = deepest_forced_line(&dictionary).unwrap();
    assert_eq!(chain.texts(), ["latch", "match", "patch", "watch"]);
}

#[test]
fn malformed_word_is_fatal() {
    let mut words = WORDS.to_vec();
    words.push("ooooh");
    let dictionary = Dictionary::from_words(&words).unwrap();

    assert!(matches!(
        deepest_forced_line(&dictionary),
        Err(WordleError::MalformedWord { .. })
    ));
}
