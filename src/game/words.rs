//! Guessed-word records and letter matching.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One entry in the list of previously submitted guesses.
///
/// Display-only data: the guessed word and how many of its distinct letters
/// also appear in the secret word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessedWord {
    pub word: String,
    pub letter_match_count: usize,
}

/// Number of distinct characters shared by a guess and the secret word.
///
/// Letters are counted once each regardless of repetition, so a guess can
/// never match more letters than either word has distinct characters.
///
/// # Example
///
/// ```rust
/// use guesswork::game::letter_match_count;
///
/// assert_eq!(letter_match_count("train", "train"), 5);
/// assert_eq!(letter_match_count("party", "train"), 3); // a, r, t
/// assert_eq!(letter_match_count("couch", "train"), 0);
/// ```
pub fn letter_match_count(guess: &str, secret: &str) -> usize {
    let secret_letters: HashSet<char> = secret.chars().collect();
    let guess_letters: HashSet<char> = guess.chars().collect();
    secret_letters.intersection(&guess_letters).count()
}
