//! Accumulating props checks for view-models.
//!
//! List-shaped props can be inconsistent in ways the type system cannot
//! see, such as a letter match count larger than the word itself. These
//! checks use Stillwater's `Validation` to report ALL violations in one
//! pass instead of stopping at the first.

use crate::game::GuessedWord;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Violations found in view-model props.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PropViolation {
    #[error("Guessed word at index {index} is empty")]
    EmptyWord { index: usize },

    #[error(
        "Guessed word '{word}' reports {count} matched letters but has only {distinct} distinct letters"
    )]
    MatchCountOutOfRange {
        word: String,
        count: usize,
        distinct: usize,
    },
}

/// Check a guessed-words list, accumulating every violation.
///
/// An empty list is valid - it simply renders the instructions.
///
/// # Example
///
/// ```rust
/// use guesswork::game::GuessedWord;
/// use guesswork::view::props::check_guessed_words;
///
/// let words = vec![GuessedWord {
///     word: "party".to_string(),
///     letter_match_count: 3,
/// }];
/// assert!(check_guessed_words(&words).is_success());
/// ```
pub fn check_guessed_words(
    words: &[GuessedWord],
) -> Validation<(), NonEmptyVec<PropViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<PropViolation>>> = Vec::new();

    for (index, entry) in words.iter().enumerate() {
        let check = if entry.word.trim().is_empty() {
            Validation::fail(PropViolation::EmptyWord { index })
        } else {
            Validation::success(())
        };
        checks.push(check);

        let distinct = entry.word.chars().collect::<HashSet<_>>().len();
        let check = if entry.letter_match_count > distinct {
            Validation::fail(PropViolation::MatchCountOutOfRange {
                word: entry.word.clone(),
                count: entry.letter_match_count,
                distinct,
            })
        } else {
            Validation::success(())
        };
        checks.push(check);
    }

    Validation::all_vec(checks).map(|_| ())
}
