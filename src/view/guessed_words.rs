//! View-model for the list of previous guesses.

use crate::game::GuessedWord;
use crate::view::props::{check_guessed_words, PropViolation};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Shows either the guess instructions or the table of guesses so far.
///
/// # Example
///
/// ```rust
/// use guesswork::view::GuessedWordsView;
///
/// let view = GuessedWordsView::new(&[]);
/// assert_eq!(view.instructions(), Some("Guess the secret word!"));
/// assert!(view.rows().is_empty());
/// ```
pub struct GuessedWordsView<'a> {
    guessed_words: &'a [GuessedWord],
}

impl<'a> GuessedWordsView<'a> {
    /// Test tag for the component root.
    pub const TEST_TAG: &'static str = "component-guessed-words";
    /// Test tag for the instruction line.
    pub const INSTRUCTIONS_TAG: &'static str = "guess-instructions";

    pub fn new(guessed_words: &'a [GuessedWord]) -> Self {
        Self { guessed_words }
    }

    /// Instruction line, shown only before the first guess.
    pub fn instructions(&self) -> Option<&'static str> {
        if self.guessed_words.is_empty() {
            Some("Guess the secret word!")
        } else {
            None
        }
    }

    /// Table rows, one per guess, in submission order.
    pub fn rows(&self) -> &[GuessedWord] {
        self.guessed_words
    }

    /// Check the props this view was built from, accumulating every
    /// violation rather than stopping at the first.
    pub fn check_props(&self) -> Validation<(), NonEmptyVec<PropViolation>> {
        check_guessed_words(self.guessed_words)
    }
}
