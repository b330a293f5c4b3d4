//! Game actions and their stable string kinds.

use crate::store::Action;
use serde::{Deserialize, Serialize};

/// Action kind flipping the success flag to true.
pub const CORRECT_GUESS: &str = "CORRECT_GUESS";

/// Action kind recording a submitted guess.
pub const GUESS_WORD: &str = "GUESS_WORD";

/// Actions understood by the game reducers.
///
/// Each variant maps to a stable string kind so observers (the dispatch
/// log, the tracing layer) see the same identifier across releases.
///
/// # Example
///
/// ```rust
/// use guesswork::game::{GameAction, CORRECT_GUESS};
/// use guesswork::store::Action;
///
/// assert_eq!(GameAction::CorrectGuess.kind(), CORRECT_GUESS);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameAction {
    /// The secret word has been guessed exactly.
    CorrectGuess,

    /// A guess was submitted, along with how many of its distinct letters
    /// appear in the secret word.
    GuessWord {
        word: String,
        letter_match_count: usize,
    },
}

impl Action for GameAction {
    fn kind(&self) -> &'static str {
        match self {
            Self::CorrectGuess => CORRECT_GUESS,
            Self::GuessWord { .. } => GUESS_WORD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_stable_identifiers() {
        assert_eq!(GameAction::CorrectGuess.kind(), "CORRECT_GUESS");
        assert_eq!(
            GameAction::GuessWord {
                word: "train".to_string(),
                letter_match_count: 3,
            }
            .kind(),
            "GUESS_WORD"
        );
    }

    #[test]
    fn actions_serialize_correctly() {
        let action = GameAction::GuessWord {
            word: "agile".to_string(),
            letter_match_count: 1,
        };
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: GameAction = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
