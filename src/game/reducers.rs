//! Pure slice reducers and the combined application state.

use crate::core::State;
use crate::game::actions::GameAction;
use crate::game::words::GuessedWord;
use serde::{Deserialize, Serialize};

/// Composed game state produced by [`app_reducer`].
///
/// Two independent slices: whether the secret word has been guessed, and
/// the list of guesses submitted so far. The state's phase is `InProgress`
/// until solved, then `Solved`, which is final.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// True once the secret word has been correctly guessed.
    pub success: bool,
    /// Every guess submitted so far, in submission order.
    pub guessed_words: Vec<GuessedWord>,
}

impl State for AppState {
    fn name(&self) -> &str {
        if self.success {
            "Solved"
        } else {
            "InProgress"
        }
    }

    fn is_final(&self) -> bool {
        self.success
    }
}

/// Reducer for the success flag slice.
///
/// A total pure function: absent prior state defaults to `false`,
/// `CorrectGuess` sets the flag, and every other action returns the prior
/// flag unchanged. Nothing ever resets it; the slice only reverts to
/// `false` by rebuilding the store.
///
/// # Example
///
/// ```rust
/// use guesswork::game::{success_reducer, GameAction};
///
/// assert!(!success_reducer(None, &GameAction::GuessWord {
///     word: "party".to_string(),
///     letter_match_count: 3,
/// }));
/// assert!(success_reducer(None, &GameAction::CorrectGuess));
/// assert!(success_reducer(Some(true), &GameAction::GuessWord {
///     word: "party".to_string(),
///     letter_match_count: 3,
/// }));
/// ```
pub fn success_reducer(state: Option<bool>, action: &GameAction) -> bool {
    let current = state.unwrap_or(false);
    match action {
        GameAction::CorrectGuess => true,
        _ => current,
    }
}

/// Reducer for the guessed-words slice.
///
/// `GuessWord` appends an entry; any other action returns the prior list
/// unchanged (empty when absent).
pub fn guessed_words_reducer(
    state: Option<Vec<GuessedWord>>,
    action: &GameAction,
) -> Vec<GuessedWord> {
    let mut words = state.unwrap_or_default();
    if let GameAction::GuessWord {
        word,
        letter_match_count,
    } = action
    {
        words.push(GuessedWord {
            word: word.clone(),
            letter_match_count: *letter_match_count,
        });
    }
    words
}

/// Combined reducer over [`AppState`].
///
/// Delegates each slice to its own reducer, so absent prior state lets
/// every slice supply its own default.
pub fn app_reducer(state: Option<AppState>, action: &GameAction) -> AppState {
    let (success, guessed_words) = match state {
        Some(prior) => (Some(prior.success), Some(prior.guessed_words)),
        None => (None, None),
    };

    AppState {
        success: success_reducer(success, action),
        guessed_words: guessed_words_reducer(guessed_words, action),
    }
}
