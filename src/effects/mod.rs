//! Effectful action creators using Stillwater 0.11.0.
//!
//! This module is the "imperative shell" around the pure reducers: action
//! creators that need context - the secret word - are expressed as Effects
//! evaluated against a [`GameEnv`], and yield the plain actions the store
//! then applies.
//!
//! Following Stillwater 0.11.0 conventions:
//! - Creators return `impl Effect` for zero-cost composition
//! - The environment is read inside the effect, never from global state
//! - Use free-standing constructors: `pure()`, `fail()`, `from_fn()`

use crate::game::{letter_match_count, GameAction};
use stillwater::effect::Effect;
use stillwater::prelude::*;
use thiserror::Error;

/// Environment for game action creators.
///
/// Holds the configuration the creators read - currently just the secret
/// word. Passed explicitly at the evaluation site; nothing is process-wide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameEnv {
    pub secret_word: String,
}

impl GameEnv {
    pub fn new(secret_word: impl Into<String>) -> Self {
        Self {
            secret_word: secret_word.into(),
        }
    }
}

/// Errors from game action creators.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GuessError {
    #[error("Guess is empty. Enter a word before submitting")]
    EmptyGuess,
}

/// Action creator for submitting a guess.
///
/// Reads the secret word from the environment, computes the letter match
/// count, and yields a `GuessWord` action - followed by `CorrectGuess` when
/// the guess is exactly the secret word. Empty or whitespace-only guesses
/// fail with [`GuessError::EmptyGuess`] and yield nothing.
///
/// # Example
///
/// ```rust
/// use guesswork::effects::{guess_word, GameEnv};
/// use guesswork::game::GameAction;
/// use stillwater::prelude::*;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let env = GameEnv::new("train");
/// let actions = guess_word("party").run(&env).await.unwrap();
///
/// assert_eq!(
///     actions,
///     vec![GameAction::GuessWord {
///         word: "party".to_string(),
///         letter_match_count: 3,
///     }]
/// );
/// # }
/// ```
pub fn guess_word(
    guess: impl Into<String>,
) -> impl Effect<Output = Vec<GameAction>, Error = GuessError, Env = GameEnv> {
    let guess = guess.into();
    from_fn(move |env: &GameEnv| {
        let word = guess.trim();
        if word.is_empty() {
            return Err(GuessError::EmptyGuess);
        }

        let mut actions = vec![GameAction::GuessWord {
            word: word.to_string(),
            letter_match_count: letter_match_count(word, &env.secret_word),
        }];
        if word == env.secret_word {
            actions.push(GameAction::CorrectGuess);
        }
        Ok(actions)
    })
    .boxed()
}
