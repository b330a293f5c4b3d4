//! Word-guess game state.
//!
//! The game is a composed Redux-style state: a `success` flag slice and a
//! `guessed_words` list slice, each owned by a pure reducer, combined into
//! [`AppState`] by [`app_reducer`]. Actions carry stable string kinds;
//! exactly one kind (`CORRECT_GUESS`) affects the success slice.

mod actions;
mod reducers;
mod words;

pub use actions::{GameAction, CORRECT_GUESS, GUESS_WORD};
pub use reducers::{app_reducer, guessed_words_reducer, success_reducer, AppState};
pub use words::{letter_match_count, GuessedWord};
