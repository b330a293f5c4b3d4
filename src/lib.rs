//! Guesswork: a pure functional view-state library
//!
//! Guesswork follows Stillwater's "pure core, imperative shell" philosophy.
//! All state transitions are pure functions that return new values; the only
//! imperative layer is the [`store::Store`], which applies actions in the
//! order they are dispatched, and the effectful action creators in
//! [`effects`], which are isolated in Effect values.
//!
//! # Core Concepts
//!
//! - **Counter**: a non-negative click counter with a user-visible error
//!   state, driven by increment/decrement commands
//! - **Reducers**: pure `(prior, action) -> next` functions composed into a
//!   single application state, Redux-style
//! - **Store**: synchronous dispatch with an immutable history of every
//!   action applied
//! - **View-models**: typed, render-free descriptions of what a display
//!   layer should show
//!
//! # Example
//!
//! ```rust
//! use guesswork::counter::Counter;
//! use guesswork::game::{success_reducer, GameAction};
//!
//! // The counter refuses to go below zero and surfaces a message instead.
//! let counter = Counter::new().decrement();
//! assert_eq!(counter.value(), 0);
//! assert!(counter.error_message().unwrap().to_lowercase().contains("zero"));
//!
//! // Incrementing dismisses the error.
//! let counter = counter.increment();
//! assert_eq!(counter.value(), 1);
//! assert!(counter.error_message().is_none());
//!
//! // The success reducer is a total pure function over its inputs.
//! assert!(success_reducer(None, &GameAction::CorrectGuess));
//! ```

pub mod builder;
pub mod core;
pub mod counter;
pub mod effects;
pub mod game;
pub mod store;
pub mod view;

// Re-export commonly used types
pub use crate::builder::{store_factory, BuildError, StoreBuilder};
pub use crate::core::{DispatchHistory, DispatchRecord, Guard, State};
pub use crate::counter::{BelowZeroAttempt, Counter};
pub use crate::game::{app_reducer, AppState, GameAction, GuessedWord};
pub use crate::store::{Action, Store};
