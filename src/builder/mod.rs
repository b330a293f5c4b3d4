//! Builder API for ergonomic store construction.
//!
//! Provides a fluent builder for wiring a store from its reducer, initial
//! state, and change listeners, plus a factory for the standard game store.

pub mod error;

pub use error::BuildError;

use crate::core::State;
use crate::game::{app_reducer, AppState, GameAction};
use crate::store::{Action, Listener, Reducer, Store};
use std::sync::Arc;

/// Builder for constructing stores with a fluent API.
///
/// # Example
///
/// ```rust
/// use guesswork::builder::StoreBuilder;
/// use guesswork::game::{app_reducer, AppState, GameAction};
///
/// let mut store = StoreBuilder::new()
///     .initial(AppState::default())
///     .reducer(app_reducer)
///     .build()
///     .unwrap();
///
/// store.dispatch(GameAction::CorrectGuess);
/// assert!(store.state().success);
/// ```
pub struct StoreBuilder<S: State, A: Action> {
    initial: Option<S>,
    reducer: Option<Reducer<S, A>>,
    listeners: Vec<Listener<S>>,
}

impl<S: State + 'static, A: Action + 'static> StoreBuilder<S, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            reducer: None,
            listeners: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the reducer (required).
    pub fn reducer<R>(mut self, reducer: R) -> Self
    where
        R: Fn(Option<S>, &A) -> S + Send + Sync + 'static,
    {
        self.reducer = Some(Arc::new(reducer));
        self
    }

    /// Register a change listener (optional, repeatable).
    pub fn on_change<F>(mut self, listener: F) -> Self
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
        self
    }

    /// Build the store.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Store<S, A>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let reducer = self.reducer.ok_or(BuildError::MissingReducer)?;

        let mut store = Store::new(initial, move |prior, action: &A| reducer(prior, action));
        for listener in self.listeners {
            store.subscribe(listener);
        }

        Ok(store)
    }
}

impl<S: State + 'static, A: Action + 'static> Default for StoreBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a game store matching the application's store configuration.
///
/// Pass `None` for a fresh game, or `Some(state)` to seed a context under
/// test without dispatching the actions that would produce it.
///
/// # Example
///
/// ```rust
/// use guesswork::builder::store_factory;
/// use guesswork::game::AppState;
///
/// let solved = store_factory(Some(AppState {
///     success: true,
///     ..AppState::default()
/// }));
/// assert!(solved.is_final());
/// ```
pub fn store_factory(initial: Option<AppState>) -> Store<AppState, GameAction> {
    Store::new(initial.unwrap_or_default(), app_reducer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn builder_validates_missing_initial_state() {
        let result = StoreBuilder::<AppState, GameAction>::new()
            .reducer(app_reducer)
            .build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_validates_missing_reducer() {
        let result = StoreBuilder::<AppState, GameAction>::new()
            .initial(AppState::default())
            .build();

        assert!(matches!(result, Err(BuildError::MissingReducer)));
    }

    #[test]
    fn fluent_api_builds_store() {
        let store = StoreBuilder::new()
            .initial(AppState::default())
            .reducer(app_reducer)
            .build();

        assert!(store.is_ok());
        let store = store.unwrap();
        assert_eq!(store.state(), &AppState::default());
    }

    #[test]
    fn on_change_listeners_are_wired() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&fired);

        let mut store = StoreBuilder::new()
            .initial(AppState::default())
            .reducer(app_reducer)
            .on_change(move |_state: &AppState| {
                counted.fetch_add(1, Ordering::SeqCst);
            })
            .build()
            .unwrap();

        store.dispatch(GameAction::CorrectGuess);
        store.dispatch(GameAction::CorrectGuess);

        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn store_factory_defaults_to_fresh_game() {
        let store = store_factory(None);
        assert!(!store.state().success);
        assert!(store.state().guessed_words.is_empty());
    }

    #[test]
    fn store_factory_accepts_seed_state() {
        let store = store_factory(Some(AppState {
            success: true,
            guessed_words: Vec::new(),
        }));
        assert!(store.state().success);
    }
}
