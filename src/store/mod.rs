//! Synchronous state container: the imperative shell around the pure
//! reducers.
//!
//! A [`Store`] owns one state value and applies actions to it in the order
//! they are dispatched. Every dispatch is recorded in an immutable
//! [`DispatchHistory`] and logged through `tracing`, and change listeners
//! observe the new state after each application. Dispatch itself is
//! synchronous and single-threaded; effectful action creators are run at
//! the [`Store::dispatch_effect`] boundary and their resulting actions are
//! then applied in order.

use crate::core::{DispatchHistory, DispatchRecord, State};
use chrono::Utc;
use std::fmt::Debug;
use std::sync::Arc;
use stillwater::effect::Effect;

/// Contract for dispatchable actions.
///
/// The kind is a stable string identifier - the same value an observer of
/// the dispatch log sees across releases.
pub trait Action: Clone + Debug + Send + Sync {
    /// Stable string identifier for this action.
    fn kind(&self) -> &'static str;
}

/// Reducer function: `(prior, action) -> next`.
///
/// `None` prior state means the reducer supplies its own default.
pub type Reducer<S, A> = Arc<dyn Fn(Option<S>, &A) -> S + Send + Sync>;

/// Change listener invoked with the state after each dispatch.
pub type Listener<S> = Box<dyn Fn(&S) + Send + Sync>;

/// State container applying actions through a single reducer.
///
/// # Example
///
/// ```rust
/// use guesswork::game::{app_reducer, GameAction};
/// use guesswork::game::AppState;
/// use guesswork::store::Store;
///
/// let mut store = Store::new(AppState::default(), app_reducer);
/// store.dispatch(GameAction::CorrectGuess);
///
/// assert!(store.state().success);
/// assert_eq!(store.history().records().len(), 1);
/// ```
pub struct Store<S: State, A: Action> {
    state: S,
    reducer: Reducer<S, A>,
    history: DispatchHistory<S>,
    listeners: Vec<Listener<S>>,
}

impl<S: State, A: Action> Store<S, A> {
    /// Create a store with an initial state and a reducer.
    pub fn new<R>(initial: S, reducer: R) -> Self
    where
        R: Fn(Option<S>, &A) -> S + Send + Sync + 'static,
    {
        Self {
            state: initial,
            reducer: Arc::new(reducer),
            history: DispatchHistory::new(),
            listeners: Vec::new(),
        }
    }

    /// Current state (pure).
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Check if the store has reached a final state (pure).
    pub fn is_final(&self) -> bool {
        self.state.is_final()
    }

    /// Dispatch history (pure).
    pub fn history(&self) -> &DispatchHistory<S> {
        &self.history
    }

    /// Register a change listener.
    ///
    /// Listeners run synchronously after every dispatch, in registration
    /// order, with a reference to the new state.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Apply one action through the reducer.
    ///
    /// Records the dispatch, replaces the state, and notifies listeners.
    /// Commands apply in the order received; there is no queueing and no
    /// suspension point.
    pub fn dispatch(&mut self, action: A) {
        let from = self.state.clone();
        let next = (self.reducer)(Some(from.clone()), &action);

        tracing::debug!(
            action = action.kind(),
            from = from.name(),
            to = next.name(),
            "dispatch"
        );

        self.history = self.history.record(DispatchRecord {
            action: action.kind().to_string(),
            from,
            to: next.clone(),
            timestamp: Utc::now(),
        });
        self.state = next;

        for listener in &self.listeners {
            listener(&self.state);
        }
    }

    /// Run an effectful action creator, then dispatch what it yields.
    ///
    /// The effect is evaluated against the given environment; on success
    /// each resulting action is applied synchronously, in order. On failure
    /// nothing is dispatched and the error is returned to the caller.
    pub async fn dispatch_effect<E, Env, Err>(&mut self, effect: E, env: &Env) -> Result<(), Err>
    where
        E: Effect<Output = Vec<A>, Error = Err, Env = Env>,
    {
        let actions = effect.run(env).await?;
        for action in actions {
            self.dispatch(action);
        }
        Ok(())
    }

    /// Serialize the current state to JSON, devtools-style.
    pub fn state_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::GuessError;
    use crate::game::{app_reducer, AppState, GameAction};
    use std::sync::Mutex;
    use stillwater::effect::BoxedEffect;
    use stillwater::prelude::*;

    fn guess(word: &str, letter_match_count: usize) -> GameAction {
        GameAction::GuessWord {
            word: word.to_string(),
            letter_match_count,
        }
    }

    #[test]
    fn dispatch_applies_reducer() {
        let mut store = Store::new(AppState::default(), app_reducer);
        store.dispatch(GameAction::CorrectGuess);

        assert!(store.state().success);
        assert!(store.is_final());
    }

    #[test]
    fn dispatch_records_history_in_order() {
        let mut store = Store::new(AppState::default(), app_reducer);
        store.dispatch(guess("party", 3));
        store.dispatch(GameAction::CorrectGuess);

        let records = store.history().records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].action, "GUESS_WORD");
        assert_eq!(records[1].action, "CORRECT_GUESS");

        let path = store.history().state_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0].name(), "InProgress");
        assert_eq!(path[2].name(), "Solved");
    }

    #[test]
    fn listeners_observe_every_change() {
        let seen: Arc<Mutex<Vec<bool>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut store = Store::new(AppState::default(), app_reducer);
        store.subscribe(move |state: &AppState| {
            sink.lock().unwrap().push(state.success);
        });

        store.dispatch(guess("party", 3));
        store.dispatch(GameAction::CorrectGuess);

        assert_eq!(*seen.lock().unwrap(), vec![false, true]);
    }

    #[test]
    fn state_json_exports_current_state() {
        let mut store = Store::new(AppState::default(), app_reducer);
        store.dispatch(GameAction::CorrectGuess);

        let json = store.state_json().unwrap();
        assert!(json.contains("\"success\":true"));
    }

    #[tokio::test]
    async fn dispatch_effect_applies_yielded_actions() {
        let mut store = Store::new(AppState::default(), app_reducer);

        let effect: BoxedEffect<Vec<GameAction>, GuessError, ()> =
            pure(vec![guess("train", 5), GameAction::CorrectGuess]).boxed();

        store.dispatch_effect(effect, &()).await.unwrap();

        assert!(store.state().success);
        assert_eq!(store.state().guessed_words.len(), 1);
        assert_eq!(store.history().records().len(), 2);
    }

    #[tokio::test]
    async fn dispatch_effect_failure_dispatches_nothing() {
        let mut store = Store::new(AppState::default(), app_reducer);

        let effect: BoxedEffect<Vec<GameAction>, GuessError, ()> =
            fail(GuessError::EmptyGuess).boxed();

        let result = store.dispatch_effect(effect, &()).await;

        assert!(result.is_err());
        assert!(store.history().records().is_empty());
        assert!(!store.state().success);
    }
}
