//! Dispatch history tracking.
//!
//! Provides immutable tracking of the actions a store has applied over
//! time, following functional programming principles. The history is what a
//! devtools-style observer replays: which action kind ran, and which state
//! it moved between.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single dispatched action.
///
/// Records are immutable values describing one application of an action:
/// the stable action kind, the state it was applied to, the state it
/// produced, and when it happened.
///
/// # Example
///
/// ```rust
/// use guesswork::core::DispatchRecord;
/// use guesswork::game::AppState;
/// use chrono::Utc;
///
/// let record = DispatchRecord {
///     action: "CORRECT_GUESS".to_string(),
///     from: AppState::default(),
///     to: AppState {
///         success: true,
///         ..AppState::default()
///     },
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.action, "CORRECT_GUESS");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DispatchRecord<S: State> {
    /// Stable string kind of the dispatched action
    pub action: String,
    /// The state the action was applied to
    pub from: S,
    /// The state the reducer produced
    pub to: S,
    /// When the dispatch occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of dispatched actions.
///
/// History is immutable - the `record` method returns a new history with
/// the record added, following functional programming principles. Because
/// dispatch is synchronous, the order of records is exactly the order in
/// which commands were received.
///
/// # Example
///
/// ```rust
/// use guesswork::core::{DispatchHistory, DispatchRecord};
/// use guesswork::game::AppState;
/// use chrono::Utc;
///
/// let history = DispatchHistory::new();
///
/// let solved = AppState {
///     success: true,
///     ..AppState::default()
/// };
///
/// let history = history.record(DispatchRecord {
///     action: "CORRECT_GUESS".to_string(),
///     from: AppState::default(),
///     to: solved.clone(),
///     timestamp: Utc::now(),
/// });
///
/// let path = history.state_path();
/// assert_eq!(path.len(), 2); // InProgress -> Solved
/// assert_eq!(path[1], &solved);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DispatchHistory<S: State> {
    records: Vec<DispatchRecord<S>>,
}

impl<S: State> Default for DispatchHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> DispatchHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a dispatch, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the record added.
    ///
    /// # Example
    ///
    /// ```rust
    /// use guesswork::core::{DispatchHistory, DispatchRecord};
    /// use guesswork::game::AppState;
    /// use chrono::Utc;
    ///
    /// let history = DispatchHistory::new();
    /// let record = DispatchRecord {
    ///     action: "GUESS_WORD".to_string(),
    ///     from: AppState::default(),
    ///     to: AppState::default(),
    ///     timestamp: Utc::now(),
    /// };
    ///
    /// let new_history = history.record(record);
    /// assert_eq!(new_history.records().len(), 1);
    /// assert_eq!(history.records().len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, record: DispatchRecord<S>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the state before the first
    /// dispatch, then the `to` state of each record.
    pub fn state_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Calculate total duration from first to last dispatch.
    ///
    /// Returns `None` if nothing has been dispatched. Otherwise returns
    /// the duration between the first and last record timestamps.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all records.
    ///
    /// Returns a slice of all recorded dispatches in order.
    pub fn records(&self) -> &[DispatchRecord<S>] {
        &self.records
    }
}
