//! Core State trait for view-state values.
//!
//! Every state value that flows through a store or a state machine
//! implements this trait, which provides pure methods for inspecting the
//! state's observable phase without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for view-state values.
///
/// All methods are pure - no side effects. A `State` is an immutable value
/// describing the current position of a piece of UI behavior; its *phase*
/// (the `name`) is what an observer such as a display layer or a dispatch
/// log sees.
///
/// # Required Traits
///
/// - `Clone`: states must be cloneable for history tracking
/// - `PartialEq`: states must be comparable for transition logic
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable for snapshots
///
/// # Example
///
/// ```rust
/// use guesswork::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum RoundPhase {
///     Guessing,
///     Solved,
///     GivenUp,
/// }
///
/// impl State for RoundPhase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Guessing => "Guessing",
///             Self::Solved => "Solved",
///             Self::GivenUp => "GivenUp",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Solved | Self::GivenUp)
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::GivenUp)
///     }
/// }
/// ```
///
/// The crate's own state values implement it too:
///
/// ```rust
/// use guesswork::core::State;
/// use guesswork::counter::Counter;
///
/// let counter = Counter::new().decrement();
/// assert_eq!(counter.name(), "Blocked");
/// assert!(counter.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's phase name for display/logging.
    ///
    /// Returns a static string reference for zero-cost naming.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Final states represent completion points where no further commands
    /// are expected - a solved game, for instance.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Error states represent user-visible failure conditions, such as the
    /// counter refusing a decrement at zero. They are recoverable and need
    /// not be final.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum RoundPhase {
        Guessing,
        Solved,
        GivenUp,
    }

    impl State for RoundPhase {
        fn name(&self) -> &str {
            match self {
                Self::Guessing => "Guessing",
                Self::Solved => "Solved",
                Self::GivenUp => "GivenUp",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Solved | Self::GivenUp)
        }

        fn is_error(&self) -> bool {
            matches!(self, Self::GivenUp)
        }
    }

    #[test]
    fn state_name_returns_phase() {
        assert_eq!(RoundPhase::Guessing.name(), "Guessing");
        assert_eq!(RoundPhase::Solved.name(), "Solved");
        assert_eq!(RoundPhase::GivenUp.name(), "GivenUp");
    }

    #[test]
    fn is_final_identifies_terminal_states() {
        assert!(!RoundPhase::Guessing.is_final());
        assert!(RoundPhase::Solved.is_final());
        assert!(RoundPhase::GivenUp.is_final());
    }

    #[test]
    fn is_error_identifies_error_states() {
        assert!(!RoundPhase::Guessing.is_error());
        assert!(!RoundPhase::Solved.is_error());
        assert!(RoundPhase::GivenUp.is_error());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = RoundPhase::Guessing;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: RoundPhase = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_comparable() {
        assert_eq!(RoundPhase::Solved, RoundPhase::Solved);
        assert_ne!(RoundPhase::Solved, RoundPhase::GivenUp);
    }
}
