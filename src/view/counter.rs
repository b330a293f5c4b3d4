//! View-model for the click counter.

use crate::counter::Counter;

/// What the counter display shows for a given [`Counter`] state.
///
/// # Example
///
/// ```rust
/// use guesswork::counter::Counter;
/// use guesswork::view::CounterView;
///
/// let counter = Counter::new().increment();
/// let view = CounterView::new(&counter);
///
/// assert!(view.display().contains('1'));
/// assert_eq!(view.error(), "");
/// ```
pub struct CounterView<'a> {
    counter: &'a Counter,
}

impl<'a> CounterView<'a> {
    /// Test tag for the component root.
    pub const TEST_TAG: &'static str = "component-counter";
    /// Test tag for the value display.
    pub const DISPLAY_TAG: &'static str = "counter-display";
    /// Test tag for the error line.
    pub const ERROR_TAG: &'static str = "error-message";

    pub fn new(counter: &'a Counter) -> Self {
        Self { counter }
    }

    /// The display line; always contains the current value.
    pub fn display(&self) -> String {
        format!("The counter is currently {}", self.counter.value())
    }

    /// The error line: the counter's message, or empty when there is none.
    pub fn error(&self) -> String {
        self.counter.error_message().unwrap_or_default()
    }
}
