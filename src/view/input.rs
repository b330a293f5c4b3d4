//! View-model for the guess input form.

/// The guess entry form: a text field and a submit control, hidden once
/// the word has been guessed.
///
/// Field changes and submission are pure updates - each returns a new
/// view-model rather than mutating in place.
///
/// # Example
///
/// ```rust
/// use guesswork::view::InputView;
///
/// let input = InputView::new(false).with_value("train");
/// let (guess, cleared) = input.submit().unwrap();
///
/// assert_eq!(guess, "train");
/// assert_eq!(cleared.value(), "");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputView {
    success: bool,
    value: String,
}

impl InputView {
    /// Test tag for the component root.
    pub const TEST_TAG: &'static str = "component-input";
    /// Test tag for the text field.
    pub const CONTROL_TAG: &'static str = "input-control";
    /// Test tag for the submit control.
    pub const SUBMIT_TAG: &'static str = "submit-button";

    /// Placeholder shown in the empty text field.
    pub const PLACEHOLDER: &'static str = "enter guess";

    pub fn new(success: bool) -> Self {
        Self {
            success,
            value: String::new(),
        }
    }

    /// Whether the form is shown at all; nothing renders once solved.
    pub fn is_visible(&self) -> bool {
        !self.success
    }

    /// Current contents of the text field.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Field-change capture: a new view with the typed value.
    pub fn with_value(&self, value: impl Into<String>) -> InputView {
        InputView {
            success: self.success,
            value: value.into(),
        }
    }

    /// Submit the form.
    ///
    /// While visible, yields the entered guess together with the view-model
    /// with its field cleared. Hidden forms cannot submit.
    pub fn submit(&self) -> Option<(String, InputView)> {
        if !self.is_visible() {
            return None;
        }
        Some((
            self.value.clone(),
            InputView {
                success: self.success,
                value: String::new(),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod word_has_not_been_guessed {
        use super::*;

        #[test]
        fn renders_the_form() {
            assert!(InputView::new(false).is_visible());
        }

        #[test]
        fn field_starts_empty() {
            assert_eq!(InputView::new(false).value(), "");
        }

        #[test]
        fn typing_updates_the_field() {
            let input = InputView::new(false).with_value("tra");
            let input = input.with_value("train");
            assert_eq!(input.value(), "train");
        }

        #[test]
        fn submit_yields_guess_and_clears_field() {
            let input = InputView::new(false).with_value("train");
            let (guess, cleared) = input.submit().unwrap();

            assert_eq!(guess, "train");
            assert_eq!(cleared.value(), "");
            assert!(cleared.is_visible());
        }

        #[test]
        fn field_change_is_pure() {
            let input = InputView::new(false);
            let _ = input.with_value("train");
            assert_eq!(input.value(), "");
        }
    }

    mod word_has_been_guessed {
        use super::*;

        #[test]
        fn does_not_render_the_form() {
            assert!(!InputView::new(true).is_visible());
        }

        #[test]
        fn submit_is_disabled() {
            let input = InputView::new(true).with_value("train");
            assert!(input.submit().is_none());
        }
    }
}
