//! Typed view-models for the rendering layer.
//!
//! No rendering machinery lives here: each view-model is a typed props
//! record with pure accessors describing what a display layer should show.
//! Every component carries stable test tags (the attribute hooks a test
//! harness queries), and list-shaped props can be checked with the
//! accumulating validators in [`props`]. Where a prop is a plain `bool` or
//! a borrowed slice, the type system already enforces the shape and there
//! is nothing to validate at runtime.

mod congrats;
mod counter;
mod guessed_words;
mod input;
pub mod props;

pub use congrats::Congrats;
pub use counter::CounterView;
pub use guessed_words::GuessedWordsView;
pub use input::InputView;
pub use props::PropViolation;
