//! Word-Guess Game
//!
//! This example walks a full game through the store: wrong guesses, the
//! growing guessed-words table, and the solved state hiding the input form.
//!
//! Run with: cargo run --example jotto

use guesswork::builder::store_factory;
use guesswork::effects::{guess_word, GameEnv};
use guesswork::view::{Congrats, GuessedWordsView, InputView};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("=== Word-Guess Game Example ===\n");

    let env = GameEnv::new("train");
    let mut store = store_factory(None);
    let mut input = InputView::new(store.state().success);

    for attempt in ["party", "pints", "train"] {
        input = input.with_value(attempt);
        let Some((guess, cleared)) = input.submit() else {
            break;
        };
        input = cleared;

        println!("Guessing '{guess}'...");
        store
            .dispatch_effect(guess_word(guess), &env)
            .await
            .unwrap();

        let state = store.state();
        let words = GuessedWordsView::new(&state.guessed_words);
        for row in words.rows() {
            println!("  {} -> {} matching letters", row.word, row.letter_match_count);
        }

        if let Some(message) = Congrats::new(state.success).message() {
            println!("\n{message}");
        }
    }

    println!(
        "\nForm still visible: {}",
        InputView::new(store.state().success).is_visible()
    );
    println!("Actions dispatched: {}", store.history().records().len());

    println!("\n=== Example Complete ===");
}
