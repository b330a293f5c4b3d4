//! Click Counter
//!
//! This example demonstrates the counter state machine with pure commands.
//!
//! Key concepts:
//! - Pure commands - increment/decrement return new values
//! - A refused decrement surfaces a message instead of clamping
//! - The error dismisses on the next increment
//!
//! Run with: cargo run --example counter

use guesswork::counter::Counter;
use guesswork::view::CounterView;

fn show(counter: &Counter) {
    let view = CounterView::new(counter);
    println!("{}", view.display());
    let error = view.error();
    if !error.is_empty() {
        println!("  ! {error}");
    }
}

fn main() {
    println!("=== Click Counter Example ===\n");

    let counter = Counter::new();
    show(&counter);

    println!("\nClicking increment twice...");
    let counter = counter.increment().increment();
    show(&counter);

    println!("\nClicking decrement three times...");
    let counter = counter.decrement().decrement().decrement();
    show(&counter);

    println!("\nClicking increment again...");
    let counter = counter.increment();
    show(&counter);

    println!("\n=== Example Complete ===");
}
