//! Memento
//!
//! This example saves editor states with a caretaker and restores them by
//! index, including an out-of-range request.
//!
//! Run with: cargo run --example memento

use patterns::snapshot::{Caretaker, Originator};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Memento ===\n");

    let mut originator = Originator::new("initial state".to_string());
    let mut caretaker = Caretaker::new();
    caretaker.save(originator.capture());

    originator.set_state("State #1".to_string());
    originator.set_state("State #2".to_string());
    caretaker.save(originator.capture());

    originator.set_state("State #3".to_string());
    println!("Current state: {}", originator.state());

    for index in [1, 0, 2] {
        match caretaker.restore_at(index) {
            Ok(snapshot) => {
                originator.restore(snapshot);
                println!(
                    "Restored snapshot {index} (captured {}): {}",
                    snapshot.captured_at().format("%H:%M:%S"),
                    originator.state()
                );
            }
            Err(err) => println!("Could not restore: {err}"),
        }
    }

    println!("\n=== Example Complete ===");
}
