//! Loading screen state machine
//!
//! This example walks a screen through Idle -> Loading -> Done.
//!
//! Key concepts:
//! - Exactly one current state at a time
//! - Each trigger moves to the next state or is rejected
//! - Describing the state never transitions
//!
//! Run with: cargo run --example ui_state

use patterns::state::{Trigger, Ui};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Loading Screen State ===\n");

    let mut ui = Ui::new();
    println!("{}", ui.describe());

    let steps = [
        Trigger::Fetch,
        Trigger::Complete("Hello World".to_string()),
        Trigger::Fetch,
    ];

    for trigger in steps {
        match ui.advance(trigger) {
            Ok(_) => println!("{}", ui.describe()),
            Err(err) => println!("Rejected: {err}"),
        }
    }

    println!("\n=== Example Complete ===");
}
