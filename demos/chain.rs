//! Chain of Responsibility
//!
//! This example routes a touch event through a small view tree.
//!
//! Key concepts:
//! - Each node offers the event to its own handler first
//! - Children are tried left to right, depth first
//! - The first handler that accepts stops the traversal
//!
//! Run with: cargo run --example chain

use patterns::dispatch::{Button, TextView, TouchEvent, ViewNode};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Chain of Responsibility ===\n");

    let event = TouchEvent { x: 12, y: 40 };

    let screen = ViewNode::new(TextView).with_child(
        ViewNode::new(TextView).with_child(ViewNode::new(Button).with_child(ViewNode::new(TextView))),
    );
    println!(
        "Screen with a button handled the touch: {}",
        screen.handle_touch_event(&event)
    );

    let label_only = ViewNode::with_children(TextView, vec![ViewNode::new(TextView)]);
    println!(
        "Screen with only labels handled the touch: {}",
        label_only.handle_touch_event(&event)
    );

    println!("\n=== Example Complete ===");
}
