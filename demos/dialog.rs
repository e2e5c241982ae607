//! Dialog builder
//!
//! This example builds dialogs fluently and shows how blank fields are
//! reported all at once.
//!
//! Run with: cargo run --example dialog

use patterns::creational::{Dialog, DialogBuildError};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Dialog Builder ===\n");

    match Dialog::builder()
        .title("Dialog Title")
        .content("Dialog Content")
        .build()
    {
        Ok(dialog) => println!("{dialog}"),
        Err(err) => println!("Unexpected error: {err}"),
    }

    let result = Dialog::builder()
        .title(" ")
        .content("Dialog Content")
        .confirm_text("")
        .build();

    if let Err(DialogBuildError::BlankFields(fields)) = result {
        println!("Rejected {} blank fields:", fields.len());
        for field in fields {
            println!("  - {field:?}");
        }
    }

    println!("\n=== Example Complete ===");
}
