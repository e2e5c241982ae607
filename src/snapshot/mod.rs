//! Snapshot and restore.
//!
//! An `Originator` captures its state into an opaque `Snapshot`; a
//! `Caretaker` keeps snapshots in save order and hands them back by index.

mod caretaker;
mod memento;

pub mod error;

pub use caretaker::Caretaker;
pub use error::SnapshotError;
pub use memento::{Originator, Snapshot};
