//! Snapshot error types.

use thiserror::Error;

/// Errors that can occur when retrieving snapshots
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SnapshotError {
    /// Requested index is outside the caretaker's current bounds
    #[error("Snapshot index {index} out of range (saved: {len})")]
    InvalidIndex { index: usize, len: usize },
}
