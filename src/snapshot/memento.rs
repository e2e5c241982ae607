//! Originator and its opaque snapshots.

use chrono::{DateTime, Utc};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

/// Immutable capture of an originator's state.
///
/// The captured value is only reachable by [`Originator::restore`]; holders
/// can see when a snapshot was taken and its id, nothing else. `Debug`
/// output follows the same rule.
#[derive(Clone, PartialEq)]
pub struct Snapshot<S> {
    id: Uuid,
    captured_at: DateTime<Utc>,
    state: S,
}

impl<S> Snapshot<S> {
    /// Unique snapshot identifier
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// When the snapshot was captured
    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }
}

impl<S> fmt::Debug for Snapshot<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("id", &self.id)
            .field("captured_at", &self.captured_at)
            .finish_non_exhaustive()
    }
}

/// Owner of mutable state that can be captured and restored.
///
/// The originator keeps no history of its own; pass snapshots to a
/// [`Caretaker`](super::Caretaker).
///
/// # Example
///
/// ```rust
/// use patterns::snapshot::Originator;
///
/// let mut editor = Originator::new("draft".to_string());
/// let saved = editor.capture();
///
/// editor.set_state("final".to_string());
/// editor.restore(&saved);
///
/// assert_eq!(editor.state(), "draft");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Originator<S> {
    state: S,
}

impl<S: Clone> Originator<S> {
    pub fn new(state: S) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn set_state(&mut self, state: S) {
        self.state = state;
    }

    /// Capture the current state.
    pub fn capture(&self) -> Snapshot<S> {
        let snapshot = Snapshot {
            id: Uuid::new_v4(),
            captured_at: Utc::now(),
            state: self.state.clone(),
        };
        debug!(snapshot_id = %snapshot.id, "Captured snapshot");
        snapshot
    }

    /// Replace the current state with the one held by `snapshot`.
    pub fn restore(&mut self, snapshot: &Snapshot<S>) {
        debug!(snapshot_id = %snapshot.id, "Restoring snapshot");
        self.state = snapshot.state.clone();
    }
}
