//! Ordered keeper of snapshots.

use super::error::SnapshotError;
use super::memento::Snapshot;
use tracing::{debug, warn};

/// Append-only, indexed list of snapshots.
///
/// The caretaker never looks inside the snapshots it keeps.
///
/// # Example
///
/// ```rust
/// use patterns::snapshot::{Caretaker, Originator, SnapshotError};
///
/// let mut originator = Originator::new("initial state".to_string());
/// let mut caretaker = Caretaker::new();
/// caretaker.save(originator.capture());
///
/// originator.set_state("State #2".to_string());
/// caretaker.save(originator.capture());
///
/// originator.restore(caretaker.restore_at(0).unwrap());
/// assert_eq!(originator.state(), "initial state");
///
/// assert_eq!(
///     caretaker.restore_at(2).unwrap_err(),
///     SnapshotError::InvalidIndex { index: 2, len: 2 }
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Caretaker<S> {
    snapshots: Vec<Snapshot<S>>,
}

impl<S> Default for Caretaker<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Caretaker<S> {
    /// Create an empty caretaker.
    pub fn new() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }

    /// Append a snapshot; it gets the next index.
    pub fn save(&mut self, snapshot: Snapshot<S>) {
        debug!(
            snapshot_id = %snapshot.id(),
            index = self.snapshots.len(),
            "Saved snapshot"
        );
        self.snapshots.push(snapshot);
    }

    /// Get the snapshot saved at `index`.
    pub fn restore_at(&self, index: usize) -> Result<&Snapshot<S>, SnapshotError> {
        self.snapshots.get(index).ok_or_else(|| {
            warn!(index, len = self.snapshots.len(), "Snapshot index out of range");
            SnapshotError::InvalidIndex {
                index,
                len: self.snapshots.len(),
            }
        })
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Originator;

    #[test]
    fn restore_at_returns_saved_snapshots_by_index() {
        let mut originator = Originator::new("s0".to_string());
        let s0 = originator.capture();
        originator.set_state("s1".to_string());
        let s1 = originator.capture();

        let mut caretaker = Caretaker::new();
        caretaker.save(s0.clone());
        caretaker.save(s1.clone());

        assert_eq!(caretaker.restore_at(0).unwrap(), &s0);
        assert_eq!(caretaker.restore_at(1).unwrap(), &s1);
        assert_eq!(
            caretaker.restore_at(2),
            Err(SnapshotError::InvalidIndex { index: 2, len: 2 })
        );
    }

    #[test]
    fn empty_caretaker_rejects_every_index() {
        let caretaker: Caretaker<String> = Caretaker::new();

        assert!(caretaker.is_empty());
        assert!(matches!(
            caretaker.restore_at(0),
            Err(SnapshotError::InvalidIndex { index: 0, len: 0 })
        ));
    }

    #[test]
    fn restoring_walks_back_and_forth() {
        let mut originator = Originator::new("initial state".to_string());
        let mut caretaker = Caretaker::new();
        caretaker.save(originator.capture());

        originator.set_state("State #1".to_string());
        originator.set_state("State #2".to_string());
        caretaker.save(originator.capture());

        originator.set_state("State #3".to_string());

        originator.restore(caretaker.restore_at(1).unwrap());
        assert_eq!(originator.state(), "State #2");

        originator.restore(caretaker.restore_at(0).unwrap());
        assert_eq!(originator.state(), "initial state");

        originator.restore(caretaker.restore_at(1).unwrap());
        assert_eq!(originator.state(), "State #2");
        assert_eq!(caretaker.len(), 2);
    }

    #[test]
    fn debug_output_hides_saved_states() {
        let originator = Originator::new("hunter2-secret".to_string());
        let mut caretaker = Caretaker::new();
        caretaker.save(originator.capture());

        assert!(!format!("{caretaker:?}").contains("hunter2-secret"));
        assert!(!format!("{:?}", caretaker.restore_at(0).unwrap()).contains("hunter2-secret"));
    }

    #[test]
    fn invalid_index_error_message() {
        let err = SnapshotError::InvalidIndex { index: 5, len: 1 };
        assert_eq!(err.to_string(), "Snapshot index 5 out of range (saved: 1)");
    }
}
