//! Loading-screen state machine: Idle -> Loading -> Done.

use super::token::State;
use crate::variant::Variant;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// State of a screen that fetches remote data.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum UiState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Fetch in flight
    Loading,
    /// Fetch finished with the given payload
    Done(String),
}

impl Variant for UiState {
    fn tag(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::Loading => "Loading",
            Self::Done(_) => "Done",
        }
    }
}

impl State for UiState {
    fn describe(&self) -> String {
        match self {
            Self::Idle => "Call fetch to update state".to_string(),
            Self::Loading => "Loading, please be patient".to_string(),
            Self::Done(data) => format!("Show: {data}"),
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

/// Input that drives a [`Ui`] from one state to the next.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Trigger {
    /// A fetch was started
    Fetch,
    /// The fetch completed with a payload
    Complete(String),
}

impl Variant for Trigger {
    fn tag(&self) -> &str {
        match self {
            Self::Fetch => "Fetch",
            Self::Complete(_) => "Complete",
        }
    }
}

/// Errors that can occur when advancing a state machine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("No transition from state '{from}' on trigger '{trigger}'")]
    NoTransition { from: String, trigger: String },
}

/// Owner of exactly one current [`UiState`].
///
/// # Example
///
/// ```rust
/// use patterns::state::{State, Trigger, Ui, UiState};
///
/// let mut ui = Ui::new();
/// assert_eq!(ui.describe(), "Call fetch to update state");
///
/// ui.advance(Trigger::Fetch).unwrap();
/// ui.advance(Trigger::Complete("X".to_string())).unwrap();
///
/// assert_eq!(ui.current_state(), &UiState::Done("X".to_string()));
/// assert!(ui.current_state().is_final());
/// ```
#[derive(Debug, Default)]
pub struct Ui {
    current: UiState,
}

impl Ui {
    /// Create a machine in the `Idle` state.
    pub fn new() -> Self {
        Self {
            current: UiState::Idle,
        }
    }

    /// Get the current state (pure).
    pub fn current_state(&self) -> &UiState {
        &self.current
    }

    /// Describe the current state without transitioning.
    pub fn describe(&self) -> String {
        self.current.describe()
    }

    /// Apply a trigger to the current state.
    ///
    /// On success the previous state is discarded and the new one becomes
    /// current. Undefined (state, trigger) pairs leave the state untouched.
    pub fn advance(&mut self, trigger: Trigger) -> Result<&UiState, TransitionError> {
        let next = match (&self.current, trigger) {
            (UiState::Idle, Trigger::Fetch) => UiState::Loading,
            (UiState::Loading, Trigger::Complete(data)) => UiState::Done(data),
            (from, trigger) => {
                warn!(from = from.tag(), trigger = trigger.tag(), "Transition rejected");
                return Err(TransitionError::NoTransition {
                    from: from.tag().to_string(),
                    trigger: trigger.tag().to_string(),
                });
            }
        };

        debug!(from = self.current.tag(), to = next.tag(), "State transition");
        self.current = next;
        Ok(&self.current)
    }
}
