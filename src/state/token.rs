//! The `State` trait for state tokens.

use crate::variant::Variant;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state tokens owned by a state machine.
///
/// A state token is one member of a closed set; exactly one is current for a
/// given owner. All methods are pure.
///
/// # Required Traits
///
/// - `Variant`: every state has a tag used for logging
/// - `Clone` + `PartialEq`: states are plain values that can be compared
/// - `Debug`: for diagnostics
/// - `Serialize` + `Deserialize`: states can be captured outside the owner
///
/// # Example
///
/// ```rust
/// use patterns::state::State;
/// use patterns::Variant;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl Variant for Door {
///     fn tag(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// impl State for Door {
///     fn describe(&self) -> String {
///         format!("The door is {}", self.tag().to_lowercase())
///     }
/// }
///
/// assert_eq!(Door::Open.describe(), "The door is open");
/// assert!(!Door::Closed.is_final());
/// ```
pub trait State:
    Variant + Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de>
{
    /// State-specific, deterministic description of this state.
    fn describe(&self) -> String;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Initial,
        Complete,
        Failed,
    }

    impl Variant for TestState {
        fn tag(&self) -> &str {
            match self {
                Self::Initial => "Initial",
                Self::Complete => "Complete",
                Self::Failed => "Failed",
            }
        }
    }

    impl State for TestState {
        fn describe(&self) -> String {
            format!("state {}", self.tag())
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Complete | Self::Failed)
        }

        fn is_error(&self) -> bool {
            matches!(self, Self::Failed)
        }
    }

    #[test]
    fn is_final_identifies_terminal_states() {
        assert!(!TestState::Initial.is_final());
        assert!(TestState::Complete.is_final());
        assert!(TestState::Failed.is_final());
    }

    #[test]
    fn is_error_identifies_error_states() {
        assert!(!TestState::Initial.is_error());
        assert!(!TestState::Complete.is_error());
        assert!(TestState::Failed.is_error());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Complete;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
