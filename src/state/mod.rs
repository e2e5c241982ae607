//! State-driven behavior switching.
//!
//! A state owner holds exactly one current token out of a closed set. Each
//! trigger either moves it to the next token in a single assignment or is
//! rejected, leaving the current token in place. Queries never transition.

mod machine;
mod token;

pub use machine::{TransitionError, Trigger, Ui, UiState};
pub use token::State;
