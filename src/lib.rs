//! Patterns: a catalog of behavioral, structural and creational design
//! patterns expressed with traits, enums and ownership.
//!
//! Every closed hierarchy is an enum with a [`Variant`] tag; every open
//! capability is a trait. Wrappers own what they wrap, and shared wiring is
//! explicit (`Rc` in the notification types, borrowed devices in remotes).
//!
//! # Modules
//!
//! - [`dispatch`]: strategy, visitor, chain of responsibility, command,
//!   template method
//! - [`composition`]: composite, decorator, bridge, proxy, adapter, iterator
//! - [`state`]: a loading-screen state machine
//! - [`notify`]: observer and mediator
//! - [`snapshot`]: memento with an indexed caretaker
//! - [`creational`]: factories, builder, prototype, counter
//!
//! # Example
//!
//! ```rust
//! use patterns::dispatch::{sum_with_condition, Condition};
//! use patterns::state::{Trigger, Ui};
//!
//! let values: Vec<i64> = (1..=8).collect();
//! let even = Condition::new(|x: &i64| x % 2 == 0);
//! assert_eq!(sum_with_condition(&values, &even), 20);
//!
//! let mut ui = Ui::new();
//! ui.advance(Trigger::Fetch).unwrap();
//! assert_eq!(ui.describe(), "Loading, please be patient");
//! ```

mod macros;

pub mod composition;
pub mod creational;
pub mod dispatch;
pub mod notify;
pub mod snapshot;
pub mod state;
pub mod variant;

pub use variant::Variant;
