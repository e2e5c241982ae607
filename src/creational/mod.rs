//! Object creation: factories, a validating builder, prototypes and an
//! explicitly owned counter.
//!
//! The factory modules each declare their own `TransportType`, so they are
//! addressed by path rather than re-exported here.

pub mod abstract_factory;
pub mod builder;
pub mod counter;
pub mod error;
pub mod factory;
pub mod prototype;

pub use builder::{Dialog, DialogBuilder, DialogField};
pub use counter::Counter;
pub use error::{DialogBuildError, FactoryError};
pub use factory::Transport;
pub use prototype::News;
