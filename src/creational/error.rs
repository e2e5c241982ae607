//! Creational error types.

use super::builder::DialogField;
use thiserror::Error;

/// Errors raised by factories
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FactoryError {
    /// The factory has no product for the requested kind
    #[error("{factory} cannot build transport '{variant}'")]
    UnsupportedVariant {
        factory: &'static str,
        variant: String,
    },
}

/// Errors raised when building a dialog
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DialogBuildError {
    /// Every field that was set to blank text
    #[error("Dialog fields set to blank text: {0:?}")]
    BlankFields(Vec<DialogField>),
}
