//! Fluent dialog builder.
//!
//! Every field is optional. A field that was set must not be blank; all
//! blank fields are collected with `Validation` and reported together.

use super::error::DialogBuildError;
use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{debug, warn};

crate::variant_enum! {
    /// Settable dialog fields.
    pub enum DialogField {
        Title,
        Content,
        ConfirmText,
        CancelText,
    }
}

/// A dialog description; any subset of fields may be present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dialog {
    title: Option<String>,
    content: Option<String>,
    confirm_text: Option<String>,
    cancel_text: Option<String>,
}

impl Dialog {
    pub fn builder() -> DialogBuilder {
        DialogBuilder::new()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn confirm_text(&self) -> Option<&str> {
        self.confirm_text.as_deref()
    }

    pub fn cancel_text(&self) -> Option<&str> {
        self.cancel_text.as_deref()
    }
}

impl fmt::Display for Dialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_null(value: &Option<String>) -> &str {
            value.as_deref().unwrap_or("null")
        }

        write!(
            f,
            "Dialog(title={}, content={}, confirmText={}, cancelText={})",
            or_null(&self.title),
            or_null(&self.content),
            or_null(&self.confirm_text),
            or_null(&self.cancel_text),
        )
    }
}

/// Fluent builder for [`Dialog`].
///
/// # Example
///
/// ```rust
/// use patterns::creational::builder::Dialog;
///
/// let dialog = Dialog::builder()
///     .title("Dialog Title")
///     .content("Dialog Content")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     dialog.to_string(),
///     "Dialog(title=Dialog Title, content=Dialog Content, confirmText=null, cancelText=null)"
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct DialogBuilder {
    title: Option<String>,
    content: Option<String>,
    confirm_text: Option<String>,
    cancel_text: Option<String>,
}

impl DialogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    /// Build the dialog, or report every field that was set to blank text.
    pub fn build(self) -> Result<Dialog, DialogBuildError> {
        match self.validate() {
            Validation::Success(_) => {
                debug!("Built dialog");
                Ok(Dialog {
                    title: self.title,
                    content: self.content,
                    confirm_text: self.confirm_text,
                    cancel_text: self.cancel_text,
                })
            }
            Validation::Failure(errors) => {
                let fields: Vec<DialogField> = errors.iter().copied().collect();
                warn!(blank = fields.len(), "Rejected dialog with blank fields");
                Err(DialogBuildError::BlankFields(fields))
            }
        }
    }

    fn validate(&self) -> Validation<(), NonEmptyVec<DialogField>> {
        let checks = vec![
            not_blank(DialogField::Title, &self.title),
            not_blank(DialogField::Content, &self.content),
            not_blank(DialogField::ConfirmText, &self.confirm_text),
            not_blank(DialogField::CancelText, &self.cancel_text),
        ];

        Validation::all_vec(checks).map(|_| ())
    }
}

fn not_blank(
    field: DialogField,
    value: &Option<String>,
) -> Validation<(), NonEmptyVec<DialogField>> {
    match value {
        Some(text) if text.trim().is_empty() => Validation::fail(field),
        _ => Validation::success(()),
    }
}
