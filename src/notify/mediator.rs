//! Mediator routing dialog widget events.
//!
//! Widgets never reference each other. Each holds the single mediator it
//! was built with and reports through a tagged `NotifyType` payload.

use crate::variant::Variant;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Notification payload, one variant per widget kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotifyType {
    CheckBox { name: String, checked: bool },
    RadioButton { name: String, selected: usize },
    Button { name: String },
}

impl Variant for NotifyType {
    fn tag(&self) -> &str {
        match self {
            Self::CheckBox { .. } => "CheckBox",
            Self::RadioButton { .. } => "RadioButton",
            Self::Button { .. } => "Button",
        }
    }
}

/// Single entry point every widget reports to.
pub trait Mediator {
    fn notify(&self, event: NotifyType);
}

/// Mediator that reacts to each payload and keeps a log of its reactions.
#[derive(Debug, Default)]
pub struct DialogMediator {
    log: RefCell<Vec<String>>,
}

impl DialogMediator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reactions so far, oldest first.
    pub fn log(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl Mediator for DialogMediator {
    fn notify(&self, event: NotifyType) {
        debug!(kind = event.tag(), "Mediator notified");
        let reaction = match event {
            NotifyType::CheckBox { name, checked } => format!("{name} is checked {checked}"),
            NotifyType::RadioButton { name, selected } => {
                format!("{name} is selected {selected}")
            }
            NotifyType::Button { name } => format!("{name} clicked"),
        };
        self.log.borrow_mut().push(reaction);
    }
}

pub struct CheckBox {
    name: String,
    mediator: Rc<dyn Mediator>,
}

impl CheckBox {
    pub fn new(name: impl Into<String>, mediator: Rc<dyn Mediator>) -> Self {
        Self {
            name: name.into(),
            mediator,
        }
    }

    pub fn on_check(&self, checked: bool) {
        self.mediator.notify(NotifyType::CheckBox {
            name: self.name.clone(),
            checked,
        });
    }
}

pub struct RadioButton {
    name: String,
    mediator: Rc<dyn Mediator>,
}

impl RadioButton {
    pub fn new(name: impl Into<String>, mediator: Rc<dyn Mediator>) -> Self {
        Self {
            name: name.into(),
            mediator,
        }
    }

    pub fn select(&self, selected: usize) {
        self.mediator.notify(NotifyType::RadioButton {
            name: self.name.clone(),
            selected,
        });
    }
}

pub struct DialogButton {
    name: String,
    mediator: Rc<dyn Mediator>,
}

impl DialogButton {
    pub fn new(name: impl Into<String>, mediator: Rc<dyn Mediator>) -> Self {
        Self {
            name: name.into(),
            mediator,
        }
    }

    pub fn on_click(&self) {
        self.mediator.notify(NotifyType::Button {
            name: self.name.clone(),
        });
    }
}

/// Composition root: one mediator and the widgets wired to it.
///
/// # Example
///
/// ```rust
/// use patterns::notify::Dialog;
///
/// let dialog = Dialog::new();
/// dialog.check_box.on_check(true);
/// dialog.radio_button.select(2);
/// dialog.button.on_click();
///
/// assert_eq!(
///     dialog.mediator().log(),
///     vec![
///         "myCheckBox is checked true",
///         "myRadioButton is selected 2",
///         "myButton clicked",
///     ]
/// );
/// ```
pub struct Dialog {
    mediator: Rc<DialogMediator>,
    pub check_box: CheckBox,
    pub radio_button: RadioButton,
    pub button: DialogButton,
}

impl Dialog {
    pub fn new() -> Self {
        let mediator = Rc::new(DialogMediator::new());
        Self {
            check_box: CheckBox::new("myCheckBox", mediator.clone()),
            radio_button: RadioButton::new("myRadioButton", mediator.clone()),
            button: DialogButton::new("myButton", mediator.clone()),
            mediator,
        }
    }

    pub fn mediator(&self) -> &DialogMediator {
        &self.mediator
    }
}

impl Default for Dialog {
    fn default() -> Self {
        Self::new()
    }
}
