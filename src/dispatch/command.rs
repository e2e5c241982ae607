//! Command objects bound to an editor service.

use crate::variant::Variant;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::debug;

crate::variant_enum! {
    /// Editing action performed by the service.
    pub enum EditAction {
        Copy,
        Cut,
        Paste,
    }
}

/// Receiver that carries out editing actions.
#[derive(Debug, Default)]
pub struct EditorService {
    performed: RefCell<Vec<EditAction>>,
}

impl EditorService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copy(&self) {
        self.perform(EditAction::Copy);
    }

    pub fn cut(&self) {
        self.perform(EditAction::Cut);
    }

    pub fn paste(&self) {
        self.perform(EditAction::Paste);
    }

    /// Actions performed so far, oldest first.
    pub fn performed(&self) -> Vec<EditAction> {
        self.performed.borrow().clone()
    }

    fn perform(&self, action: EditAction) {
        debug!(action = action.tag(), "Editor action");
        self.performed.borrow_mut().push(action);
    }
}

/// A request packaged as an object.
pub trait Command {
    fn execute(&self);
}

pub struct CopyCommand {
    service: Rc<EditorService>,
}

impl CopyCommand {
    pub fn new(service: Rc<EditorService>) -> Self {
        Self { service }
    }
}

impl Command for CopyCommand {
    fn execute(&self) {
        self.service.copy();
    }
}

pub struct CutCommand {
    service: Rc<EditorService>,
}

impl CutCommand {
    pub fn new(service: Rc<EditorService>) -> Self {
        Self { service }
    }
}

impl Command for CutCommand {
    fn execute(&self) {
        self.service.cut();
    }
}

pub struct PasteCommand {
    service: Rc<EditorService>,
}

impl PasteCommand {
    pub fn new(service: Rc<EditorService>) -> Self {
        Self { service }
    }
}

impl Command for PasteCommand {
    fn execute(&self) {
        self.service.paste();
    }
}

/// Button that runs its command when clicked.
pub struct EditorButton {
    command: Box<dyn Command>,
}

impl EditorButton {
    pub fn new<C>(command: C) -> Self
    where
        C: Command + 'static,
    {
        Self {
            command: Box::new(command),
        }
    }

    pub fn click(&self) {
        self.command.execute();
    }
}

impl fmt::Debug for EditorButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorButton").finish_non_exhaustive()
    }
}

/// Toolbar wiring one button per editing command.
///
/// # Example
///
/// ```rust
/// use patterns::dispatch::{EditAction, EditorGui, EditorService};
/// use std::rc::Rc;
///
/// let service = Rc::new(EditorService::new());
/// let gui = EditorGui::new(Rc::clone(&service));
///
/// gui.copy_button.click();
/// gui.paste_button.click();
///
/// assert_eq!(service.performed(), vec![EditAction::Copy, EditAction::Paste]);
/// ```
#[derive(Debug)]
pub struct EditorGui {
    pub copy_button: EditorButton,
    pub cut_button: EditorButton,
    pub paste_button: EditorButton,
}

impl EditorGui {
    pub fn new(service: Rc<EditorService>) -> Self {
        Self {
            copy_button: EditorButton::new(CopyCommand::new(Rc::clone(&service))),
            cut_button: EditorButton::new(CutCommand::new(Rc::clone(&service))),
            paste_button: EditorButton::new(PasteCommand::new(service)),
        }
    }
}
