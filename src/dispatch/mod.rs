//! Capability dispatch: resolving one operation to one implementation.
//!
//! - **Strategy**: the caller injects the policy as a predicate
//! - **Visitor**: the visited value's variant picks the operation
//! - **Chain**: the first handler in traversal order that accepts wins
//! - **Command** and **Template method**: behavior bound as objects or hooks

mod chain;
mod command;
mod strategy;
mod template;
mod visitor;

pub use chain::{Button, TextView, TouchEvent, TouchHandler, ViewNode};
pub use command::{
    Command, CopyCommand, CutCommand, EditAction, EditorButton, EditorGui, EditorService,
    PasteCommand,
};
pub use strategy::{sum_with_condition, Condition};
pub use template::{Downloader, VideoDownloader, PROGRESS_STEP};
pub use visitor::{
    Item, Liquor, Necessity, PriceVisitor, TaxVisitor, Tobacco, Visitable, Visitor,
};
