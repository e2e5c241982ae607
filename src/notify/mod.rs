//! Notification and mediation.
//!
//! Both mechanics decouple senders from receivers: a `Subject` fans a value
//! out to every registered observer, while a `Mediator` is the single place
//! widgets report to. Wiring uses `Rc`, so these types stay on one thread.

mod mediator;
mod observer;

pub use mediator::{
    CheckBox, Dialog, DialogButton, DialogMediator, Mediator, NotifyType, RadioButton,
};
pub use observer::{EmailReceiver, Observable, Observer, Subject, TvStation};
