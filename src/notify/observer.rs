//! Subject/observer fan-out.
//!
//! The registry has set semantics keyed on pointer identity: registering the
//! same `Rc` twice is a no-op and unregistering removes that exact `Rc`.
//! Mutation needs `&mut Subject`, so the registry is fixed for the duration
//! of any `publish`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, trace};

/// Receiver of published values.
pub trait Observer<T> {
    fn notify(&self, value: &T);
}

/// Registration side of a subject.
pub trait Observable<T> {
    /// Returns `false` when the observer was already registered.
    fn register(&mut self, observer: Rc<dyn Observer<T>>) -> bool;

    /// Returns `false` when the observer was not registered.
    fn unregister(&mut self, observer: &Rc<dyn Observer<T>>) -> bool;
}

/// Holds registered observers and publishes values to them.
///
/// # Example
///
/// ```rust
/// use patterns::notify::{Observable, Observer, Subject, TvStation};
/// use std::rc::Rc;
///
/// let station = Rc::new(TvStation::default());
/// let mut reports: Subject<String> = Subject::new();
/// reports.register(station.clone());
///
/// reports.publish(&"Cloudy, Temperature: 23 degrees".to_string());
///
/// assert_eq!(station.received(), vec!["Cloudy, Temperature: 23 degrees"]);
/// ```
pub struct Subject<T> {
    observers: Vec<Rc<dyn Observer<T>>>,
}

impl<T> Subject<T> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn contains(&self, observer: &Rc<dyn Observer<T>>) -> bool {
        self.observers.iter().any(|o| same_observer(o, observer))
    }

    /// Deliver `value` once to every registered observer.
    ///
    /// Delivery order is not part of the contract.
    pub fn publish(&self, value: &T) {
        debug!(observers = self.observers.len(), "Publishing");
        for observer in &self.observers {
            observer.notify(value);
        }
    }
}

impl<T> Observable<T> for Subject<T> {
    fn register(&mut self, observer: Rc<dyn Observer<T>>) -> bool {
        if self.contains(&observer) {
            trace!("Observer already registered");
            return false;
        }
        self.observers.push(observer);
        debug!(observers = self.observers.len(), "Observer registered");
        true
    }

    fn unregister(&mut self, observer: &Rc<dyn Observer<T>>) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| !same_observer(o, observer));
        let removed = self.observers.len() != before;
        if removed {
            debug!(observers = self.observers.len(), "Observer unregistered");
        }
        removed
    }
}

impl<T> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Subject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("observers", &self.observers.len())
            .finish()
    }
}

fn same_observer<T>(a: &Rc<dyn Observer<T>>, b: &Rc<dyn Observer<T>>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

/// Observer that keeps every report it receives.
#[derive(Debug, Default)]
pub struct TvStation {
    received: RefCell<Vec<String>>,
}

impl TvStation {
    pub fn received(&self) -> Vec<String> {
        self.received.borrow().clone()
    }
}

impl Observer<String> for TvStation {
    fn notify(&self, report: &String) {
        trace!(%report, "TV station got report");
        self.received.borrow_mut().push(report.clone());
    }
}

/// Observer that keeps every report it receives.
#[derive(Debug, Default)]
pub struct EmailReceiver {
    received: RefCell<Vec<String>>,
}

impl EmailReceiver {
    pub fn received(&self) -> Vec<String> {
        self.received.borrow().clone()
    }
}

impl Observer<String> for EmailReceiver {
    fn notify(&self, report: &String) {
        trace!(%report, "Email receiver got report");
        self.received.borrow_mut().push(report.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(text: &str) -> String {
        text.to_string()
    }

    #[test]
    fn publish_reaches_each_observer_once() {
        let tv = Rc::new(TvStation::default());
        let email = Rc::new(EmailReceiver::default());
        let mut subject: Subject<String> = Subject::new();
        subject.register(tv.clone());
        subject.register(email.clone());

        subject.publish(&report("msg"));

        assert_eq!(tv.received(), vec!["msg"]);
        assert_eq!(email.received(), vec!["msg"]);
    }

    #[test]
    fn unregistered_observer_stops_receiving() {
        let tv = Rc::new(TvStation::default());
        let email = Rc::new(EmailReceiver::default());
        let email_handle: Rc<dyn Observer<String>> = email.clone();
        let mut subject: Subject<String> = Subject::new();
        subject.register(tv.clone());
        subject.register(email_handle.clone());

        subject.publish(&report("first"));
        assert!(subject.unregister(&email_handle));
        subject.publish(&report("second"));

        assert_eq!(email.received(), vec!["first"]);
        assert_eq!(tv.received(), vec!["first", "second"]);
    }

    #[test]
    fn registering_twice_is_a_no_op() {
        let tv = Rc::new(TvStation::default());
        let mut subject: Subject<String> = Subject::new();

        assert!(subject.register(tv.clone()));
        assert!(!subject.register(tv.clone()));
        assert_eq!(subject.len(), 1);

        subject.publish(&report("once"));
        assert_eq!(tv.received(), vec!["once"]);
    }

    #[test]
    fn identity_not_equality_decides_membership() {
        let first = Rc::new(TvStation::default());
        let second = Rc::new(TvStation::default());
        let mut subject: Subject<String> = Subject::new();

        assert!(subject.register(first.clone()));
        assert!(subject.register(second.clone()));
        assert_eq!(subject.len(), 2);
    }

    #[test]
    fn unregistering_unknown_observer_returns_false() {
        let tv: Rc<dyn Observer<String>> = Rc::new(TvStation::default());
        let mut subject: Subject<String> = Subject::new();

        assert!(!subject.unregister(&tv));
        assert!(subject.is_empty());
    }

    #[test]
    fn publish_with_no_observers_is_harmless() {
        let subject: Subject<String> = Subject::default();
        subject.publish(&report("nobody"));
        assert!(subject.is_empty());
    }
}
