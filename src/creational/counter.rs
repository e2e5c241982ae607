//! Explicitly owned counter.
//!
//! There is no global instance; callers that want one counter shared
//! across components pass the same value (or an `Rc<RefCell<Counter>>`).

use tracing::trace;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counter {
    count: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment, then return the new count. The first call returns 1.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u64 {
        self.count += 1;
        trace!(count = self.count, "Counter advanced");
        self.count
    }

    pub fn current(&self) -> u64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn next_pre_increments() {
        let mut counter = Counter::new();
        assert_eq!(counter.current(), 0);
        assert_eq!(counter.next(), 1);
        assert_eq!(counter.next(), 2);
        assert_eq!(counter.current(), 2);
    }

    #[test]
    fn separate_counters_do_not_share_state() {
        let mut a = Counter::new();
        let mut b = Counter::new();
        a.next();
        a.next();

        assert_eq!(b.next(), 1);
    }

    #[test]
    fn shared_counter_is_seen_by_every_holder() {
        let shared = Rc::new(RefCell::new(Counter::new()));
        let first = Rc::clone(&shared);
        let second = Rc::clone(&shared);

        first.borrow_mut().next();
        assert_eq!(second.borrow_mut().next(), 2);
    }
}
