//! Strategy injection through caller-supplied predicates.
//!
//! A `Condition` is a pure predicate chosen by the caller. Dispatch code
//! applies it uniformly without knowing which policy it carries.

use std::fmt;

/// Pure predicate injected into a dispatch operation.
///
/// # Example
///
/// ```rust
/// use patterns::dispatch::{sum_with_condition, Condition};
///
/// let values: Vec<i64> = (1..=8).collect();
/// let is_even = Condition::new(|n: &i64| n % 2 == 0);
///
/// assert_eq!(sum_with_condition(&values, &is_even), 20);
/// assert_eq!(sum_with_condition(&values, &Condition::always()), 36);
/// ```
pub struct Condition<T> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Condition<T> {
    /// Create a condition from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Condition {
            predicate: Box::new(predicate),
        }
    }

    /// A condition that accepts every value.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// Check whether the condition accepts a value.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T> fmt::Debug for Condition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition").finish_non_exhaustive()
    }
}

/// Sum the values accepted by `condition`, in order.
///
/// The sum saturates at `i64::MIN` and `i64::MAX` instead of overflowing.
pub fn sum_with_condition(values: &[i64], condition: &Condition<i64>) -> i64 {
    values
        .iter()
        .filter(|value| condition.check(value))
        .fold(0i64, |total, value| total.saturating_add(*value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_to_eight() -> Vec<i64> {
        (1..=8).collect()
    }

    #[test]
    fn even_values_sum_to_twenty() {
        let is_even = Condition::new(|n: &i64| n % 2 == 0);
        assert_eq!(sum_with_condition(&one_to_eight(), &is_even), 20);
    }

    #[test]
    fn odd_values_sum_to_sixteen() {
        let is_odd = Condition::new(|n: &i64| n % 2 != 0);
        assert_eq!(sum_with_condition(&one_to_eight(), &is_odd), 16);
    }

    #[test]
    fn always_sums_everything() {
        assert_eq!(sum_with_condition(&one_to_eight(), &Condition::always()), 36);
    }

    #[test]
    fn empty_input_sums_to_zero() {
        assert_eq!(sum_with_condition(&[], &Condition::always()), 0);
    }

    #[test]
    fn sum_saturates_at_i64_bounds() {
        assert_eq!(
            sum_with_condition(&[i64::MAX, 1], &Condition::always()),
            i64::MAX
        );
        assert_eq!(
            sum_with_condition(&[i64::MIN, -1, -5], &Condition::always()),
            i64::MIN
        );
        assert_eq!(
            sum_with_condition(&[i64::MAX, 1, 2], &Condition::new(|n: &i64| n % 2 == 0)),
            2
        );
    }

    #[test]
    fn condition_can_capture_caller_state() {
        let threshold = 5;
        let above = Condition::new(move |n: &i64| *n > threshold);

        assert!(above.check(&6));
        assert!(!above.check(&5));
        assert_eq!(sum_with_condition(&one_to_eight(), &above), 21);
    }

    #[test]
    fn condition_is_deterministic() {
        let is_even = Condition::new(|n: &i64| n % 2 == 0);
        assert_eq!(is_even.check(&4), is_even.check(&4));
    }

    #[test]
    fn condition_works_on_other_types() {
        let non_empty = Condition::new(|s: &String| !s.is_empty());
        assert!(non_empty.check(&"x".to_string()));
        assert!(!non_empty.check(&String::new()));
    }
}
