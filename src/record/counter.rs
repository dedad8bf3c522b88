//! Non-negative counter with validated mutation.
//!
//! Input is signed so callers can pass whatever they read from the user;
//! negative values are rejected and the stored count is left untouched.

use serde::Serialize;
use std::fmt;

/// Reasons a counter update was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterError {
    /// `set` was called with a negative value
    NegativeValue { label: String, value: i64 },
    /// `increment` was called with a negative delta
    NegativeDelta { label: String, delta: i64 },
}

impl fmt::Display for CounterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CounterError::NegativeValue { label, value } => {
                write!(f, "Number of {} can't be negative! (got {})", label, value)
            }
            CounterError::NegativeDelta { label, delta } => {
                write!(f, "Additional {} can't be negative! (got {})", label, delta)
            }
        }
    }
}

impl std::error::Error for CounterError {}

/// A labelled count that never goes below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Counter {
    label: String,
    count: u64,
}

impl Counter {
    /// Create a counter starting at 0.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            count: 0,
        }
    }

    pub fn get(&self) -> u64 {
        self.count
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the count with `value` if it is non-negative.
    pub fn set(&mut self, value: i64) -> Result<(), CounterError> {
        let value = u64::try_from(value).map_err(|_| CounterError::NegativeValue {
            label: self.label.clone(),
            value,
        })?;
        self.count = value;
        Ok(())
    }

    /// Add `delta` to the count if it is non-negative. Saturates at `u64::MAX`.
    pub fn increment(&mut self, delta: i64) -> Result<(), CounterError> {
        let delta = u64::try_from(delta).map_err(|_| CounterError::NegativeDelta {
            label: self.label.clone(),
            delta,
        })?;
        self.count = self.count.saturating_add(delta);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_counter_starts_at_zero() {
        let counter = Counter::new("customers");
        assert_eq!(counter.get(), 0);
        assert_eq!(counter.label(), "customers");
    }

    #[test]
    fn test_set_accepts_zero_and_positive() {
        let mut counter = Counter::new("customers");
        counter.set(50).unwrap();
        assert_eq!(counter.get(), 50);
        counter.set(0).unwrap();
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn test_set_negative_leaves_count() {
        let mut counter = Counter::new("customers");
        counter.set(10).unwrap();

        let err = counter.set(-1).unwrap_err();
        assert_eq!(counter.get(), 10);
        assert_eq!(
            err,
            CounterError::NegativeValue {
                label: "customers".to_string(),
                value: -1
            }
        );
    }

    #[test]
    fn test_increment_negative_leaves_count() {
        let mut counter = Counter::new("customers");
        counter.set(5).unwrap();

        assert!(counter.increment(-3).is_err());
        assert_eq!(counter.get(), 5);
    }

    #[test]
    fn test_increment_saturates() {
        let mut counter = Counter::new("customers");
        counter.set(i64::MAX).unwrap();
        counter.increment(i64::MAX).unwrap();
        counter.increment(i64::MAX).unwrap();
        assert_eq!(counter.get(), u64::MAX);
    }

    #[test]
    fn test_reset() {
        let mut counter = Counter::new("login attempts");
        counter.increment(3).unwrap();
        counter.reset();
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn test_error_messages() {
        let mut counter = Counter::new("customers");
        let set_err = counter.set(-5).unwrap_err();
        assert_eq!(
            set_err.to_string(),
            "Number of customers can't be negative! (got -5)"
        );

        let inc_err = counter.increment(-2).unwrap_err();
        assert_eq!(
            inc_err.to_string(),
            "Additional customers can't be negative! (got -2)"
        );
    }

    #[test]
    fn test_display() {
        let mut counter = Counter::new("customers");
        counter.set(7).unwrap();
        assert_eq!(counter.to_string(), "7 customers");
    }
}
