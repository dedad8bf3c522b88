//! Entity records: small value types with fixed named fields.
//!
//! Every record can describe itself and produce a greeting or status line.
//! Records that carry a [`Counter`] also implement [`CountedRecord`], which
//! routes set/increment through the counter's validation.

use serde::Serialize;

pub mod counter;
pub mod dog;
pub mod pet;
pub mod restaurant;
pub mod user;

pub use counter::{Counter, CounterError};
pub use dog::Dog;
pub use pet::{Pet, DEFAULT_PET_TYPE};
pub use restaurant::Restaurant;
pub use user::User;

/// Read-only behavior shared by all records.
pub trait Record: Serialize {
    /// Short lowercase name of the record type ("restaurant", "user", ...)
    fn kind(&self) -> &'static str;

    /// One line per field, in declaration order.
    fn describe(&self) -> Vec<String>;

    /// Templated message built from the record's fields.
    fn greeting(&self) -> String;

    /// All description lines joined with newlines.
    fn summary(&self) -> String {
        self.describe().join("\n")
    }
}

/// A record with a validated, non-negative counter field.
pub trait CountedRecord: Record {
    fn counter(&self) -> &Counter;

    fn counter_mut(&mut self) -> &mut Counter;

    /// Current counter value
    fn count(&self) -> u64 {
        self.counter().get()
    }

    /// Replace the counter when `value >= 0`; otherwise leave it and report why.
    fn set_counter(&mut self, value: i64) -> Result<(), CounterError> {
        self.counter_mut().set(value)
    }

    /// Add `delta` when `delta >= 0`; otherwise leave the counter and report why.
    fn increment_counter(&mut self, delta: i64) -> Result<(), CounterError> {
        self.counter_mut().increment(delta)
    }
}
