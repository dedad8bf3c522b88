//! # Tally - typed entity records
//!
//! Tally hosts a handful of small records (restaurants, users, dogs, pets)
//! that carry fixed named fields and, for some, a counter that can never go
//! negative. It also ships the line-by-line console sessions that go with
//! them: a poll, a topping list and a ticket counter.
//!
//! ## Modules
//!
//! - [`record`] - Record types, the [`record::Record`] trait and validated counters
//! - [`session`] - Interactive input loops driven by a [`session::Prompter`]
//! - [`config`] - Optional `.tally/config.md` configuration
//! - [`ui`] - Console output in human, JSON or quiet mode
//! - [`demo`] - Scripted walkthrough of the counter rules
//!
//! ## Example
//!
//! ```
//! use tally::record::{CountedRecord, Record, Restaurant};
//!
//! let mut restaurant = Restaurant::new("Tony's Pizza", "Italian");
//! restaurant.set_counter(50).unwrap();
//! restaurant.increment_counter(25).unwrap();
//! assert!(restaurant.set_counter(-5).is_err());
//! assert_eq!(restaurant.count(), 75);
//! println!("{}", restaurant.summary());
//! ```

pub mod config;
pub mod demo;
pub mod record;
pub mod session;
pub mod ui;

/// Default path constants for tally's directory structure.
pub mod paths {
    /// Project-local directory: `.tally`
    pub const TALLY_DIR: &str = ".tally";
    /// Project config file: `.tally/config.md`
    pub const CONFIG_FILE: &str = ".tally/config.md";
}
