//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};

use crate::record::DEFAULT_PET_TYPE;
use crate::ui::OutputMode;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

// =========================================================================
// DEFAULT VALUE FUNCTIONS
// =========================================================================

default_fn!(default_pet_type, String, DEFAULT_PET_TYPE.to_string());
default_fn!(default_sentinel, String, "quit".to_string());
default_fn!(default_stop_answer, String, "no".to_string());
default_fn!(
    default_poll_question,
    String,
    "Which mountain would you like to climb someday?".to_string()
);
default_fn!(default_poll_verb, String, "climb".to_string());
default_fn!(default_free_under_age, u32, 3);
default_fn!(default_child_max_age, u32, 12);
default_fn!(default_child_price, u32, 10);
default_fn!(default_adult_price, u32, 15);

// =========================================================================
// CONFIG STRUCTS WITH DEFAULTS
// =========================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DefaultsConfig {
    /// Pet type used when `tally pet` gets no --type (default: dog)
    #[serde(default = "default_pet_type")]
    pub pet_type: String,
    /// Output mode when no --json/--quiet flag is given
    #[serde(default)]
    pub output: OutputMode,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            pet_type: default_pet_type(),
            output: OutputMode::default(),
        }
    }
}

/// Settings shared by the interactive input loops
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Literal input that ends the topping and ticket loops (default: quit)
    #[serde(default = "default_sentinel")]
    pub sentinel: String,
    /// Answer that stops a poll, compared case-insensitively (default: no)
    #[serde(default = "default_stop_answer")]
    pub stop_answer: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sentinel: default_sentinel(),
            stop_answer: default_stop_answer(),
        }
    }
}

/// Wording for the default poll
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PollConfig {
    #[serde(default = "default_poll_question")]
    pub question: String,
    /// Verb used in results: "{name} would like to {verb} {response}."
    #[serde(default = "default_poll_verb")]
    pub verb: String,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            question: default_poll_question(),
            verb: default_poll_verb(),
        }
    }
}

/// Movie ticket price tiers, in whole dollars
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TicketConfig {
    /// Ages strictly below this are free (default: 3)
    #[serde(default = "default_free_under_age")]
    pub free_under_age: u32,
    /// Ages up to and including this pay the child price (default: 12)
    #[serde(default = "default_child_max_age")]
    pub child_max_age: u32,
    #[serde(default = "default_child_price")]
    pub child_price: u32,
    #[serde(default = "default_adult_price")]
    pub adult_price: u32,
}

impl Default for TicketConfig {
    fn default() -> Self {
        Self {
            free_under_age: default_free_under_age(),
            child_max_age: default_child_max_age(),
            child_price: default_child_price(),
            adult_price: default_adult_price(),
        }
    }
}
