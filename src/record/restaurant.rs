//! Restaurant record with a served-customers counter.

use serde::Serialize;

use super::{CountedRecord, Counter, Record};

/// Label used for the served-customers counter.
pub const SERVED_LABEL: &str = "customers";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Restaurant {
    name: String,
    cuisine_type: String,
    number_served: Counter,
}

impl Restaurant {
    pub fn new(name: impl Into<String>, cuisine_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cuisine_type: cuisine_type.into(),
            number_served: Counter::new(SERVED_LABEL),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cuisine_type(&self) -> &str {
        &self.cuisine_type
    }

    /// Number of customers served so far
    pub fn number_served(&self) -> u64 {
        self.number_served.get()
    }

    /// One-line summary: "{name} serves {cuisine} cuisine."
    pub fn tagline(&self) -> String {
        format!("{} serves {} cuisine.", self.name, self.cuisine_type)
    }
}

impl Record for Restaurant {
    fn kind(&self) -> &'static str {
        "restaurant"
    }

    fn describe(&self) -> Vec<String> {
        vec![
            format!("Restaurant Name: {}", self.name),
            format!("Cuisine Type: {}", self.cuisine_type),
            format!("Customers Served: {}", self.number_served.get()),
        ]
    }

    fn greeting(&self) -> String {
        format!("{} is now open!", self.name)
    }
}

impl CountedRecord for Restaurant {
    fn counter(&self) -> &Counter {
        &self.number_served
    }

    fn counter_mut(&mut self) -> &mut Counter {
        &mut self.number_served
    }
}
