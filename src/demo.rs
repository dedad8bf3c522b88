//! Scripted walkthrough of the counter rules on two restaurants.

use crate::record::{CountedRecord, Record, Restaurant};
use crate::ui::Output;

/// Result of one walkthrough step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub name: &'static str,
    pub expected: u64,
    pub actual: u64,
}

impl StepOutcome {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

/// Run the walkthrough, reporting each step through `output`.
///
/// Steps: set to 50, add 25, reject -5, and confirm a second restaurant
/// is untouched by all of it.
pub fn run_demo(output: &Output) -> Vec<StepOutcome> {
    let mut restaurant = Restaurant::new("Tony's Pizza", "Italian");
    let other = Restaurant::new("Sushi Central", "Japanese");
    let mut outcomes = Vec::new();

    output.record(&restaurant);
    output.info(&restaurant.greeting());

    output.step("Setting customers served to 50");
    report(output, restaurant.set_counter(50));
    outcomes.push(StepOutcome {
        name: "set to 50",
        expected: 50,
        actual: restaurant.count(),
    });

    output.step("Adding 25 customers");
    report(output, restaurant.increment_counter(25));
    outcomes.push(StepOutcome {
        name: "increment by 25",
        expected: 75,
        actual: restaurant.count(),
    });

    output.step("Setting customers served to -5");
    report(output, restaurant.set_counter(-5));
    outcomes.push(StepOutcome {
        name: "reject negative set",
        expected: 75,
        actual: restaurant.count(),
    });

    outcomes.push(StepOutcome {
        name: "second record untouched",
        expected: 0,
        actual: other.count(),
    });

    for outcome in &outcomes {
        let line = format!(
            "{}: expected {}, got {}",
            outcome.name, outcome.expected, outcome.actual
        );
        if outcome.passed() {
            output.success(&line);
        } else {
            output.error(&line);
        }
    }

    outcomes
}

fn report(output: &Output, result: Result<(), crate::record::CounterError>) {
    if let Err(e) = result {
        output.warn(&e.to_string());
    }
}
