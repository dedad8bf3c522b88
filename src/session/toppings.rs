//! Topping entry loop terminated by a sentinel word.

use anyhow::Result;

use super::Prompter;
use crate::ui::Output;

/// Collect toppings until the answer equals `sentinel` exactly.
pub fn run_toppings(
    prompter: &mut dyn Prompter,
    sentinel: &str,
    output: &Output,
) -> Result<Vec<String>> {
    let prompt = format!("Enter a topping (type '{}' to stop)", sentinel);
    let mut toppings = Vec::new();

    loop {
        let topping = prompter.ask(&prompt)?;
        if topping == sentinel {
            break;
        }
        output.step(&format!("Adding {} to your pizza.", topping));
        toppings.push(topping);
    }

    if toppings.is_empty() {
        output.info("No toppings added.");
    } else {
        output.success(&format!("Your pizza has: {}", toppings.join(", ")));
    }

    Ok(toppings)
}
