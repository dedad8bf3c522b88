//! Movie ticket pricing by age.

use anyhow::Result;

use super::Prompter;
use crate::config::TicketConfig;
use crate::ui::format::price;
use crate::ui::Output;

/// One priced age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketSale {
    pub age: u32,
    pub price: u32,
}

/// Price in whole dollars for `age` under the configured tiers.
pub fn price_for_age(age: u32, tiers: &TicketConfig) -> u32 {
    if age < tiers.free_under_age {
        0
    } else if age <= tiers.child_max_age {
        tiers.child_price
    } else {
        tiers.adult_price
    }
}

/// Price ages until `sentinel`. Answers that are not a whole number are
/// reported and asked again.
pub fn run_tickets(
    prompter: &mut dyn Prompter,
    tiers: &TicketConfig,
    sentinel: &str,
    output: &Output,
) -> Result<Vec<TicketSale>> {
    let prompt = format!("Enter your age (or type '{}' to exit)", sentinel);
    let mut sales = Vec::new();

    loop {
        let answer = prompter.ask(&prompt)?;
        if answer == sentinel {
            output.info("Exiting the program.");
            break;
        }

        let age: u32 = match answer.trim().parse() {
            Ok(age) => age,
            Err(_) => {
                output.warn(&format!("'{}' is not a valid age", answer));
                continue;
            }
        };

        let sale = TicketSale {
            age,
            price: price_for_age(age, tiers),
        };
        match sale.price {
            0 => output.success("Your movie ticket is free!"),
            p => output.success(&format!("Your movie ticket is {}.", price(u64::from(p)))),
        }
        sales.push(sale);
    }

    Ok(sales)
}
