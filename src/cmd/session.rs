//! Interactive session commands

use anyhow::Result;

use tally::config::Config;
use tally::session::{self, PollQuestion, TerminalPrompter, TicketSale};
use tally::ui::Output;

pub fn cmd_poll(output: &Output, config: &Config, vacation: bool) -> Result<()> {
    let question = if vacation {
        PollQuestion::vacation()
    } else {
        PollQuestion::from(&config.poll)
    };

    let mut prompter = TerminalPrompter;
    session::run_poll(&mut prompter, &question, &config.session.stop_answer, output)?;
    Ok(())
}

pub fn cmd_toppings(output: &Output, config: &Config) -> Result<()> {
    let mut prompter = TerminalPrompter;
    session::run_toppings(&mut prompter, &config.session.sentinel, output)?;
    Ok(())
}

pub fn cmd_tickets(output: &Output, config: &Config) -> Result<()> {
    let mut prompter = TerminalPrompter;
    let sales = session::run_tickets(
        &mut prompter,
        &config.tickets,
        &config.session.sentinel,
        output,
    )?;

    if !sales.is_empty() {
        output.detail(&ticket_summary(&sales));
    }
    Ok(())
}

fn ticket_summary(sales: &[TicketSale]) -> String {
    let total: u64 = sales.iter().map(|s| u64::from(s.price)).sum();
    format!(
        "{} ticket(s), {} total",
        sales.len(),
        tally::ui::format::price(total)
    )
}
