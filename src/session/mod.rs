//! Interactive console sessions.
//!
//! Each session reads answers one at a time from a [`Prompter`] and reports
//! through an [`Output`](crate::ui::Output). Every read completes before the
//! next prompt is issued.

use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub mod poll;
pub mod tickets;
pub mod toppings;

pub use poll::{run_poll, PollQuestion, PollResults};
pub use tickets::{price_for_age, run_tickets, TicketSale};
pub use toppings::run_toppings;

/// Source of line-oriented answers.
pub trait Prompter {
    /// Show `prompt` and return the answer without its trailing newline.
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// Reads answers from stdin: an interactive prompt on a terminal, plain
/// lines when input is piped.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        if atty::is(atty::Stream::Stdin) {
            dialoguer::Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .context("Failed to read answer from terminal")
        } else {
            read_answer(&mut io::stdin().lock(), &mut io::stdout(), prompt)
        }
    }
}

/// Write `prompt`, then read one line from `input`. End of input is an error.
fn read_answer<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{}: ", prompt).context("Failed to write prompt")?;
    out.flush().context("Failed to write prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read answer from stdin")?;
    if read == 0 {
        anyhow::bail!("Input ended before an answer to: {}", prompt);
    }

    let answer = line.strip_suffix('\n').unwrap_or(&line);
    let answer = answer.strip_suffix('\r').unwrap_or(answer);
    Ok(answer.to_string())
}

/// Replays a fixed list of answers; errors once they run out.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts shown so far, in order
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .with_context(|| format!("No answer left for prompt: {}", prompt))
    }
}
