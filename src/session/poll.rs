//! Polling loop: collect one answer per person until told to stop.

use anyhow::Result;

use super::Prompter;
use crate::config::PollConfig;
use crate::ui::Output;

const NAME_PROMPT: &str = "What is your name?";
const REPEAT_PROMPT: &str = "Would you like to let another person respond? (yes/no)";

/// What a poll asks and how its results read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollQuestion {
    pub question: String,
    pub verb: String,
}

impl PollQuestion {
    pub fn new(question: impl Into<String>, verb: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            verb: verb.into(),
        }
    }

    pub fn vacation() -> Self {
        Self::new(
            "If you could visit one place in the world, where would you go?",
            "visit",
        )
    }
}

impl From<&PollConfig> for PollQuestion {
    fn from(config: &PollConfig) -> Self {
        Self::new(config.question.clone(), config.verb.clone())
    }
}

/// Responses keyed by name, kept in first-answer order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollResults {
    verb: String,
    responses: Vec<(String, String)>,
}

impl PollResults {
    pub fn new(verb: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            responses: Vec::new(),
        }
    }

    /// Store a response. A repeat name replaces its earlier answer in place.
    pub fn insert(&mut self, name: impl Into<String>, response: impl Into<String>) {
        let name = name.into();
        let response = response.into();
        match self.responses.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = response,
            None => self.responses.push((name, response)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.responses
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, r)| r.as_str())
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// "{name} would like to {verb} {response}." for each respondent
    pub fn lines(&self) -> Vec<String> {
        self.responses
            .iter()
            .map(|(name, response)| format!("{} would like to {} {}.", name, self.verb, response))
            .collect()
    }
}

/// Run the poll until a repeat answer matches `stop_answer` (case-insensitive).
pub fn run_poll(
    prompter: &mut dyn Prompter,
    question: &PollQuestion,
    stop_answer: &str,
    output: &Output,
) -> Result<PollResults> {
    let mut results = PollResults::new(question.verb.clone());

    loop {
        let name = prompter.ask(NAME_PROMPT)?;
        let response = prompter.ask(&question.question)?;
        results.insert(name, response);

        let repeat = prompter.ask(REPEAT_PROMPT)?;
        if repeat.trim().eq_ignore_ascii_case(stop_answer.trim()) {
            break;
        }
    }

    output.info("--- Poll Results ---");
    for line in results.lines() {
        output.detail(&line);
    }

    Ok(results)
}
