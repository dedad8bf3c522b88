//! Validation logic for configuration sections.

use anyhow::Result;

use super::defaults::{DefaultsConfig, PollConfig, SessionConfig, TicketConfig};
use super::Config;

impl Config {
    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.defaults.validate()?;
        self.session.validate()?;
        self.poll.validate()?;
        self.tickets.validate()
    }
}

impl DefaultsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.pet_type.trim().is_empty() {
            anyhow::bail!("defaults.pet_type must not be empty");
        }
        Ok(())
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sentinel.trim().is_empty() {
            anyhow::bail!("session.sentinel must not be empty");
        }
        if self.stop_answer.trim().is_empty() {
            anyhow::bail!("session.stop_answer must not be empty");
        }
        Ok(())
    }
}

impl PollConfig {
    pub fn validate(&self) -> Result<()> {
        if self.verb.trim().is_empty() {
            anyhow::bail!("poll.verb must not be empty");
        }
        Ok(())
    }
}

impl TicketConfig {
    /// Tiers must be ordered: free ages come before child ages
    pub fn validate(&self) -> Result<()> {
        let limit = self.child_max_age.saturating_add(1);
        if self.free_under_age > limit {
            anyhow::bail!(
                "tickets.free_under_age ({}) must be at most child_max_age + 1 ({})",
                self.free_under_age,
                limit
            );
        }
        Ok(())
    }
}
