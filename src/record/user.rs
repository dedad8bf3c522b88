//! User profile record.

use serde::Serialize;

use super::{CountedRecord, Counter, Record};

pub const LOGIN_ATTEMPTS_LABEL: &str = "login attempts";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    first_name: String,
    last_name: String,
    age: u32,
    email: String,
    location: String,
    login_attempts: Counter,
}

impl User {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        email: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            email: email.into(),
            location: location.into(),
            login_attempts: Counter::new(LOGIN_ATTEMPTS_LABEL),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn login_attempts(&self) -> u64 {
        self.login_attempts.get()
    }

    /// Record a single login.
    pub fn record_login(&mut self) {
        // +1 is never negative
        let _ = self.login_attempts.increment(1);
    }

    pub fn reset_login_attempts(&mut self) {
        self.login_attempts.reset();
    }
}

impl Record for User {
    fn kind(&self) -> &'static str {
        "user"
    }

    fn describe(&self) -> Vec<String> {
        vec![
            "User Profile:".to_string(),
            format!("Name: {}", self.full_name()),
            format!("Age: {}", self.age),
            format!("Email: {}", self.email),
            format!("Location: {}", self.location),
            format!("Login Attempts: {}", self.login_attempts.get()),
        ]
    }

    fn greeting(&self) -> String {
        format!("Hello, {}! Welcome back.", self.full_name())
    }
}

impl CountedRecord for User {
    fn counter(&self) -> &Counter {
        &self.login_attempts
    }

    fn counter_mut(&mut self) -> &mut Counter {
        &mut self.login_attempts
    }
}
