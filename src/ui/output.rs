//! Structured output abstraction for tally.
//!
//! Provides a unified interface for outputting messages in different modes:
//! - Human: Colored symbol-prefixed output for terminal display
//! - Json: One JSON object per line for programmatic consumption
//! - Quiet: Only errors are emitted
//!
//! The Output struct auto-detects TTY for color support and can be injected
//! with a custom writer for test capture.

use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use super::format::capitalize;
use crate::record::Record;

/// Output mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Human-readable colored output
    #[default]
    Human,
    /// JSON-formatted structured output
    Json,
    /// Silent mode - only errors
    Quiet,
}

/// Output abstraction with mode-aware formatting
#[derive(Clone)]
pub struct Output {
    mode: OutputMode,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    is_tty: bool,
}

impl Output {
    /// Create a new Output writing to stdout
    pub fn new(mode: OutputMode) -> Self {
        let is_tty = atty::is(atty::Stream::Stdout);
        Self {
            mode,
            writer: Arc::new(Mutex::new(Box::new(io::stdout()))),
            is_tty,
        }
    }

    /// Create an Output with a custom writer (for testing)
    pub fn with_writer(mode: OutputMode, writer: Box<dyn Write + Send>) -> Self {
        Self {
            mode,
            writer: Arc::new(Mutex::new(writer)),
            is_tty: false,
        }
    }

    /// Output a step message: "→ {msg}"
    pub fn step(&self, msg: &str) {
        self.prefixed("step", "→", msg, |p| p.cyan().to_string());
    }

    /// Output a success message: "✓ {msg}"
    pub fn success(&self, msg: &str) {
        self.prefixed("success", "✓", msg, |p| p.green().to_string());
    }

    /// Output a warning message: "⚠ {msg}"
    pub fn warn(&self, msg: &str) {
        self.prefixed("warning", "⚠", msg, |p| p.yellow().to_string());
    }

    /// Output an error message: "✗ {msg}"
    pub fn error(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                let prefix = if self.is_tty {
                    "✗".red().to_string()
                } else {
                    "✗".to_string()
                };
                self.write_line(&format!("{} {}", prefix, msg));
            }
            OutputMode::Json => {
                self.write_json("error", msg);
            }
            OutputMode::Quiet => {
                // Errors always output, even in quiet mode
                self.write_line(&format!("✗ {}", msg));
            }
        }
    }

    /// Output plain info text (no prefix)
    pub fn info(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => self.write_line(msg),
            OutputMode::Json => self.write_json("info", msg),
            OutputMode::Quiet => {}
        }
    }

    /// Output detail text (indented, for subordinate info)
    pub fn detail(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => self.write_line(&format!("  {}", msg)),
            OutputMode::Json => self.write_json("detail", msg),
            OutputMode::Quiet => {}
        }
    }

    /// Output a record: a heading plus its description lines, or a single
    /// `{"level":"record","kind":..,"record":{..}}` object in JSON mode.
    pub fn record<R: Record>(&self, record: &R) {
        match self.mode {
            OutputMode::Human => {
                let heading = capitalize(record.kind());
                let heading = if self.is_tty {
                    heading.bold().to_string()
                } else {
                    heading
                };
                self.write_line(&heading);
                for line in record.describe() {
                    self.write_line(&format!("  {}", line));
                }
            }
            OutputMode::Json => {
                let value = json!({
                    "level": "record",
                    "kind": record.kind(),
                    "record": record,
                });
                self.json(&value);
            }
            OutputMode::Quiet => {}
        }
    }

    /// Output a structured JSON event
    pub fn json(&self, value: &serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", value);
        }
    }

    /// Get the current output mode
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    fn prefixed(&self, level: &str, symbol: &str, msg: &str, paint: fn(&str) -> String) {
        match self.mode {
            OutputMode::Human => {
                let prefix = if self.is_tty {
                    paint(symbol)
                } else {
                    symbol.to_string()
                };
                self.write_line(&format!("{} {}", prefix, msg));
            }
            OutputMode::Json => self.write_json(level, msg),
            OutputMode::Quiet => {}
        }
    }

    /// Write a line to the output
    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }

    /// Write a JSON-formatted log line
    fn write_json(&self, level: &str, msg: &str) {
        self.json(&json!({
            "level": level,
            "msg": msg,
        }));
    }
}
