//! Console formatting and output.
//!
//! [`Output`] is the single place messages reach the terminal; the helpers
//! here only build strings.

pub mod output;

pub use output::{Output, OutputMode};

/// Check if quiet mode is enabled via the `TALLY_QUIET` environment variable
pub fn is_quiet() -> bool {
    std::env::var("TALLY_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Common text formatting patterns
pub mod format {
    /// Format whole dollars, with zero shown as "free"
    pub fn price(dollars: u64) -> String {
        if dollars == 0 {
            "free".to_string()
        } else {
            format!("${}", dollars)
        }
    }

    /// Uppercase the first character, leaving the rest as is
    pub fn capitalize(text: &str) -> String {
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
