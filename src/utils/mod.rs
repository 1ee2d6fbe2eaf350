//! Utility functions shared by the loaders, charts and views

pub mod arrow_utils;
pub mod logging;

pub use logging::{log_operation_complete, log_operation_start, log_warning};

/// Round a value to two decimal places, the precision used for displayed salaries
#[must_use]
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Escape text for inclusion in HTML element content or attribute values
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
