//! Console decoration helpers

use colored::Colorize;
use std::time::Duration;

pub fn green(s: &str) -> String {
    s.green().to_string()
}

pub fn red(s: &str) -> String {
    s.red().to_string()
}

pub fn gray(s: &str) -> String {
    s.bright_black().to_string()
}

pub fn success_mark() -> String {
    green("✔")
}

pub fn failure_mark() -> String {
    red("✘")
}

/// Milliseconds with two decimals, e.g. `0.42ms`
pub fn format_millis(d: Duration) -> String {
    format!("{:.2}ms", d.as_secs_f64() * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_millis_rounds_to_two_decimals() {
        assert_eq!(format_millis(Duration::from_micros(1234)), "1.23ms");
        assert_eq!(format_millis(Duration::from_nanos(5_000)), "0.01ms");
        assert_eq!(format_millis(Duration::ZERO), "0.00ms");
        assert_eq!(format_millis(Duration::from_secs(2)), "2000.00ms");
    }
}
