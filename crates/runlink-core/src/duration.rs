//! Parsing for human-readable durations like "10s", "1m", "1h".

use std::time::Duration;

use thiserror::Error;

/// Error for malformed duration strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    /// The string is not `<integer><unit>` with unit `s`, `m`, or `h`.
    #[error("invalid duration '{0}': expected <integer><unit> where unit is s, m, or h")]
    InvalidFormat(String),
}

/// Parse a duration string of the form `<integer><unit>`.
///
/// Supported units are `s` (seconds), `m` (minutes), and `h` (hours).
/// Zero is a legal duration; the polling loops give it special meaning
/// (no polls at all).
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let invalid = || DurationError::InvalidFormat(input.to_string());

    let unit = input.chars().next_back().ok_or_else(invalid)?;
    let magnitude = &input[..input.len() - unit.len_utf8()];
    if magnitude.is_empty() {
        return Err(invalid());
    }

    let value: u64 = magnitude.parse().map_err(|_| invalid())?;
    let secs = match unit {
        's' => Some(value),
        'm' => value.checked_mul(60),
        'h' => value.checked_mul(3600),
        _ => return Err(invalid()),
    }
    .ok_or_else(invalid)?;

    Ok(Duration::from_secs(secs))
}

/// Format a duration in the largest unit that divides it evenly.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs != 0 && secs % 3600 == 0 {
        format!("{}h", secs / 3600)
    } else if secs != 0 && secs % 60 == 0 {
        format!("{}m", secs / 60)
    } else {
        format!("{}s", secs)
    }
}
