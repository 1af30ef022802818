//! Parsing for token lifetimes written as `"3600"`, `"90s"`, `"30m"`, `"2h"` or `"7d"`

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::DurationError;

static DURATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)(\d+)\s*(s|sec|secs|seconds?|m|min|mins|minutes?|h|hrs?|hours?|d|days?|w|weeks?)?$")
        .unwrap()
});

/// Parse a duration into whole seconds.
///
/// A bare number is taken as seconds.
pub fn parse_duration(raw: &str) -> Result<i64, DurationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DurationError::Empty);
    }

    let captures = DURATION_REGEX
        .captures(trimmed)
        .ok_or_else(|| DurationError::Invalid(trimmed.to_string()))?;

    let amount: i64 = captures[1]
        .parse()
        .map_err(|_| DurationError::Overflow(trimmed.to_string()))?;

    let multiplier = match captures.get(2).map(|m| m.as_str().to_ascii_lowercase()) {
        None => 1,
        Some(unit) => match unit.chars().next() {
            Some('s') => 1,
            Some('m') => 60,
            Some('h') => 3_600,
            Some('d') => 86_400,
            Some('w') => 604_800,
            _ => return Err(DurationError::Invalid(trimmed.to_string())),
        },
    };

    amount
        .checked_mul(multiplier)
        .ok_or_else(|| DurationError::Overflow(trimmed.to_string()))
}
