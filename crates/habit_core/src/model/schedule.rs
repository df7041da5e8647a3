//! Time-of-day validation for habit schedules.
//!
//! # Responsibility
//! - Validate user-entered times before they reach `Habit::add_schedule`.
//! - Normalize accepted times to zero-padded `HH:MM`.
//!
//! # Invariants
//! - Every returned value matches `^[0-2][0-9]:[0-5][0-9]$` with hour <= 23,
//!   so lexicographic order equals chronological order.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static TIME_OF_DAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("valid time-of-day regex"));

/// Rejection reasons for schedule time input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleTimeError {
    /// Input is not shaped like `H:MM` or `HH:MM`.
    InvalidFormat(String),
    /// Input is well-formed but hour or minute is out of range.
    OutOfRange(String),
}

impl Display for ScheduleTimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(input) => {
                write!(f, "invalid time format `{input}`, expected HH:MM")
            }
            Self::OutOfRange(input) => {
                write!(f, "time `{input}` is out of range, expected 00:00-23:59")
            }
        }
    }
}

impl Error for ScheduleTimeError {}

/// Validates `input` as a 24-hour time of day and returns it as `HH:MM`.
///
/// Surrounding whitespace is ignored and a single-digit hour is accepted
/// (`7:05` becomes `07:05`). Minutes must always have two digits.
///
/// # Errors
/// - `InvalidFormat` when the shape does not match.
/// - `OutOfRange` when hour > 23 or minute > 59.
pub fn normalize_schedule_time(input: &str) -> Result<String, ScheduleTimeError> {
    let trimmed = input.trim();
    let captures = TIME_OF_DAY_RE
        .captures(trimmed)
        .ok_or_else(|| ScheduleTimeError::InvalidFormat(trimmed.to_string()))?;

    let hour: u8 = captures[1]
        .parse()
        .map_err(|_| ScheduleTimeError::InvalidFormat(trimmed.to_string()))?;
    let minute: u8 = captures[2]
        .parse()
        .map_err(|_| ScheduleTimeError::InvalidFormat(trimmed.to_string()))?;

    if hour > 23 || minute > 59 {
        return Err(ScheduleTimeError::OutOfRange(trimmed.to_string()));
    }

    Ok(format!("{hour:02}:{minute:02}"))
}

#[cfg(test)]
mod tests {
    use super::{normalize_schedule_time, ScheduleTimeError};

    #[test]
    fn accepts_zero_padded_times() {
        assert_eq!(normalize_schedule_time("07:30").unwrap(), "07:30");
        assert_eq!(normalize_schedule_time("00:00").unwrap(), "00:00");
        assert_eq!(normalize_schedule_time("23:59").unwrap(), "23:59");
    }

    #[test]
    fn pads_single_digit_hour_and_trims() {
        assert_eq!(normalize_schedule_time(" 7:05 ").unwrap(), "07:05");
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "0730", "7:5", "07:30:00", "ab:cd", "07-30", "123:00"] {
            let err = normalize_schedule_time(input).expect_err("input must be rejected");
            assert!(
                matches!(err, ScheduleTimeError::InvalidFormat(_)),
                "unexpected error for `{input}`: {err:?}"
            );
        }
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(
            normalize_schedule_time("24:00"),
            Err(ScheduleTimeError::OutOfRange("24:00".to_string()))
        );
        assert!(matches!(
            normalize_schedule_time("12:60"),
            Err(ScheduleTimeError::OutOfRange(_))
        ));
    }
}
