//! Minutes-since-midnight arithmetic for sector service windows.

use std::fmt;
use std::sync::LazyLock;

use chrono::{Local, NaiveTime, Timelike};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ports::PortError;

/// Number of minutes in a day.
pub const MINUTES_PER_DAY: i32 = 1440;

static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01]?[0-9]|2[0-3]):[0-5][0-9]$").expect("time pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Inclusive daily opening window, in minutes since local midnight.
///
/// Windows that wrap past midnight (`from > to`) never contain any minute.
pub struct ScheduleWindow {
    /// Opening minute (inclusive).
    pub from: i32,
    /// Closing minute (inclusive).
    pub to: i32,
}

impl ScheduleWindow {
    /// Construct a window from raw minute values.
    #[must_use]
    pub const fn new(from: i32, to: i32) -> Self {
        Self { from, to }
    }

    /// Whether `now_minutes` falls inside the window, both ends included.
    #[must_use]
    pub const fn contains(&self, now_minutes: i32) -> bool {
        self.from <= now_minutes && now_minutes <= self.to
    }
}

impl fmt::Display for ScheduleWindow {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} - {}",
            format_minutes(f64::from(self.from)),
            format_minutes(f64::from(self.to))
        )
    }
}

/// Render a minute count as zero-padded `HH:MM`.
///
/// Negative and NaN inputs render as `"00:00"`. Values past the end of the day
/// are not clamped, so `1500.0` renders as `"25:00"`.
#[must_use]
pub fn format_minutes(minutes: f64) -> String {
    if minutes.is_nan() || minutes < 0.0 {
        return "00:00".to_owned();
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is non-negative and saturating casts truncate fractions"
    )]
    let total = minutes.floor() as u64;
    let hours = total / 60;
    let mins = total % 60;
    format!("{hours:02}:{mins:02}")
}

/// Whether `time` is a 24-hour `H:MM` or `HH:MM` string.
#[must_use]
pub fn is_valid_time(time: &str) -> bool {
    TIME_PATTERN.is_match(time)
}

/// Parse a 24-hour `HH:MM` string into minutes since midnight.
///
/// # Errors
///
/// Returns [`PortError::InvalidTime`] when `time` does not match the
/// `HH:MM` pattern accepted by [`is_valid_time`].
pub fn time_to_minutes(time: &str) -> Result<i32, PortError> {
    let invalid = || PortError::InvalidTime(time.to_owned());

    if !is_valid_time(time) {
        return Err(invalid());
    }

    let (hours, minutes) = time.split_once(':').ok_or_else(invalid)?;
    let hours: i32 = hours.parse().map_err(|_err| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_err| invalid())?;
    Ok(hours * 60 + minutes)
}

/// Minute of the day for a wall-clock time.
#[must_use]
pub fn minute_of_day(time: NaiveTime) -> i32 {
    // hour() < 24 and minute() < 60, so the sum always fits
    i32::try_from(time.hour() * 60 + time.minute()).unwrap_or(0)
}

/// Current minute of the day on the local clock.
#[must_use]
pub fn now_minutes() -> i32 {
    minute_of_day(Local::now().time())
}
