//! Instant type for valuation timestamps.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{TenorError, TenorResult};

const MICROS_PER_DAY: f64 = 86_400_000_000.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// A point in time for financial calculations.
///
/// This is a newtype wrapper around `chrono::DateTime<Utc>`: every instant is
/// normalized to UTC, and sub-day precision is kept because period midpoints
/// carry a time-of-day (the middle of a non-leap year falls at noon).
///
/// A cash flow occurs *at* an instant, never throughout a span; spans only
/// exist inside the period resolver, which collapses them to their midpoint.
///
/// # Example
///
/// ```rust
/// use tenor_core::types::Instant;
///
/// let t0 = Instant::from_ymd(2025, 6, 15).unwrap();
/// let later = t0.add_days(30);
/// assert!(later > t0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instant(DateTime<Utc>);

impl Instant {
    /// Creates an instant from a UTC datetime.
    #[must_use]
    pub fn new(datetime: DateTime<Utc>) -> Self {
        Instant(datetime)
    }

    /// Creates an instant at midnight UTC from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::InvalidInstant` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> TenorResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|date| Instant(date.and_time(NaiveTime::MIN).and_utc()))
            .ok_or_else(|| TenorError::invalid_instant(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates an instant from date and time-of-day components, in UTC.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::InvalidInstant` if any component is out of range.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> TenorResult<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day);
        let time = NaiveTime::from_hms_opt(hour, minute, second);
        match (date, time) {
            (Some(d), Some(t)) => Ok(Instant(d.and_time(t).and_utc())),
            _ => Err(TenorError::invalid_instant(format!(
                "{year}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
            ))),
        }
    }

    /// Resolves one or two period strings to their midpoint instant.
    ///
    /// Convenience wrapper around [`crate::periods::resolve_instant`]; see
    /// that function for the supported formats.
    ///
    /// # Errors
    ///
    /// Fails for zero, more than two, or unparsable period strings.
    pub fn from_periods(periods: &[&str]) -> TenorResult<Self> {
        crate::periods::resolve_instant(periods)
    }

    /// Returns the current UTC instant.
    #[must_use]
    pub fn now() -> Self {
        Instant(Utc::now())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Adds a number of calendar days, keeping the time of day.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Instant(self.0 + chrono::Duration::days(days))
    }

    /// Advances to the same month/day/time-of-day one year later.
    ///
    /// A Feb 29 start in a non-leap target year normalizes forward to Mar 1.
    #[must_use]
    pub(crate) fn add_calendar_year(&self) -> Self {
        let date = self.0.date_naive();
        let next = NaiveDate::from_ymd_opt(date.year() + 1, date.month(), date.day())
            .unwrap_or_else(|| {
                NaiveDate::from_ymd_opt(date.year() + 1, 3, 1).expect("Mar 1 is always valid")
            });
        Instant(next.and_time(self.0.time()).and_utc())
    }

    /// Signed distance to `other` in fractional days.
    #[must_use]
    pub fn days_until(&self, other: Instant) -> f64 {
        let delta = other.0 - self.0;
        match delta.num_microseconds() {
            Some(micros) => micros as f64 / MICROS_PER_DAY,
            // Only reachable for spans beyond ~292k years.
            None => delta.num_milliseconds() as f64 / MILLIS_PER_DAY,
        }
    }

    /// Returns the underlying UTC datetime.
    #[must_use]
    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(datetime: DateTime<Utc>) -> Self {
        Instant(datetime)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.3fZ"))
    }
}
