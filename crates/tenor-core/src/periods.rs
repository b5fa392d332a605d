//! Resolution of human-entered period strings to instants.
//!
//! A period string denotes a span of time whose granularity is inferred from
//! the string's shape, from a whole year down to a single millisecond:
//!
//! - `YYYY`
//! - `YYYY-MM`
//! - `YYYY-MM-DD`
//! - `YYYY-MM-DD HH`
//! - `YYYY-MM-DD HH:MM`
//! - `YYYY-MM-DD HH:MM:SS`
//! - `YYYY-MM-DD HH:MM:SS.mmm`
//!
//! `/` and `.` are accepted as date separators in place of `-`. Every span
//! is collapsed to its midpoint, always in UTC: `"2020"` resolves to the
//! middle of that year, `"2024-06"` to the middle of June 2024.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{TenorError, TenorResult};
use crate::types::Instant;
use crate::yearfrac::days_in_year;

/// A parsed period: where it starts and how long it lasts.
#[derive(Debug, Clone, Copy)]
struct Period {
    start: NaiveDateTime,
    span: Duration,
}

impl Period {
    fn midpoint(&self) -> NaiveDateTime {
        self.start + self.span / 2
    }
}

/// Resolves one or two period strings to a single instant.
///
/// With one string, returns the midpoint of the period it denotes. With two
/// strings, returns the midpoint between the two periods' own midpoints;
/// the argument order does not matter.
///
/// # Errors
///
/// - `TenorError::PeriodArity` for zero or more than two strings.
/// - `TenorError::MalformedPeriod` for any string that matches no supported
///   shape or names an impossible date or time.
///
/// # Example
///
/// ```rust
/// use tenor_core::periods::resolve_instant;
/// use tenor_core::types::Instant;
///
/// let mid = resolve_instant(&["2020-01-01", "2020-01-03"]).unwrap();
/// assert_eq!(mid, Instant::from_ymd_hms(2020, 1, 2, 12, 0, 0).unwrap());
/// ```
pub fn resolve_instant(periods: &[&str]) -> TenorResult<Instant> {
    match *periods {
        [single] => Ok(Instant::new(parse_period(single)?.midpoint().and_utc())),
        [first, second] => {
            let mid_a = parse_period(first)?.midpoint();
            let mid_b = parse_period(second)?.midpoint();
            let (lo, hi) = if mid_b < mid_a {
                (mid_b, mid_a)
            } else {
                (mid_a, mid_b)
            };
            Ok(Instant::new((lo + (hi - lo) / 2).and_utc()))
        }
        _ => Err(TenorError::PeriodArity {
            count: periods.len(),
        }),
    }
}

fn parse_period(input: &str) -> TenorResult<Period> {
    try_parse_period(input).ok_or_else(|| TenorError::malformed_period(input))
}

fn try_parse_period(input: &str) -> Option<Period> {
    let (date_part, time_part) = match input.split_once(' ') {
        Some((date, time)) => (date, Some(time)),
        None => (input, None),
    };

    // Bare 4-digit string: whole-year granularity.
    if time_part.is_none() && is_digits(date_part, 4) {
        let year: i32 = date_part.parse().ok()?;
        return Some(Period {
            start: NaiveDate::from_ymd_opt(year, 1, 1)?.and_time(NaiveTime::MIN),
            span: Duration::days(i64::from(days_in_year(year))),
        });
    }

    // Everything else carries a separator right after the year.
    let sep = match date_part.as_bytes().get(4) {
        Some(b'-') => '-',
        Some(b'/') => '/',
        Some(b'.') => '.',
        _ => return None,
    };
    let fields: Vec<&str> = date_part.split(sep).collect();

    match (fields.as_slice(), time_part) {
        ([year, month], None) => {
            let year: i32 = (is_digits(year, 4)).then(|| year.parse().ok())??;
            let month = field(month, 2)?;
            let start = NaiveDate::from_ymd_opt(year, month, 1)?;
            Some(Period {
                start: start.and_time(NaiveTime::MIN),
                span: Duration::days(month_days(year, month)),
            })
        }
        ([year, month, day], time_part) => {
            let year: i32 = (is_digits(year, 4)).then(|| year.parse().ok())??;
            let date = NaiveDate::from_ymd_opt(year, field(month, 2)?, field(day, 2)?)?;
            match time_part {
                None => Some(Period {
                    start: date.and_time(NaiveTime::MIN),
                    span: Duration::days(1),
                }),
                Some(time) => {
                    let (start, span) = time_period(time)?;
                    Some(Period {
                        start: date.and_time(start),
                        span,
                    })
                }
            }
        }
        _ => None,
    }
}

/// Parses the time-of-day part, returning the period start and its span.
fn time_period(time: &str) -> Option<(NaiveTime, Duration)> {
    let parts: Vec<&str> = time.split(':').collect();
    match *parts.as_slice() {
        [hour] => {
            let start = NaiveTime::from_hms_opt(field(hour, 2)?, 0, 0)?;
            Some((start, Duration::hours(1)))
        }
        [hour, minute] => {
            let start = NaiveTime::from_hms_opt(field(hour, 2)?, field(minute, 2)?, 0)?;
            Some((start, Duration::minutes(1)))
        }
        [hour, minute, second] => match second.split_once('.') {
            None => {
                let start =
                    NaiveTime::from_hms_opt(field(hour, 2)?, field(minute, 2)?, field(second, 2)?)?;
                Some((start, Duration::seconds(1)))
            }
            Some((second, milli)) => {
                let start = NaiveTime::from_hms_milli_opt(
                    field(hour, 2)?,
                    field(minute, 2)?,
                    field(second, 2)?,
                    field(milli, 3)?,
                )?;
                Some((start, Duration::milliseconds(1)))
            }
        },
        _ => None,
    }
}

fn is_digits(s: &str, width: usize) -> bool {
    s.len() == width && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a fixed-width, zero-padded numeric field.
fn field(s: &str, width: usize) -> Option<u32> {
    is_digits(s, width).then(|| s.parse().ok())?
}

fn month_days(year: i32, month: u32) -> i64 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        // February; month is already validated to 1..=12 here.
        _ => {
            if days_in_year(year) == 366 {
                29
            } else {
                28
            }
        }
    }
}
