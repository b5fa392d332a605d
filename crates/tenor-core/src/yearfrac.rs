//! Calendar-exact year fractions.
//!
//! The distance between two instants is measured by stepping whole calendar
//! years first and expressing only the leftover as a fraction, so a span of
//! exactly one calendar year is exactly 1 whether or not it crosses a leap
//! day. A fixed divisor (365.25 and friends) cannot give that property.

use crate::types::Instant;

/// Number of days in a given calendar year: 366 for leap years, 365
/// otherwise.
#[must_use]
pub fn days_in_year(year: i32) -> u32 {
    if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
        366
    } else {
        365
    }
}

/// Signed distance from `a` to `b` in years.
///
/// Counts full calendar years first, then expresses the leftover as a
/// fraction of the length of the year the walk stopped in:
///
/// ```text
/// 2023-03-15 -> 2026-02-10
///    whole years = 2  (to 2025-03-15)
///    remainder   = 2025-03-15 -> 2026-02-10
///    year length = 365 (2025 is not leap)
///    result      = 2 + remainder / 365
/// ```
///
/// Antisymmetric: `year_fraction(a, b) == -year_fraction(b, a)`, and
/// `year_fraction(a, a) == 0`.
#[must_use]
pub fn year_fraction(a: Instant, b: Instant) -> f64 {
    if a == b {
        return 0.0;
    }

    // Normalize order, keep the sign.
    let (mut from, to, sign) = if b < a { (b, a, -1.0) } else { (a, b, 1.0) };

    let mut whole_years = 0.0;
    loop {
        let next = from.add_calendar_year();
        if next > to {
            break;
        }
        whole_years += 1.0;
        from = next;
    }

    if from == to {
        return sign * whole_years;
    }

    let remainder = from.days_until(to) / f64::from(days_in_year(from.year()));
    sign * (whole_years + remainder)
}
