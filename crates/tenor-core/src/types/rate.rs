//! Interest rate representations and conversions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An interest rate under one of three compounding conventions.
///
/// The set of conventions is deliberately closed: the conversion identities
/// below hold between exactly these three forms, and the continuous form is
/// the canonical bridge for comparing rates and for root searches.
///
/// Two rates represent the same economic growth when their
/// [`to_continuous`](Rate::to_continuous) values agree.
///
/// No domain validation is performed. A zero compounding frequency or a rate
/// below -100% is not rejected; the arithmetic propagates whatever IEEE 754
/// produces (infinities, NaN). Callers needing guardrails add their own.
///
/// # Example
///
/// ```rust
/// use tenor_core::types::Rate;
///
/// // 6% nominal annual rate compounded monthly
/// let apr = Rate::annual_percentage(0.06, 12.0);
/// // ...grows like this effective annual rate:
/// assert!((apr.to_annual_effective() - 0.061678).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "convention", rename_all = "snake_case")]
pub enum Rate {
    /// Nominal annual rate compounded `periods_per_year` times per year.
    ///
    /// 5% compounded monthly and 5% compounded quarterly are different rates.
    AnnualPercentage {
        /// The nominal annual rate as a decimal (0.05 = 5%).
        value: f64,
        /// Compounding periods per year.
        periods_per_year: f64,
    },
    /// Rate effective per period, compounding `periods_per_year` times per
    /// year.
    ///
    /// 5% effective annually and 5% effective monthly are different rates.
    PeriodicEffective {
        /// The per-period rate as a decimal.
        value: f64,
        /// Compounding periods per year.
        periods_per_year: f64,
    },
    /// Continuously compounded rate; no frequency needed.
    Continuous {
        /// The continuous rate as a decimal.
        value: f64,
    },
}

impl Rate {
    /// Creates an annual percentage rate with the given compounding
    /// frequency.
    #[must_use]
    pub fn annual_percentage(value: f64, periods_per_year: f64) -> Self {
        Rate::AnnualPercentage {
            value,
            periods_per_year,
        }
    }

    /// Creates a periodic effective rate with the given compounding
    /// frequency.
    #[must_use]
    pub fn periodic_effective(value: f64, periods_per_year: f64) -> Self {
        Rate::PeriodicEffective {
            value,
            periods_per_year,
        }
    }

    /// Creates a continuously compounded rate.
    #[must_use]
    pub fn continuous(value: f64) -> Self {
        Rate::Continuous { value }
    }

    /// Multiplier converting a value `years` away from the valuation instant
    /// into its present value.
    ///
    /// Negative `years` (the flow already occurred) yields a factor above 1
    /// for positive rates: the past flow is compounded forward instead of
    /// discounted back.
    ///
    /// Formulas:
    ///
    /// - annual percentage: `(1 + v/n)^(-n*t)`
    /// - periodic effective: `(1 + v)^(-n*t)`
    /// - continuous: `e^(-v*t)`
    #[must_use]
    pub fn discount_factor(&self, years: f64) -> f64 {
        match *self {
            Rate::AnnualPercentage {
                value,
                periods_per_year,
            } => (1.0 + value / periods_per_year).powf(-periods_per_year * years),
            Rate::PeriodicEffective {
                value,
                periods_per_year,
            } => (1.0 + value).powf(-periods_per_year * years),
            Rate::Continuous { value } => (-value * years).exp(),
        }
    }

    /// The rate that, compounded exactly once per year, reproduces the same
    /// annual growth.
    #[must_use]
    pub fn to_annual_effective(&self) -> f64 {
        match *self {
            Rate::AnnualPercentage {
                value,
                periods_per_year,
            } => (1.0 + value / periods_per_year).powf(periods_per_year) - 1.0,
            Rate::PeriodicEffective {
                value,
                periods_per_year,
            } => (1.0 + value).powf(periods_per_year) - 1.0,
            Rate::Continuous { value } => value.exp_m1(),
        }
    }

    /// The instantaneous-compounding rate producing the same growth.
    ///
    /// `ln(1 + EffectiveAnnual)`; the identity conversion for a rate already
    /// in continuous form. This is the canonical representation: any two
    /// rates describing the same growth map to the same continuous value.
    #[must_use]
    pub fn to_continuous(&self) -> f64 {
        match *self {
            Rate::Continuous { value } => value,
            _ => self.to_annual_effective().ln_1p(),
        }
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Rate::AnnualPercentage {
                value,
                periods_per_year,
            } => write!(
                f,
                "{:.4}% annual percentage ({periods_per_year}x/year)",
                value * 100.0
            ),
            Rate::PeriodicEffective {
                value,
                periods_per_year,
            } => write!(
                f,
                "{:.4}% per period ({periods_per_year}x/year)",
                value * 100.0
            ),
            Rate::Continuous { value } => write!(f, "{:.4}% continuous", value * 100.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_discount_factor_at_zero_is_one() {
        let rates = [
            Rate::annual_percentage(0.05, 12.0),
            Rate::periodic_effective(0.004, 12.0),
            Rate::continuous(0.05),
        ];
        for rate in rates {
            assert_relative_eq!(rate.discount_factor(0.0), 1.0);
        }
    }

    #[test]
    fn test_annual_percentage_effective() {
        // 5% compounded monthly: (1 + 0.05/12)^12 - 1
        let rate = Rate::annual_percentage(0.05, 12.0);
        assert_relative_eq!(rate.to_annual_effective(), 0.051161897881733, epsilon = 1e-12);
    }

    #[test]
    fn test_continuous_effective() {
        let rate = Rate::continuous(0.05);
        assert_relative_eq!(rate.to_annual_effective(), 0.05f64.exp() - 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_to_continuous_agrees_across_conventions() {
        // Three spellings of the same economic rate: 12% nominal compounded
        // monthly == 1% effective per month.
        let apr = Rate::annual_percentage(0.12, 12.0);
        let periodic = Rate::periodic_effective(0.01, 12.0);
        let continuous = Rate::continuous(apr.to_continuous());

        assert_relative_eq!(apr.to_continuous(), periodic.to_continuous(), max_relative = 1e-9);
        assert_relative_eq!(
            apr.to_continuous(),
            continuous.to_continuous(),
            max_relative = 1e-9
        );
        assert_relative_eq!(
            apr.to_annual_effective(),
            continuous.to_annual_effective(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_discount_factor_symmetry() {
        // Compounding forward over -t undoes discounting over t.
        let rate = Rate::annual_percentage(0.07, 4.0);
        let df = rate.discount_factor(2.5);
        let cf = rate.discount_factor(-2.5);
        assert!(df < 1.0);
        assert!(cf > 1.0);
        assert_relative_eq!(df * cf, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_continuous_discounting() {
        let rate = Rate::continuous(0.10);
        assert_relative_eq!(rate.discount_factor(1.0), (-0.10f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(rate.discount_factor(-1.0), 0.10f64.exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_zero_periods_propagates_ieee() {
        // Deliberately unguarded: pow(inf, 0) is 1 under IEEE 754, so the
        // degenerate frequency quietly degrades instead of erroring.
        let rate = Rate::annual_percentage(0.05, 0.0);
        assert_eq!(rate.discount_factor(1.0), 1.0);
        assert_eq!(rate.to_annual_effective(), 0.0);
        assert_eq!(rate.to_continuous(), 0.0);
    }

    #[test]
    fn test_rate_below_minus_one_goes_nan() {
        let rate = Rate::annual_percentage(-2.0, 1.0);
        assert!(rate.discount_factor(0.5).is_nan());
    }

    #[test]
    fn test_serde_round_trip() {
        let rate = Rate::annual_percentage(0.05, 12.0);
        let json = serde_json::to_string(&rate).unwrap();
        assert!(json.contains("annual_percentage"));
        let back: Rate = serde_json::from_str(&json).unwrap();
        assert_eq!(rate, back);
    }
}
