//! Present value and net present value.

use crate::types::{CashFlow, CashFlowSeries, Instant, Rate};
use crate::yearfrac::year_fraction;

/// Discounts a cash flow to the valuation instant under the given rate.
///
/// The year distance is signed: a future flow is discounted back, a past
/// flow ends up with a negative distance and is compounded forward, since
/// the discount factor over negative years exceeds 1 for positive rates.
/// Both directions fall out of the same expression.
#[must_use]
pub fn present_value(flow: &CashFlow, rate: &Rate, valuation: Instant) -> f64 {
    let years = year_fraction(valuation, flow.instant());
    flow.value() * rate.discount_factor(years)
}

/// Discounts a cash flow to the current UTC instant.
///
/// Thin adapter over [`present_value`]; the core path always takes an
/// explicit valuation instant, and anything that needs reproducible output
/// should pass one instead of calling this.
#[must_use]
pub fn present_value_now(flow: &CashFlow, rate: &Rate) -> f64 {
    present_value(flow, rate, Instant::now())
}

/// Sums the present values of every flow in the series.
///
/// Reads the series as-is: no sorting is required and nothing is mutated.
#[must_use]
pub fn net_present_value(flows: &CashFlowSeries, rate: &Rate, valuation: Instant) -> f64 {
    flows
        .iter()
        .map(|flow| present_value(flow, rate, valuation))
        .sum()
}
