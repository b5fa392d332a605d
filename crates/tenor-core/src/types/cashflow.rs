//! Cash flow types.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Instant;
use crate::error::TenorResult;

/// A single dated cash flow.
///
/// A positive value denotes an inflow, a negative value an outflow. The
/// instant is always UTC. A cash flow is discrete: it occurs at a point in
/// time, not throughout a period of time.
///
/// Immutable once constructed; there is no identity beyond the two fields.
///
/// # Example
///
/// ```rust
/// use tenor_core::types::CashFlow;
///
/// let rent = CashFlow::from_periods(1000.0, &["2025-07-01"]).unwrap();
/// assert!(rent.value() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Amount in the currency of the analysis.
    value: f64,
    /// When the flow occurs (UTC).
    instant: Instant,
}

impl CashFlow {
    /// Creates a cash flow from a value and an instant.
    #[must_use]
    pub fn new(value: f64, instant: Instant) -> Self {
        Self { value, instant }
    }

    /// Creates a cash flow from a value and one or two period strings.
    ///
    /// The strings are resolved by [`crate::periods::resolve_instant`]: one
    /// string places the flow at the midpoint of that period, two strings at
    /// the midpoint between the two periods' midpoints.
    ///
    /// # Errors
    ///
    /// Surfaces the resolver's error unchanged when the specification is
    /// malformed or has the wrong arity.
    pub fn from_periods(value: f64, periods: &[&str]) -> TenorResult<Self> {
        Ok(Self {
            value,
            instant: Instant::from_periods(periods)?,
        })
    }

    /// Returns the flow amount.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the instant the flow occurs.
    #[must_use]
    pub fn instant(&self) -> Instant {
        self.instant
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.value, self.instant)
    }
}

/// An ordered series of cash flows.
///
/// Producers are not required to keep the series sorted;
/// [`sort_by_instant`](CashFlowSeries::sort_by_instant) is the **only**
/// mutating operation. Every aggregation (net present value, IRR) reads the
/// series or works on an internal copy, so a series may be shared freely
/// between read-only callers.
///
/// # Example
///
/// ```rust
/// use tenor_core::types::{CashFlow, CashFlowSeries, Instant};
///
/// let mut flows = CashFlowSeries::new();
/// flows.push(CashFlow::new(-100.0, Instant::from_ymd(2024, 1, 1).unwrap()));
/// flows.push(CashFlow::new(110.0, Instant::from_ymd(2025, 1, 1).unwrap()));
/// assert_eq!(flows.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSeries {
    flows: Vec<CashFlow>,
}

impl CashFlowSeries {
    /// Creates an empty series.
    #[must_use]
    pub fn new() -> Self {
        Self { flows: Vec::new() }
    }

    /// Adds a cash flow to the series.
    pub fn push(&mut self, flow: CashFlow) {
        self.flows.push(flow);
    }

    /// Returns the number of cash flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// Returns true if there are no cash flows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Returns the cash flows as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[CashFlow] {
        &self.flows
    }

    /// Returns the first cash flow, if any.
    #[must_use]
    pub fn first(&self) -> Option<&CashFlow> {
        self.flows.first()
    }

    /// Returns an iterator over the cash flows.
    pub fn iter(&self) -> impl Iterator<Item = &CashFlow> {
        self.flows.iter()
    }

    /// Sorts the series in place, ascending by instant.
    ///
    /// The sort is stable: flows at equal instants keep their relative
    /// order. This is the sole operation that mutates a series.
    pub fn sort_by_instant(&mut self) {
        self.flows.sort_by_key(|flow| flow.instant());
    }
}

impl From<Vec<CashFlow>> for CashFlowSeries {
    fn from(flows: Vec<CashFlow>) -> Self {
        Self { flows }
    }
}

impl FromIterator<CashFlow> for CashFlowSeries {
    fn from_iter<I: IntoIterator<Item = CashFlow>>(iter: I) -> Self {
        Self {
            flows: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CashFlowSeries {
    type Item = CashFlow;
    type IntoIter = std::vec::IntoIter<CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.flows.into_iter()
    }
}

impl<'a> IntoIterator for &'a CashFlowSeries {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.flows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(y: i32, m: u32, d: u32) -> Instant {
        Instant::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_cashflow_accessors() {
        let cf = CashFlow::new(-250.0, instant(2024, 3, 1));
        assert_eq!(cf.value(), -250.0);
        assert_eq!(cf.instant(), instant(2024, 3, 1));
    }

    #[test]
    fn test_from_periods_surfaces_resolver_error() {
        assert!(CashFlow::from_periods(50.0, &["feb-31-2025"]).is_err());
        assert!(CashFlow::from_periods(50.0, &[]).is_err());
    }

    #[test]
    fn test_sort_by_instant() {
        let mut flows: CashFlowSeries = vec![
            CashFlow::new(3.0, instant(2026, 1, 1)),
            CashFlow::new(1.0, instant(2024, 1, 1)),
            CashFlow::new(2.0, instant(2025, 1, 1)),
        ]
        .into();

        flows.sort_by_instant();

        let instants: Vec<_> = flows.iter().map(|cf| cf.instant()).collect();
        assert!(instants.windows(2).all(|w| w[0] < w[1]));
        // Each value stays attached to its original instant.
        assert_eq!(flows.as_slice()[0].value(), 1.0);
        assert_eq!(flows.as_slice()[1].value(), 2.0);
        assert_eq!(flows.as_slice()[2].value(), 3.0);
    }

    #[test]
    fn test_sort_is_stable() {
        let t = instant(2024, 6, 1);
        let mut flows: CashFlowSeries = vec![
            CashFlow::new(10.0, t),
            CashFlow::new(20.0, t),
            CashFlow::new(30.0, t),
        ]
        .into();

        flows.sort_by_instant();

        let values: Vec<_> = flows.iter().map(|cf| cf.value()).collect();
        assert_eq!(values, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_collect_and_iterate() {
        let flows: CashFlowSeries = (0..3)
            .map(|i| CashFlow::new(f64::from(i), instant(2024, 1, 1 + u32::try_from(i).unwrap())))
            .collect();

        assert_eq!(flows.len(), 3);
        assert_eq!(flows.first().unwrap().value(), 0.0);
        let total: f64 = (&flows).into_iter().map(|cf| cf.value()).sum();
        assert_eq!(total, 3.0);
    }
}
