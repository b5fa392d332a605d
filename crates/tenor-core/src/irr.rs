//! Internal rate of return.
//!
//! The IRR of a cash flow stream is the rate at which its net present value
//! is zero, valued at the instant of the earliest flow. The search runs in
//! continuously-compounded space: a single smooth scalar parameter with
//! exponential derivatives, and no compounding frequency to pick for the
//! answer. Callers convert the solved rate to any other convention via
//! [`Rate::to_annual_effective`] or by constructing another variant from
//! [`Rate::to_continuous`].

use log::{debug, trace};

use tenor_math::solvers::{brent, SolverConfig};

use crate::error::{TenorError, TenorResult};
use crate::types::{CashFlowSeries, Rate};
use crate::valuation::net_present_value;

/// Lower edge of the search interval, just short of -100% continuous. The
/// discount factor explodes there, which pushes the net present value
/// positive whenever the stream leads with an outflow.
const BRACKET_LOW: f64 = -0.999999;

/// First upper bound tried: 10% per annum.
const BRACKET_HIGH_START: f64 = 0.10;

/// Expansion ceiling; past 100,000% p.a. the stream has no root worth
/// reporting.
const BRACKET_HIGH_CEILING: f64 = 1000.0;

/// Solver for the internal rate of return of a cash flow series.
///
/// Brackets a sign change of the net present value by doubling the upper
/// rate bound, then refines with Brent's method. The default tolerance
/// targets roughly twelve significant digits.
///
/// # Example
///
/// ```rust
/// use tenor_core::irr::IrrSolver;
/// use tenor_core::types::{CashFlow, CashFlowSeries, Instant};
///
/// let flows: CashFlowSeries = vec![
///     CashFlow::new(-100.0, Instant::from_ymd(2024, 1, 1).unwrap()),
///     CashFlow::new(110.0, Instant::from_ymd(2025, 1, 1).unwrap()),
/// ]
/// .into();
///
/// let rate = IrrSolver::new().solve(&flows).unwrap();
/// assert!((rate.to_continuous() - 0.1f64.ln_1p()).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct IrrSolver {
    config: SolverConfig,
}

impl Default for IrrSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl IrrSolver {
    /// Creates a solver with the default precision target (1e-12, 100
    /// iterations).
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::new(1e-12, 100),
        }
    }

    /// Sets the refinement tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the refinement iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Finds the continuous rate at which the series' net present value is
    /// zero, anchored at the earliest flow's instant.
    ///
    /// Works on a sorted private copy; the caller's series is left exactly
    /// as passed.
    ///
    /// # Errors
    ///
    /// - `TenorError::EmptyCashFlows` for an empty series.
    /// - `TenorError::UnbracketableRoot` when the net present value never
    ///   changes sign up to the expansion ceiling (e.g. all flows share one
    ///   sign).
    /// - `TenorError::ConvergenceFailed` when refinement exhausts its
    ///   iteration budget, wrapping the solver's error.
    pub fn solve(&self, flows: &CashFlowSeries) -> TenorResult<Rate> {
        let mut ordered = flows.clone();
        ordered.sort_by_instant();
        let Some(earliest) = ordered.first() else {
            return Err(TenorError::EmptyCashFlows);
        };
        let anchor = earliest.instant();

        let npv = |rate: f64| net_present_value(&ordered, &Rate::continuous(rate), anchor);

        let low = BRACKET_LOW;
        let mut high = BRACKET_HIGH_START;
        let npv_low = npv(low);
        let mut npv_high = npv(high);
        while npv_low * npv_high > 0.0 && high < BRACKET_HIGH_CEILING {
            high *= 2.0;
            npv_high = npv(high);
            trace!("IRR bracket expanded to [{low}, {high}], npv(high) = {npv_high:.6}");
        }
        if npv_low * npv_high > 0.0 {
            return Err(TenorError::UnbracketableRoot { low, high });
        }

        let result = brent(npv, low, high, &self.config)
            .map_err(|source| TenorError::ConvergenceFailed { source })?;
        debug!(
            "IRR converged to {:.9} after {} iterations (residual {:.2e})",
            result.root, result.iterations, result.residual
        );
        Ok(Rate::continuous(result.root))
    }
}

/// Solves for the internal rate of return with default settings.
///
/// Convenience wrapper over [`IrrSolver::solve`].
///
/// # Errors
///
/// See [`IrrSolver::solve`].
pub fn internal_rate_of_return(flows: &CashFlowSeries) -> TenorResult<Rate> {
    IrrSolver::new().solve(flows)
}
