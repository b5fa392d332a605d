//! Root-finding algorithms.
//!
//! This module provides the numerical solver used to invert valuation
//! functions:
//!
//! - [`brent`]: Robust bracketed method combining bisection, secant, and
//!   inverse quadratic interpolation
//!
//! Brent's method is the right default when no derivative is available and a
//! sign-changing interval is known: convergence is guaranteed for continuous
//! functions, and superlinear near simple roots.
//!
//! # Example: IRR-style inversion
//!
//! ```rust
//! use tenor_math::solvers::{brent, SolverConfig};
//!
//! // Net value of (-100 now, +110 in one year) at continuous rate r
//! let npv = |r: f64| -100.0 + 110.0 * (-r).exp();
//!
//! let result = brent(npv, -0.5, 0.5, &SolverConfig::default()).unwrap();
//! assert!((result.root - 0.1f64.ln_1p()).abs() < 1e-10);
//! ```

mod brent;

pub use brent::brent;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}
