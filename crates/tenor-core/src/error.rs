//! Error types for the Tenor library.
//!
//! All failures are explicit result values; nothing in the library panics on
//! caller input. Degenerate numeric inputs (a zero compounding frequency, a
//! rate below -100%) are deliberately *not* errors: rate arithmetic follows
//! IEEE semantics and lets infinities and NaNs propagate.

use thiserror::Error;

use tenor_math::MathError;

/// A specialized Result type for Tenor operations.
pub type TenorResult<T> = Result<T, TenorError>;

/// The main error type for Tenor operations.
#[derive(Error, Debug, Clone)]
pub enum TenorError {
    /// A period string did not match any supported format.
    #[error("unsupported period format: '{input}'")]
    MalformedPeriod {
        /// The string that failed to parse.
        input: String,
    },

    /// A period specification had the wrong number of strings.
    #[error("period specification requires 1 or 2 strings, got {count}")]
    PeriodArity {
        /// Number of strings supplied.
        count: usize,
    },

    /// An instant could not be constructed from its components.
    #[error("invalid instant: {message}")]
    InvalidInstant {
        /// Description of the invalid components.
        message: String,
    },

    /// IRR was asked for on an empty cash flow series.
    #[error("IRR requires at least one cash flow")]
    EmptyCashFlows,

    /// The net present value never changed sign within the search ceiling,
    /// so no rate can zero it (e.g. an all-inflow or all-outflow stream).
    #[error("IRR: no sign change of net present value in [{low}, {high}]; cannot bracket a root")]
    UnbracketableRoot {
        /// Lower rate bound evaluated.
        low: f64,
        /// Upper rate bound reached by the expansion.
        high: f64,
    },

    /// The refinement stage exhausted its iteration budget.
    #[error("IRR refinement did not converge")]
    ConvergenceFailed {
        /// The underlying solver failure.
        #[source]
        source: MathError,
    },
}

impl TenorError {
    /// Creates a malformed period error.
    #[must_use]
    pub fn malformed_period(input: impl Into<String>) -> Self {
        Self::MalformedPeriod {
            input: input.into(),
        }
    }

    /// Creates an invalid instant error.
    #[must_use]
    pub fn invalid_instant(message: impl Into<String>) -> Self {
        Self::InvalidInstant {
            message: message.into(),
        }
    }
}
