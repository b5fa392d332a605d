//! # Tenor Core
//!
//! Valuation of dated cash flow streams and internal rate of return.
//!
//! This crate provides the building blocks for discounting money across
//! time:
//!
//! - **Types**: [`Instant`], [`CashFlow`], [`CashFlowSeries`], and the
//!   three-convention [`Rate`]
//! - **Periods**: resolution of human-entered period strings to midpoint
//!   instants
//! - **Year Fractions**: calendar-exact signed distances between instants
//! - **Valuation**: present value and net present value
//! - **IRR**: the continuous rate that zeroes a stream's net present value
//!
//! ## Design Philosophy
//!
//! - **Value Objects**: everything is an immutable value; the in-place sort
//!   of a series is the single documented exception
//! - **Explicit Time**: valuation instants are parameters, never hidden
//!   clock reads
//! - **IEEE Arithmetic**: degenerate numeric inputs are not validated away;
//!   rate arithmetic propagates what `f64` produces
//!
//! ## Example
//!
//! ```rust
//! use tenor_core::prelude::*;
//!
//! let flows: CashFlowSeries = vec![
//!     CashFlow::from_periods(-1000.0, &["2024-01-01"]).unwrap(),
//!     CashFlow::from_periods(1100.0, &["2025-01-01"]).unwrap(),
//! ]
//! .into();
//!
//! let rate = internal_rate_of_return(&flows).unwrap();
//! assert!((rate.to_annual_effective() - 0.10).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod irr;
pub mod periods;
pub mod types;
pub mod valuation;
pub mod yearfrac;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{TenorError, TenorResult};
    pub use crate::irr::{internal_rate_of_return, IrrSolver};
    pub use crate::periods::resolve_instant;
    pub use crate::types::{CashFlow, CashFlowSeries, Instant, Rate};
    pub use crate::valuation::{net_present_value, present_value, present_value_now};
    pub use crate::yearfrac::{days_in_year, year_fraction};
}

// Re-export commonly used items at crate root
pub use error::{TenorError, TenorResult};
pub use types::{CashFlow, CashFlowSeries, Instant, Rate};
